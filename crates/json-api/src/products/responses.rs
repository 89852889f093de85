//! Product response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::records::{ProductRecord, ProductsPage};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: i64,

    /// The product display name
    pub name: String,

    /// The unit price of the product
    pub price: f64,

    /// Whether the product is on offer
    pub is_offer: bool,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_i64(),
            name: product.name,
            price: product.price,
            is_offer: product.is_offer,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// Number of products matching the filter, ignoring pagination
    pub total: u64,

    /// The requested page of products
    pub items: Vec<ProductResponse>,
}

impl From<ProductsPage> for ProductsResponse {
    fn from(page: ProductsPage) -> Self {
        ProductsResponse {
            total: page.total,
            items: page.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Product Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDeletedResponse {
    /// Confirmation message naming the product
    pub message: String,

    /// Deleted product id
    pub id: i64,
}

impl From<ProductRecord> for ProductDeletedResponse {
    fn from(product: ProductRecord) -> Self {
        ProductDeletedResponse {
            message: format!("Product '{}' deleted successfully", product.name),
            id: product.id.into_i64(),
        }
    }
}
