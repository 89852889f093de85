//! Product Records

use jiff::Timestamp;

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub is_offer: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A page of products with the total number of rows matching the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductsPage {
    pub total: u64,
    pub items: Vec<ProductRecord>,
}
