//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use catalog_app::domain::products::{ProductsServiceError, records::ProductId};

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::Sql(source) => {
            error!("product store failure: {source}");

            StatusError::internal_server_error()
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
    }
}

/// Like [`into_status_error`], naming `product` when it does not exist.
pub(crate) fn for_product(product: ProductId) -> impl FnOnce(ProductsServiceError) -> StatusError {
    move |error| match error {
        ProductsServiceError::NotFound => {
            StatusError::not_found().brief(format!("Product with id {product} not found"))
        }
        error => into_status_error(error),
    }
}
