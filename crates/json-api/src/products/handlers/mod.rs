//! Product Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

/// Path of a single product resource.
pub(crate) fn product_location(id: impl std::fmt::Display) -> String {
    format!("/api/v1/products/{id}")
}
