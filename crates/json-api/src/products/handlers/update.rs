//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use catalog_app::domain::products::{data::ProductUpdate, records::ProductId};

use crate::{
    extensions::*,
    products::{errors::for_product, requests::UpdateProductRequest, responses::ProductResponse},
    state::State,
};

/// Product Update Handler
///
/// Overwrites only the supplied fields; an empty body just refreshes
/// `updated_at`.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid product payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot),
    fields(
        product_id = tracing::field::Empty,
        fields_set = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = ProductId::from_i64(id.into_inner());
    let update = ProductUpdate::try_from(json.into_inner()).or_422("Invalid product payload")?;

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(product));
    span.record("fields_set", !update.is_empty());

    let updated = state
        .app
        .products
        .update_product(product, update)
        .await
        .map_err(for_product(product))?;

    tracing::info!(product_id = %product, "updated product");

    Ok(Json(updated.into()))
}
