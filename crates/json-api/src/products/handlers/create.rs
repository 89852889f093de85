//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use catalog_app::domain::products::data::NewProduct;

use crate::{
    extensions::*,
    products::{
        errors::into_status_error, handlers::product_location, requests::CreateProductRequest,
        responses::ProductResponse,
    },
    state::State,
};

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid product payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(json, depot, res),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = NewProduct::try_from(json.into_inner()).or_422("Invalid product payload")?;

    let product = state
        .app
        .products
        .create_product(product)
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("product_id", tracing::field::display(product.id));

    res.add_header(LOCATION, product_location(product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_id = %product.id, "created product");

    Ok(Json(product.into()))
}
