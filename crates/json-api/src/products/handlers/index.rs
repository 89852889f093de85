//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use catalog_app::domain::products::{data::ProductsQuery, validation::FlagInput};

use crate::{
    extensions::*,
    products::{errors::into_status_error, responses::ProductsResponse},
    state::State,
};

/// Product Index Handler
///
/// Returns a page of products with the total number matching the filter.
/// `limit` is capped at 100.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Page of products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid query parameters"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.list",
    skip(skip, limit, is_offer, depot),
    fields(total = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    skip: QueryParam<i64, false>,
    limit: QueryParam<i64, false>,
    is_offer: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let is_offer = is_offer.into_inner().map(FlagInput::Text);

    let query = ProductsQuery::validate(skip.into_inner(), limit.into_inner(), is_offer.as_ref())
        .or_422("Invalid query parameters")?;

    let page = state
        .app
        .products
        .list_products(query)
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("total", page.total);

    Ok(Json(page.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::domain::products::{
        MockProductsService, ProductsServiceError,
        data::Pagination,
        records::{ProductId, ProductsPage},
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products").get(handler))
    }

    fn expect_only_list(repo: &mut MockProductsService) {
        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_update_product().never();
        repo.expect_delete_product().never();
    }

    #[tokio::test]
    async fn test_index_defaults_to_first_hundred() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(|query| *query == ProductsQuery::default())
            .return_once(|_| {
                Ok(ProductsPage {
                    total: 0,
                    items: vec![],
                })
            });

        expect_only_list(&mut repo);

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let response: ProductsResponse = res.take_json().await?;

        assert_eq!(response.total, 0);
        assert!(response.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_products_in_order_with_total() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(|query| query.pagination == Pagination::new(2, 2))
            .return_once(|_| {
                Ok(ProductsPage {
                    total: 5,
                    items: vec![
                        make_product(ProductId::from_i64(3)),
                        make_product(ProductId::from_i64(4)),
                    ],
                })
            });

        expect_only_list(&mut repo);

        let response: ProductsResponse =
            TestClient::get("http://example.com/products?skip=2&limit=2")
                .send(&make_service(repo))
                .await
                .take_json()
                .await?;

        let ids: Vec<i64> = response.items.iter().map(|product| product.id).collect();

        assert_eq!(response.total, 5);
        assert_eq!(ids, vec![3, 4]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_caps_limit_at_one_hundred() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(|query| query.pagination.limit == 100)
            .return_once(|_| {
                Ok(ProductsPage {
                    total: 0,
                    items: vec![],
                })
            });

        expect_only_list(&mut repo);

        let res = TestClient::get("http://example.com/products?limit=1000")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_offer_filter() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(|query| query.is_offer == Some(true))
            .return_once(|_| {
                Ok(ProductsPage {
                    total: 0,
                    items: vec![],
                })
            });

        expect_only_list(&mut repo);

        let res = TestClient::get("http://example.com/products?is_offer=true")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_negative_skip_returns_422() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products().never();
        expect_only_list(&mut repo);

        let res = TestClient::get("http://example.com/products?skip=-1")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_zero_limit_returns_422() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products().never();
        expect_only_list(&mut repo);

        let res = TestClient::get("http://example.com/products?limit=0")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_unrecognised_offer_flag_returns_422() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products().never();
        expect_only_list(&mut repo);

        let res = TestClient::get("http://example.com/products?is_offer=maybe")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_store_error_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|_| Err(ProductsServiceError::Sql(
                catalog_app::database::StoreError::PoolTimedOut,
            )));

        expect_only_list(&mut repo);

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
