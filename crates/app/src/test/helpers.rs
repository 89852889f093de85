//! Test Helpers

use crate::{
    domain::products::{
        ProductsService,
        data::NewProduct,
        records::ProductRecord,
        validation::FlagInput,
    },
    test::TestContext,
};

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    price: f64,
    is_offer: bool,
) -> Result<ProductRecord, Box<dyn std::error::Error>> {
    let product =
        NewProduct::validate(Some(name), Some(price), Some(&FlagInput::Bool(is_offer)))?;

    Ok(ctx.products.create_product(product).await?)
}
