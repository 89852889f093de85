use catalog_app::{
    database::{self, Db},
    domain::products::{
        PgProductsService, ProductsService, data::NewProduct, validation::FlagInput,
    },
};
use clap::Args;

const DEMO_PRODUCTS: [(&str, f64, bool); 3] = [
    ("Laptop HP", 899.99, false),
    ("Mouse Gamer", 49.99, true),
    ("Teclado Mecánico", 129.99, true),
];

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    let service = PgProductsService::new(Db::new(pool));

    for (name, price, is_offer) in DEMO_PRODUCTS {
        let flag = FlagInput::Bool(is_offer);
        let product = NewProduct::validate(Some(name), Some(price), Some(&flag))
            .map_err(|error| format!("invalid demo product '{name}': {error}"))?;

        let created = service
            .create_product(product)
            .await
            .map_err(|error| format!("failed to create product '{name}': {error}"))?;

        println!("product {}: {} ({})", created.id, created.name, created.price);
    }

    Ok(())
}
