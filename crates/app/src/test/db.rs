//! Per-test `PostgreSQL` databases inside one shared container.

use std::sync::atomic::{AtomicUsize, Ordering};

use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

const USER: &str = "catalog_test";
const PASSWORD: &str = "catalog_test_password";

static CONTAINER: OnceCell<ContainerAsync<Postgres>> = OnceCell::const_new();
static NEXT_DATABASE: AtomicUsize = AtomicUsize::new(0);

async fn container() -> &'static ContainerAsync<Postgres> {
    CONTAINER
        .get_or_init(|| async {
            Postgres::default()
                .with_user(USER)
                .with_password(PASSWORD)
                .with_db_name(USER)
                .with_tag("17-alpine")
                .start()
                .await
                .expect("Failed to start PostgreSQL container")
        })
        .await
}

async fn database_url(database: &str) -> String {
    let port = container()
        .await
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_owned());

    format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/{database}")
}

/// A freshly migrated database owned by one test.
///
/// The database is dropped together with this value.
#[derive(Debug)]
pub struct TestDb {
    pool: PgPool,
    name: String,
    admin_url: String,
}

impl TestDb {
    pub async fn new() -> Self {
        let name = format!(
            "catalog_test_{}_{}",
            std::process::id(),
            NEXT_DATABASE.fetch_add(1, Ordering::Relaxed)
        );

        let admin_url = database_url("postgres").await;
        let mut admin = PgConnection::connect(&admin_url)
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut admin)
            .await
            .expect("Failed to create test database");

        admin.close().await.expect("Failed to close admin connection");

        let pool = PgPool::connect(&database_url(&name).await)
            .await
            .expect("Failed to connect to test database");

        crate::database::migrate(&pool)
            .await
            .expect("Failed to run migrations on test database");

        Self {
            pool,
            name,
            admin_url,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let name = std::mem::take(&mut self.name);
        let admin_url = std::mem::take(&mut self.admin_url);

        // Drop cannot await; the statement runs on a thread with its own runtime.
        let dropped = std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;

            runtime.block_on(async {
                let mut admin = PgConnection::connect(&admin_url).await?;

                sqlx::query(&format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"))
                    .execute(&mut admin)
                    .await?;

                admin.close().await
            })?;

            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(())
        })
        .join();

        if let Ok(Err(error)) = dropped {
            eprintln!("Failed to drop test database: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::products::ProductsServiceError;

    use super::*;

    #[tokio::test]
    async fn migrations_create_empty_products_table() -> TestResult {
        let test_db = TestDb::new().await;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(test_db.pool())
            .await?;

        assert_eq!(count, 0, "fresh database should have no products");

        Ok(())
    }

    #[tokio::test]
    async fn products_table_check_violations_map_to_invalid_data() -> TestResult {
        let test_db = TestDb::new().await;

        for insert in [
            "INSERT INTO products (name, price) VALUES ('Broken', 0)",
            "INSERT INTO products (name, price) VALUES ('   ', 10)",
        ] {
            let error = sqlx::query(insert)
                .execute(test_db.pool())
                .await
                .err()
                .ok_or("expected the check constraint to reject the row")?;

            let error = ProductsServiceError::from(error);

            assert!(
                matches!(error, ProductsServiceError::InvalidData),
                "expected InvalidData for {insert}, got {error:?}"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn dropping_test_db_drops_the_database() -> TestResult {
        let test_db = TestDb::new().await;
        let name = test_db.name.clone();

        drop(test_db);

        let mut admin = PgConnection::connect(&database_url("postgres").await).await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1)")
                .bind(&name)
                .fetch_one(&mut admin)
                .await?;

        assert!(!exists, "database {name} should be gone after drop");

        Ok(())
    }
}
