use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    config::{NameMatch, SerialMatch},
    database::{ProductStore, check_health},
    error::Result,
    models::{NewProduct, Product},
    queries::product_queries,
};

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn all(&self) -> Result<Vec<Product>> {
        product_queries::find_all(&self.pool).await
    }

    async fn by_name(&self, name: &str, mode: NameMatch) -> Result<Vec<Product>> {
        product_queries::find_by_name(&self.pool, name, mode).await
    }

    async fn by_serial(&self, serial_num: &str, mode: SerialMatch) -> Result<Option<Product>> {
        product_queries::find_by_serial(&self.pool, serial_num, mode).await
    }

    async fn by_id(&self, id: i32) -> Result<Option<Product>> {
        product_queries::find_by_id(&self.pool, id).await
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product> {
        product_queries::create_product(&self.pool, product).await
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        product_queries::delete_product(&self.pool, id).await
    }

    async fn ping(&self) -> Result<()> {
        check_health(&self.pool).await
    }
}
