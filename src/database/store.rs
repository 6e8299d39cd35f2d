use async_trait::async_trait;

use crate::{
    config::{NameMatch, SerialMatch},
    error::Result,
    models::{NewProduct, Product},
};

/// Persistence operations over the `products` table.
///
/// Implementations must enforce serial-number uniqueness themselves and
/// report a violation as [`AppError::Conflict`](crate::error::AppError),
/// so a duplicate that slips past the repository's pre-check still surfaces
/// as a conflict.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn all(&self) -> Result<Vec<Product>>;

    async fn by_name(&self, name: &str, mode: NameMatch) -> Result<Vec<Product>>;

    async fn by_serial(&self, serial_num: &str, mode: SerialMatch) -> Result<Option<Product>>;

    async fn by_id(&self, id: i32) -> Result<Option<Product>>;

    async fn insert(&self, product: &NewProduct) -> Result<Product>;

    /// Returns the number of rows removed.
    async fn delete(&self, id: i32) -> Result<u64>;

    async fn ping(&self) -> Result<()>;
}
