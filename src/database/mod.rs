mod connection;
#[cfg(test)]
pub mod memory;
mod postgres;
mod store;

pub use connection::{check_health, create_pool};
pub use postgres::PgProductStore;
pub use store::ProductStore;
