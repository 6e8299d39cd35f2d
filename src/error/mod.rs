mod app_error;

pub use app_error::{AppError, DUPLICATE_SERIAL_MESSAGE, wire_field_name};

pub type Result<T> = std::result::Result<T, AppError>;
