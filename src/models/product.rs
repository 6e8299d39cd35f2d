use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::{AppError, Result};

pub const PRODUCT_NAME_MAX: u64 = 50;
pub const SERIAL_NUM_MAX: u64 = 10;
pub const PRODUCT_DESC_MAX: u64 = 50;
pub const IMAGE_URL_MAX: u64 = 100;

/// A row of the `products` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub product_name: String,
    pub serial_num: String,
    pub product_desc: String,
    pub image_url: String,
    pub price: i32,
}

/// A validated product that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub product_name: String,
    pub serial_num: String,
    pub product_desc: String,
    pub image_url: String,
    pub price: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,
    pub product_name: String,
    pub serial_num: String,
    pub product_desc: String,
    pub image_url: String,
    pub price: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(
        required(message = "productName is required"),
        custom(function = "not_blank", message = "productName is required"),
        length(max = PRODUCT_NAME_MAX, message = "productName must be at most 50 characters")
    )]
    pub product_name: Option<String>,

    #[validate(
        required(message = "serialNum is required"),
        custom(function = "not_blank", message = "serialNum is required"),
        length(max = SERIAL_NUM_MAX, message = "serialNum must be at most 10 characters")
    )]
    pub serial_num: Option<String>,

    #[validate(
        required(message = "productDesc is required"),
        custom(function = "not_blank", message = "productDesc is required"),
        length(max = PRODUCT_DESC_MAX, message = "productDesc must be at most 50 characters")
    )]
    pub product_desc: Option<String>,

    #[validate(
        required(message = "imageUrl is required"),
        custom(function = "not_blank", message = "imageUrl is required"),
        length(max = IMAGE_URL_MAX, message = "imageUrl must be at most 100 characters")
    )]
    pub image_url: Option<String>,

    #[serde(default)]
    pub price: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub product_name: Option<String>,
}

fn not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = AppError;

    fn try_from(request: CreateProductRequest) -> Result<Self> {
        request.validate()?;

        let CreateProductRequest {
            product_name: Some(product_name),
            serial_num: Some(serial_num),
            product_desc: Some(product_desc),
            image_url: Some(image_url),
            price,
        } = request
        else {
            return Err(AppError::InternalError(
                "validated product request is missing a required field".to_string(),
            ));
        };

        Ok(NewProduct {
            product_name,
            serial_num,
            product_desc,
            image_url,
            price,
        })
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            product_name: product.product_name,
            serial_num: product.serial_num,
            product_desc: product.product_desc,
            image_url: product.image_url,
            price: product.price,
        }
    }
}
