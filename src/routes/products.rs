use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use http::{HeaderValue, StatusCode, header};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{CreateProductRequest, NewProduct, ProductDto, ProductListQuery},
};

// Characters that cannot appear verbatim in a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn product_location(serial_num: &str) -> Result<HeaderValue> {
    let location = format!(
        "/products/{}",
        utf8_percent_encode(serial_num, PATH_SEGMENT)
    );

    HeaderValue::from_str(&location)
        .map_err(|e| AppError::InternalError(format!("Invalid Location header: {}", e)))
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListQuery>,
) -> Result<Json<Vec<ProductDto>>> {
    let products = state
        .products
        .list_by_name_filter(params.product_name.as_deref())
        .await?;

    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(serial_num): Path<String>,
) -> Result<Json<ProductDto>> {
    let product = state.products.find_by_serial(&serial_num).await?;

    Ok(Json(product.into()))
}

pub async fn create_product(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, HeaderValue); 1], Json<ProductDto>)> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!("Rejected product payload: {}", rejection.body_text());
        match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(rejection.body_text()),
            _ => AppError::BadRequest(rejection.body_text()),
        }
    })?;

    let new_product = NewProduct::try_from(payload)?;
    let product = state.products.insert(new_product).await?;
    let location = product_location(&product.serial_num)?;

    tracing::info!(id = product.id, serial_num = %product.serial_num, "Product created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product.into()),
    ))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(serial_num): Path<String>,
) -> Result<StatusCode> {
    state.products.delete_by_serial(&serial_num).await?;

    tracing::info!(serial_num = %serial_num, "Product deleted");

    Ok(StatusCode::NO_CONTENT)
}
