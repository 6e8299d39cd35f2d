use sqlx::PgPool;

use crate::{
    config::{NameMatch, SerialMatch},
    error::{AppError, Result},
    models::{NewProduct, Product},
};

pub async fn find_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(products)
}

pub async fn find_by_name(pool: &PgPool, name: &str, mode: NameMatch) -> Result<Vec<Product>> {
    // strpos keeps the substring match literal; LIKE would treat % and _ as wildcards
    let sql = match mode {
        NameMatch::Contains => {
            "SELECT * FROM products WHERE strpos(product_name, $1) > 0 ORDER BY id"
        }
        NameMatch::Exact => "SELECT * FROM products WHERE product_name = $1 ORDER BY id",
    };

    let products = sqlx::query_as::<_, Product>(sql)
        .bind(name)
        .fetch_all(pool)
        .await?;

    Ok(products)
}

pub async fn find_by_serial(
    pool: &PgPool,
    serial_num: &str,
    mode: SerialMatch,
) -> Result<Option<Product>> {
    let sql = match mode {
        SerialMatch::CaseSensitive => "SELECT * FROM products WHERE serial_num = $1",
        SerialMatch::CaseInsensitive => {
            "SELECT * FROM products WHERE lower(serial_num) = lower($1) ORDER BY id LIMIT 1"
        }
    };

    let product = sqlx::query_as::<_, Product>(sql)
        .bind(serial_num)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn create_product(pool: &PgPool, product: &NewProduct) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (product_name, serial_num, product_desc, image_url, price)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(&product.product_name)
    .bind(&product.serial_num)
    .bind(&product.product_desc)
    .bind(&product.image_url)
    .bind(product.price)
    .fetch_one(pool)
    .await
    .map_err(|err| match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::duplicate_serial()
        }
        other => AppError::DatabaseError(other),
    })?;

    Ok(product)
}

pub async fn delete_product(pool: &PgPool, id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
