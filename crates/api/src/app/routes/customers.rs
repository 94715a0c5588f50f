//! Customer endpoints.
//!
//! Both handlers are unfinished placeholders: they answer with a fixed
//! greeting and never touch customer data. The `{id}` segment is accepted
//! as-is and ignored.

use axum::{extract::Path, routing::get, Router};

pub const PLACEHOLDER_BODY: &str = "Hello World";

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_customers))
        .route("/:id", get(get_customer))
}

pub async fn list_customers() -> &'static str {
    PLACEHOLDER_BODY
}

pub async fn get_customer(Path(_id): Path<String>) -> &'static str {
    PLACEHOLDER_BODY
}
