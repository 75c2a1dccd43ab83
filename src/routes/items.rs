//! Item CRUD routes.
//! `/items/*id` captures the whole suffix so that anything other than a plain integer is rejected as an invalid id.
//! HEAD is routed explicitly: `get` would otherwise answer it by running the GET handler.

use crate::handlers::items::{
    collection_method_not_allowed, create, delete, item_method_not_allowed, list, missing_id, read,
    update,
};
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::any, routing::get, Router};

pub fn item_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/items",
            get(list)
                .head(collection_method_not_allowed)
                .post(create)
                .fallback(collection_method_not_allowed),
        )
        .route("/items/", any(missing_id))
        .route(
            "/items/*id",
            get(read)
                .head(item_method_not_allowed)
                .put(update)
                .delete(delete)
                .fallback(item_method_not_allowed),
        )
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
