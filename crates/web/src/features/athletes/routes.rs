use axum::{
    Router,
    routing::{get, patch},
};
use storage::Database;

use super::handlers::{
    create_athlete, get_athlete, list_athletes, list_athletes_paginated, query_athletes,
    update_athlete,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_athletes).post(create_athlete))
        .route("/query", get(query_athletes))
        .route("/paginated", get(list_athletes_paginated))
        .route("/:id", patch(update_athlete).get(get_athlete))
}
