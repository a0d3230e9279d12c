// ABOUTME: HTTP route assembly for the recipe catalog service
// ABOUTME: Exposes per-area routers and the merged application router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! HTTP routes
//!
//! Route handlers bind the service layer to the wire. Presentation-only
//! transformations (duration display formatting) happen here, in the
//! response DTOs, so service and store stay presentation-free.

pub mod health;
pub mod recipes;

pub use health::HealthRoutes;
pub use recipes::RecipeRoutes;

use crate::database::Database;
use axum::Router;

/// Assemble the full application router
#[must_use]
pub fn app_router(database: Database) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(RecipeRoutes::routes(database))
}
