// ABOUTME: Route handlers for the recipe REST API - listing, detail fetch, and submission
// ABOUTME: Response DTOs add the human-readable cooking-time rendition alongside the raw field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Recipe routes
//!
//! | Method & path       | Success | Failure |
//! |---------------------|---------|---------|
//! | `GET /recipes/`     | 200 ordered list | 500 on storage failure |
//! | `GET /recipes/{id}` | 200 detail view  | 404 if absent |
//! | `POST /recipes/`    | 201 created entity | 422 on validation failure |
//!
//! The `ingredients` request field is itself a JSON-encoded string (a JSON
//! object serialized to text, then embedded as a string field). That
//! double-encoding is part of the wire contract and is preserved here.

use crate::database::Database;
use crate::errors::AppError;
use crate::formatters::format_duration;
use crate::models::{Recipe, RecipeDetail, RecipeDraft};
use crate::services::RecipeService;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

/// A recipe as returned by the listing and creation endpoints
///
/// `ingredients` stays in its raw text form; only the detail endpoint
/// decodes it.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeResponse {
    /// Store-assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// View counter
    pub views: i64,
    /// Raw ISO-8601 duration as stored
    pub cooking_time: String,
    /// Human-readable rendition of `cooking_time`
    pub cooking_time_display: String,
    /// JSON-encoded ingredient mapping, verbatim
    pub ingredients: String,
    /// Free-text description
    pub description: String,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            cooking_time_display: format_duration(&recipe.cooking_time),
            id: recipe.id,
            name: recipe.name,
            views: recipe.views,
            cooking_time: recipe.cooking_time,
            ingredients: recipe.ingredients,
            description: recipe.description,
        }
    }
}

/// Response for the listing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ListRecipesResponse {
    /// Recipes in presentation order
    pub recipes: Vec<RecipeResponse>,
    /// Total number of recipes
    pub total: u32,
}

/// A recipe as returned by the detail endpoint, with decoded ingredients
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeDetailResponse {
    /// Store-assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// View counter
    pub views: i64,
    /// Raw ISO-8601 duration as stored
    pub cooking_time: String,
    /// Human-readable rendition of `cooking_time`
    pub cooking_time_display: String,
    /// Decoded ingredient mapping; `null` when the stored text is not a JSON object
    pub ingredients: Option<serde_json::Map<String, serde_json::Value>>,
    /// Free-text description
    pub description: String,
}

impl From<RecipeDetail> for RecipeDetailResponse {
    fn from(detail: RecipeDetail) -> Self {
        Self {
            cooking_time_display: format_duration(&detail.cooking_time),
            id: detail.id,
            name: detail.name,
            views: detail.views,
            cooking_time: detail.cooking_time,
            ingredients: detail.ingredients,
            description: detail.description,
        }
    }
}

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes over the given database
    #[must_use]
    pub fn routes(database: Database) -> Router {
        let service = RecipeService::new(database);

        Router::new()
            .route(
                "/recipes/",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route("/recipes/:id", get(Self::handle_get))
            .with_state(service)
    }

    /// Handle `GET /recipes/` - list recipes in presentation order
    async fn handle_list(State(service): State<RecipeService>) -> Result<Response, AppError> {
        let recipes = service.list().await?;

        let response = ListRecipesResponse {
            total: u32::try_from(recipes.len()).unwrap_or(u32::MAX),
            recipes: recipes.into_iter().map(Into::into).collect(),
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle `GET /recipes/:id` - fetch a single recipe with decoded ingredients
    async fn handle_get(
        State(service): State<RecipeService>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let detail = service.get(id).await?;
        let response: RecipeDetailResponse = detail.into();

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle `POST /recipes/` - validate and persist a submitted recipe
    async fn handle_create(
        State(service): State<RecipeService>,
        Json(draft): Json<RecipeDraft>,
    ) -> Result<Response, AppError> {
        let recipe = service.create(&draft).await?;
        let response: RecipeResponse = recipe.into();

        Ok((StatusCode::CREATED, Json(response)).into_response())
    }
}
