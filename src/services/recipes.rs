// ABOUTME: Recipe service orchestration - validation gate, ordered listing, detail assembly
// ABOUTME: Validation failures carry per-field detail and prevent any persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use super::ingredients::decode_ingredients;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, RecipeDetail, RecipeDraft};
use serde_json::json;

/// Orchestrates validation, ordering, and transformation around the store
#[derive(Clone)]
pub struct RecipeService {
    database: Database,
}

impl RecipeService {
    /// Create a new recipe service over the given database
    #[must_use]
    pub const fn new(database: Database) -> Self {
        Self { database }
    }

    /// Validate and persist a draft, returning the stored entity unchanged
    ///
    /// The draft's `ingredients` text is deliberately not required to be
    /// valid JSON here; malformed ingredient data is tolerated at read
    /// time instead of rejected at write time.
    ///
    /// # Errors
    ///
    /// Returns a validation error with per-field detail when the draft is
    /// invalid (nothing is persisted), or a database error when storage is
    /// unavailable
    pub async fn create(&self, draft: &RecipeDraft) -> AppResult<Recipe> {
        validate_draft(draft)?;
        self.database.create_recipe(draft).await
    }

    /// List all recipes in presentation order
    ///
    /// Entities are returned raw: the listing path never decodes
    /// `ingredients`.
    ///
    /// # Errors
    ///
    /// Returns a database error when storage is unavailable
    pub async fn list(&self) -> AppResult<Vec<Recipe>> {
        self.database.list_recipes_ordered().await
    }

    /// Fetch a single recipe as a detail view
    ///
    /// `ingredients` is passed through the tolerant decoder; every other
    /// field passes through unchanged.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id, or a database error
    /// when storage is unavailable
    pub async fn get(&self, id: i64) -> AppResult<RecipeDetail> {
        let recipe = self
            .database
            .get_recipe_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;

        Ok(detail_view(recipe))
    }
}

fn validate_draft(draft: &RecipeDraft) -> AppResult<()> {
    let mut field_errors = Vec::new();

    if draft.name.trim().is_empty() {
        field_errors.push(json!({"field": "name", "message": "must not be empty"}));
    }
    if draft.views < 0 {
        field_errors.push(json!({"field": "views", "message": "must be a non-negative integer"}));
    }
    if draft.cooking_time.trim().is_empty() {
        field_errors.push(json!({"field": "cooking_time", "message": "must not be empty"}));
    }
    if draft.ingredients.trim().is_empty() {
        field_errors.push(json!({"field": "ingredients", "message": "must not be empty"}));
    }

    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation("Recipe draft failed validation")
            .with_details(json!({ "fields": field_errors })))
    }
}

fn detail_view(recipe: Recipe) -> RecipeDetail {
    RecipeDetail {
        id: recipe.id,
        name: recipe.name,
        views: recipe.views,
        cooking_time: recipe.cooking_time,
        ingredients: decode_ingredients(&recipe.ingredients),
        description: recipe.description,
    }
}
