// ABOUTME: Recipe table operations - schema migration, insert, ordered listing, fetch by id
// ABOUTME: Implements the listing order policy in SQL, including the lexicographic tie-break
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, RecipeDraft};
use sqlx::{sqlite::SqliteRow, Row};

impl Database {
    /// Create the recipes table and listing index
    pub(super) async fn migrate_recipes(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                views INTEGER NOT NULL,
                cooking_time TEXT NOT NULL,
                ingredients TEXT NOT NULL,
                description TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipes table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_recipes_listing ON recipes(views DESC, cooking_time ASC)",
        )
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to create listing index: {e}")))?;

        Ok(())
    }

    /// Persist a new recipe and return the stored entity with its assigned id
    ///
    /// Id assignment is delegated to SQLite `AUTOINCREMENT`, so concurrent
    /// inserts never collide.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create_recipe(&self, draft: &RecipeDraft) -> AppResult<Recipe> {
        let result = sqlx::query(
            r"
            INSERT INTO recipes (name, views, cooking_time, ingredients, description)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&draft.name)
        .bind(draft.views)
        .bind(&draft.cooking_time)
        .bind(&draft.ingredients)
        .bind(&draft.description)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to insert recipe: {e}")))?;

        Ok(Recipe {
            id: result.last_insert_rowid(),
            name: draft.name.clone(),
            views: draft.views,
            cooking_time: draft.cooking_time.clone(),
            ingredients: draft.ingredients.clone(),
            description: draft.description.clone(),
        })
    }

    /// Fetch a single recipe by id
    ///
    /// Absence is a normal outcome and yields `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_recipe_by_id(&self, id: i64) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(
            r"
            SELECT id, name, views, cooking_time, ingredients, description
            FROM recipes
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get recipe {id}: {e}")))?;

        Ok(row.as_ref().map(row_to_recipe))
    }

    /// List all recipes in presentation order
    ///
    /// Primary key: `views` descending. Secondary key: `cooking_time`
    /// ascending under SQLite BINARY collation, i.e. lexicographic on the
    /// raw duration string rather than on parsed magnitude (`"PT2H"` sorts
    /// before `"PT9M"`). The trailing `id` key pins ties to insertion
    /// order so repeated calls over unchanged data return the same
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list_recipes_ordered(&self) -> AppResult<Vec<Recipe>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, views, cooking_time, ingredients, description
            FROM recipes
            ORDER BY views DESC, cooking_time ASC, id ASC
            ",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list recipes: {e}")))?;

        Ok(rows.iter().map(row_to_recipe).collect())
    }
}

fn row_to_recipe(row: &SqliteRow) -> Recipe {
    Recipe {
        id: row.get("id"),
        name: row.get("name"),
        views: row.get("views"),
        cooking_time: row.get("cooking_time"),
        ingredients: row.get("ingredients"),
        description: row.get("description"),
    }
}
