// ABOUTME: Shared test fixtures for integration tests
// ABOUTME: Provides an in-memory database and canonical recipe drafts

#![allow(dead_code)]

use recipe_catalog_server::database::Database;
use recipe_catalog_server::models::RecipeDraft;

/// Create a fresh in-memory database with the recipe schema applied
pub async fn create_test_database() -> Database {
    Database::new("sqlite::memory:")
        .await
        .expect("Failed to create in-memory test database")
}

/// The canonical valid draft used across tests
pub fn summer_salad() -> RecipeDraft {
    RecipeDraft {
        name: "Summer Salad".to_owned(),
        views: 265,
        cooking_time: "PT15M".to_owned(),
        ingredients:
            r#"{"Pear": 3, "Banana": 2, "Mango": 2, "Spinach": 1, "Walnuts": 0.5}"#.to_owned(),
        description:
            "A refreshing fruit salad with seasonal produce, tossed with baby spinach and toasted walnuts.".to_owned(),
    }
}

/// Build a draft with the fields that matter for ordering tests
pub fn draft(name: &str, views: i64, cooking_time: &str) -> RecipeDraft {
    RecipeDraft {
        name: name.to_owned(),
        views,
        cooking_time: cooking_time.to_owned(),
        ingredients: r#"{"Salt": "a pinch"}"#.to_owned(),
        description: format!("Test recipe {name}"),
    }
}
