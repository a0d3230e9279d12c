// ABOUTME: Core data model for the recipe catalog
// ABOUTME: Defines the persisted Recipe entity, the client-submitted draft, and the detail view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Core data structures for recipe storage and presentation

use serde::{Deserialize, Serialize};

/// A recipe persisted in the catalog
///
/// `ingredients` is opaque text that is itself JSON: a serialized mapping
/// from ingredient name to quantity. It is stored and listed verbatim and
/// decoded only when a single recipe is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier, assigned by the store on creation
    pub id: i64,
    /// Display name
    pub name: String,
    /// View counter, primary sort key for listings
    pub views: i64,
    /// ISO-8601 duration text (e.g. `"PT15M"`), secondary sort key
    pub cooking_time: String,
    /// JSON-encoded ingredient mapping, stored as opaque text
    pub ingredients: String,
    /// Free-text description
    pub description: String,
}

/// A client-submitted candidate recipe, not yet persisted
///
/// Deserialized directly from the create-request body, so missing or
/// mistyped fields are rejected before they reach the service layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDraft {
    /// Display name
    pub name: String,
    /// View counter
    pub views: i64,
    /// ISO-8601 duration text
    pub cooking_time: String,
    /// JSON-encoded ingredient mapping
    pub ingredients: String,
    /// Free-text description
    pub description: String,
}

/// The per-recipe representation returned by a detail fetch
///
/// Identical to [`Recipe`] except that `ingredients` has been passed
/// through the tolerant decoder: a mapping when the stored text parses as
/// a JSON object, `None` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    /// Unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// View counter
    pub views: i64,
    /// ISO-8601 duration text
    pub cooking_time: String,
    /// Decoded ingredient mapping, `None` when the stored text is not a JSON object
    pub ingredients: Option<serde_json::Map<String, serde_json::Value>>,
    /// Free-text description
    pub description: String,
}
