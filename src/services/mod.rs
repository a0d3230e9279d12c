// ABOUTME: Business logic for the recipe catalog, between the HTTP layer and the store
// ABOUTME: Hosts the recipe service orchestration and the tolerant ingredient codec
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Service layer
//!
//! The service is stateless per request; all state lives in the database.

mod ingredients;
mod recipes;

pub use ingredients::decode_ingredients;
pub use recipes::RecipeService;
