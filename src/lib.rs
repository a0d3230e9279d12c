// ABOUTME: Main library entry point for the recipe catalog service
// ABOUTME: Exposes storage, service, formatting, and HTTP route modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

#![deny(unsafe_code)]

//! # Recipe Catalog Server
//!
//! A small HTTP service for cataloguing recipes: clients list recipes in a
//! deterministic presentation order, fetch one by identifier, and submit
//! new ones. Recipes persist in SQLite through an sqlx connection pool.
//!
//! ## Behavior highlights
//!
//! - **Ordering**: listings sort by `views` descending, then by the raw
//!   `cooking_time` string ascending. The secondary key is compared
//!   lexicographically, not by parsed duration - an inherited policy kept
//!   for compatibility.
//! - **Tolerant decoding**: the stored `ingredients` text is decoded as a
//!   JSON mapping only on the detail path, and malformed text degrades to
//!   an absent mapping instead of an error.
//! - **Validation gate**: submissions are validated field by field before
//!   anything touches storage; failures report per-field detail.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use recipe_catalog_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Recipe catalog configured: {}", config.summary());
//!     Ok(())
//! }
//! ```

/// Environment-based configuration management
pub mod config;

/// Service-wide constants and defaults
pub mod constants;

/// SQLite-backed recipe storage
pub mod database;

/// Unified error taxonomy and HTTP response mapping
pub mod errors;

/// Presentation-time formatting helpers
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Core data model
pub mod models;

/// HTTP route handlers
pub mod routes;

/// Business logic between routes and storage
pub mod services;
