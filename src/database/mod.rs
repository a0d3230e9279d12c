// ABOUTME: Database management for recipe storage over SQLite
// ABOUTME: Owns the connection pool, startup migrations, and the recipe table operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! # Database Management
//!
//! This module provides database functionality for the recipe catalog
//! service. The store is the exclusive owner of the canonical on-disk
//! representation; callers hold only transient, request-scoped copies.
//!
//! Access goes through an sqlx connection pool rather than a shared
//! long-lived session, so concurrent requests never observe each other's
//! connection state.

mod recipes;

use crate::errors::{AppError, AppResult};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite, SqlitePool};

/// Database manager for recipe storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection pool and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or schema
    /// migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let pool = Self::connect(database_url).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    async fn connect(database_url: &str) -> AppResult<SqlitePool> {
        let connect_failed =
            |e: sqlx::Error| AppError::database(format!("Failed to connect to database: {e}"));

        if database_url.contains(":memory:") {
            // An in-memory SQLite database lives and dies with its
            // connection; pin the pool to a single long-lived connection so
            // state survives across acquires.
            return SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect(database_url)
                .await
                .map_err(connect_failed);
        }

        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        SqlitePool::connect(&connection_options)
            .await
            .map_err(connect_failed)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// Migrations are idempotent and safe to run on every startup.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_recipes().await?;

        Ok(())
    }
}
