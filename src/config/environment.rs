// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into a typed ServerConfig with validated defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Environment-based configuration management

use crate::constants::{defaults, env_vars};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// SQLite database backed by a file
    SqliteFile(PathBuf),
    /// In-memory SQLite database (tests, throwaway runs)
    Memory,
}

impl DatabaseUrl {
    /// Parse a database URL string
    ///
    /// # Errors
    ///
    /// Returns an error for URL schemes other than sqlite
    pub fn parse_url(url: &str) -> Result<Self> {
        if url == "sqlite::memory:" || url.ends_with(":memory:") {
            return Ok(Self::Memory);
        }

        url.strip_prefix("sqlite:").map_or_else(
            || Err(anyhow!("Unsupported database URL '{url}': only sqlite URLs are supported")),
            |path| Ok(Self::SqliteFile(PathBuf::from(path))),
        )
    }

    /// Render as an sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SqliteFile(path) => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Database configuration
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults; set-but-malformed variables
    /// are configuration errors, not silently ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is not a valid port number or
    /// `DATABASE_URL` is not a supported sqlite URL
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var(env_vars::HTTP_PORT) {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid {}: '{raw}'", env_vars::HTTP_PORT))?,
            Err(_) => defaults::HTTP_PORT,
        };

        let database_url = env::var(env_vars::DATABASE_URL)
            .unwrap_or_else(|_| defaults::DATABASE_URL.to_owned());

        Ok(Self {
            http_port,
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&database_url)?,
            },
        })
    }

    /// One-line startup summary for the logs
    #[must_use]
    pub fn summary(&self) -> String {
        let backend = if self.database.url.is_memory() {
            "sqlite (in-memory)".to_owned()
        } else {
            format!("sqlite ({})", self.database.url.to_connection_string())
        };

        format!("http_port={}, database={backend}", self.http_port)
    }
}
