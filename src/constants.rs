// ABOUTME: Service-wide constants and environment defaults
// ABOUTME: Single home for default port, database location, and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Service-wide constants

/// Default values applied when environment variables are unset
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8000;

    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./recipes.db";

    /// Default request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Service identity used in logs and health responses
pub mod service_names {
    /// Canonical service name
    pub const RECIPE_CATALOG_SERVER: &str = "recipe-catalog-server";
}

/// Environment variable names read at startup
pub mod env_vars {
    /// HTTP port override
    pub const HTTP_PORT: &str = "HTTP_PORT";

    /// Database URL override
    pub const DATABASE_URL: &str = "DATABASE_URL";

    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";

    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
}
