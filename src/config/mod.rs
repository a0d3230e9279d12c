// ABOUTME: Configuration module for the recipe catalog service
// ABOUTME: Environment-only configuration, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Configuration management

/// Environment-based server configuration
pub mod environment;
