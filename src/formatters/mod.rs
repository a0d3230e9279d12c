// ABOUTME: Presentation-time formatting helpers for recipe fields
// ABOUTME: Hosts the ISO-8601 cooking-time formatter used by the HTTP response layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Presentation-time formatters
//!
//! Formatting happens when a response is rendered, never at persistence
//! time; the stored fields stay untouched.

mod duration;

pub use duration::format_duration;
