// ABOUTME: Human-readable rendering of ISO-8601 cooking-time durations
// ABOUTME: Falls back to the raw input on any parse failure so malformed data never breaks a page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use iso8601_duration::Duration as IsoDuration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3600;

/// Render an ISO-8601 duration string for display
///
/// Durations under an hour render as `"<minutes> minutes"`, longer ones as
/// `"<hours>h <minutes>m"`. Anything that does not parse is returned
/// unchanged; historically malformed `cooking_time` values must not break
/// listing or detail pages.
///
/// Calendar-relative durations (years or months) have no fixed length in
/// seconds and take the same fallback path.
#[must_use]
pub fn format_duration(iso_duration: &str) -> String {
    let Ok(parsed) = IsoDuration::parse(iso_duration) else {
        return iso_duration.to_owned();
    };
    let Some(duration) = parsed.to_std() else {
        return iso_duration.to_owned();
    };

    let total_seconds = duration.as_secs();
    if total_seconds < SECS_PER_HOUR {
        format!("{} minutes", total_seconds / SECS_PER_MINUTE)
    } else {
        let hours = total_seconds / SECS_PER_HOUR;
        let minutes = (total_seconds % SECS_PER_HOUR) / SECS_PER_MINUTE;
        format!("{hours}h {minutes}m")
    }
}
