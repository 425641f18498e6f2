//! Formatting helpers shared by the HTML and terminal renderers
//!
//! These produce plain text. The HTML renderer escapes whatever it
//! interpolates; [`escape_html`] is the same escaping, exposed for callers
//! that assemble markup by hand.

use crate::consts::cli_consts::text::{DASH, NO_ACTIONS};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use maud::Escaper;
use std::fmt::{Display, Write};

/// Layouts the backend uses for naive (zone-less) UTC timestamps.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Format an optional timestamp for display.
///
/// Absent or blank input yields the placeholder dash. RFC 3339 input is
/// shown in local time, naive input is shown as-is. Input that parses as
/// neither, or a pattern chrono rejects, yields the raw input unchanged.
pub fn format_timestamp(value: Option<&str>, pattern: &str) -> String {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return DASH.to_string();
    };

    let formatted = if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        render(parsed.with_timezone(&Local).format(pattern))
    } else if let Some(naive) = parse_naive(raw) {
        render(naive.format(pattern))
    } else {
        None
    };

    formatted.unwrap_or_else(|| raw.to_string())
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Goes through `write!` so an invalid pattern surfaces as `None`
/// instead of the panic `to_string()` would raise.
fn render(formatted: impl Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", formatted).ok()?;
    Some(out)
}

/// Escape text for interpolation into HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Writing into a String cannot fail.
    let _ = Escaper::new(&mut out).write_str(text);
    out
}

/// First name, or `fallback` when the user has none.
pub fn display_name<'a>(first_name: Option<&'a str>, fallback: &'a str) -> &'a str {
    match first_name {
        Some(name) if !name.is_empty() => name,
        _ => fallback,
    }
}

/// Telegram handle as `@handle`, or the placeholder dash.
pub fn display_username(username: Option<&str>) -> String {
    match username {
        Some(handle) if !handle.is_empty() => format!("@{}", handle),
        _ => DASH.to_string(),
    }
}

/// Last action timestamp, or "No actions" for users who never did anything.
pub fn display_last_action(value: Option<&str>, pattern: &str) -> String {
    match value {
        Some(raw) if !raw.trim().is_empty() => format_timestamp(Some(raw), pattern),
        _ => NO_ACTIONS.to_string(),
    }
}
