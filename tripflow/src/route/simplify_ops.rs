//! route simplification: merges consecutive legs of the same transit mode
//! and absorbs interior walking time into the active mode, keeping only
//! the first and last walking legs of a trip.

use super::duration_codec;
use super::parse_ops::{self, ARROW_SEPARATOR};

/// mode token for walking legs, which follow special boundary rules
/// during simplification.
pub const WALKING_MODE: &str = "walking";

/// simplifies a route string in a single left-to-right pass:
///
/// - a walking leg at the first or last position is emitted verbatim,
///   after flushing any mode currently accumulating
/// - an interior walking leg is never emitted on its own; its duration is
///   added to the accumulating mode. when no mode is accumulating, the
///   walking time is dropped, matching the historical pipeline output
/// - consecutive legs of the same non-walking mode merge into one leg
///   whose duration is their whole-minute sum
///
/// the result is idempotent: simplifying an already-simplified route
/// returns it unchanged.
pub fn simplify_route(route: &str) -> String {
    let segments = parse_ops::parse_route(route);
    let mut output: Vec<String> = Vec::new();
    // the transit mode currently accumulating, with its running total
    let mut active: Option<(String, i64)> = None;

    for (i, segment) in segments.iter().enumerate() {
        if segment.mode == WALKING_MODE {
            if i == 0 || i == segments.len() - 1 {
                if let Some((mode, total)) = active.take() {
                    output.push(format_leg(&mode, total));
                }
                output.push(segment.to_string());
            } else if let Some((_, total)) = active.as_mut() {
                *total += segment.duration_minutes;
            }
            continue;
        }

        match active.as_mut() {
            Some((mode, total)) if *mode == segment.mode => {
                *total += segment.duration_minutes;
            }
            _ => {
                if let Some((mode, total)) = active.take() {
                    output.push(format_leg(&mode, total));
                }
                active = Some((segment.mode.clone(), segment.duration_minutes));
            }
        }
    }

    if let Some((mode, total)) = active {
        output.push(format_leg(&mode, total));
    }

    output.join(ARROW_SEPARATOR)
}

fn format_leg(mode: &str, minutes: i64) -> String {
    format!("{}({})", mode, duration_codec::whole::format(minutes))
}
