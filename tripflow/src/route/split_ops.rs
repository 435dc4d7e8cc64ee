//! midpoint splitting: divides a route into an ascending (first-half) and
//! descending (second-half) portion at 50% of its total duration, cutting
//! a straddling leg proportionally.

use super::duration_codec;
use super::parse_ops::{ARROW, ARROW_SEPARATOR};
use itertools::Itertools;
use regex::Regex;
use std::sync::LazyLock;

/// sentinel emitted when the descending half contains no legs.
pub const EMPTY_HALF: &str = "N/A";

/// tolerance for detecting that accumulated time landed exactly on the
/// midpoint despite floating-point drift.
pub const MIDPOINT_EPSILON: f64 = 1e-9;

static DURATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("invalid leg duration regex"));

/// the two portions of a route divided at its temporal midpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRoute {
    pub ascending: String,
    pub descending: String,
}

/// splits a route string at the midpoint of its total duration.
///
/// legs are assigned whole to the ascending half until the midpoint is
/// reached; a leg straddling the midpoint is divided into two legs of the
/// same mode, with the exact fractional remainder carried by each side. a
/// zero-length descending remainder is dropped rather than emitted. legs
/// without parseable duration text count as zero minutes but keep their
/// text.
///
/// durations on both sides always sum to the original total within
/// floating-point tolerance.
pub fn split_route(route: &str) -> SplitRoute {
    let legs = route
        .split(ARROW)
        .map(str::trim)
        .filter(|leg| !leg.is_empty())
        .map(|leg| {
            let minutes = DURATION_PATTERN
                .captures(leg)
                .map(|caps| duration_codec::fractional::parse(&caps[1]))
                .unwrap_or(0.0);
            (leg, minutes)
        })
        .collect_vec();

    let total: f64 = legs.iter().map(|(_, minutes)| minutes).sum();
    let half = total / 2.0;

    let mut ascending: Vec<String> = Vec::new();
    let mut descending: Vec<String> = Vec::new();
    let mut elapsed = 0.0;
    let mut half_reached = false;

    for (leg, minutes) in legs {
        if half_reached {
            descending.push(String::from(leg));
            continue;
        }

        if elapsed + minutes < half {
            ascending.push(String::from(leg));
            elapsed += minutes;
        } else if (elapsed + minutes - half).abs() < MIDPOINT_EPSILON {
            // leg ends exactly on the midpoint
            ascending.push(String::from(leg));
            elapsed += minutes;
            half_reached = true;
        } else {
            // leg straddles the midpoint
            let remain = half - elapsed;
            if remain < 0.0 {
                // accumulated drift already carried us past the midpoint
                descending.push(String::from(leg));
            } else {
                let descending_part = minutes - remain;
                let mode = leg.split('(').next().unwrap_or(leg).trim();
                ascending.push(format_leg(mode, remain));
                if descending_part > 0.0 {
                    descending.push(format_leg(mode, descending_part));
                }
            }
            half_reached = true;
        }
    }

    let descending = if descending.is_empty() {
        String::from(EMPTY_HALF)
    } else {
        descending.join(ARROW_SEPARATOR)
    };

    SplitRoute {
        ascending: ascending.join(ARROW_SEPARATOR),
        descending,
    }
}

fn format_leg(mode: &str, minutes: f64) -> String {
    format!("{}({})", mode, duration_codec::fractional::format(minutes))
}
