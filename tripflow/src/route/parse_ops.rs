//! tokenization and serialization of arrow-delimited route strings in the
//! format `mode1(duration1) -> mode2(duration2) -> ...`.

use super::duration_codec;
use super::segment::Segment;
use itertools::Itertools;
use regex::Regex;
use std::sync::LazyLock;

/// delimiter joining the legs of a route string. whitespace-tolerant on
/// both sides when parsing.
pub const ARROW: &str = "->";

/// separator used when serializing legs back into route-string form.
pub const ARROW_SEPARATOR: &str = " -> ";

static SEGMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\((.+)\)").expect("invalid route segment regex"));

static MODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\(\d+[^)]*\)").expect("invalid route mode regex"));

/// tokenizes a route string into its ordered legs. tokens that do not
/// match the `mode(duration)` shape are logged and skipped so that one
/// dirty leg does not abort the whole row.
pub fn parse_route(route: &str) -> Vec<Segment> {
    route
        .split(ARROW)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match SEGMENT_PATTERN.captures(token) {
            None => {
                log::warn!("could not parse route segment: {token}");
                None
            }
            Some(caps) => {
                let duration_text = String::from(&caps[2]);
                let duration_minutes = duration_codec::whole::parse(&duration_text);
                Some(Segment {
                    mode: String::from(&caps[1]),
                    duration_text,
                    duration_minutes,
                })
            }
        })
        .collect_vec()
}

/// extracts only the ordered mode tokens of a route, ignoring durations.
/// legs without a parseable `mode(duration)` shape are skipped.
pub fn route_modes(route: &str) -> Vec<String> {
    MODE_PATTERN
        .captures_iter(route)
        .map(|caps| String::from(&caps[1]))
        .collect_vec()
}
