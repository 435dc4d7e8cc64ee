//! aggregation of mode-to-mode transition frequencies across many route
//! halves. per-route observation is pure and per-key increments are
//! associative, so partial tables built on independent workers can be
//! merged in any order.

use super::half_type::HalfType;
use super::parse_ops::{self, ARROW};
use super::transition_row::TransitionRow;
use itertools::Itertools;
use std::collections::HashMap;

/// frequency table of mode-to-mode transitions, keyed by the
/// "from -> to" transition string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionCounts {
    counts: HashMap<String, u64>,
}

impl TransitionCounts {
    pub fn new() -> TransitionCounts {
        TransitionCounts::default()
    }

    /// records every adjacent mode pair in the given route half. a route
    /// with fewer than two parseable modes contributes nothing, as does
    /// the empty-half sentinel.
    pub fn observe_route(&mut self, route: &str) {
        let modes = parse_ops::route_modes(route);
        for (from, to) in modes.iter().tuple_windows() {
            let transition = format!("{from} {ARROW} {to}");
            *self.counts.entry(transition).or_insert(0) += 1;
        }
    }

    /// combines two partial tables by summing counts per key.
    pub fn merge(mut self, other: TransitionCounts) -> TransitionCounts {
        for (transition, count) in other.counts {
            *self.counts.entry(transition).or_insert(0) += count;
        }
        self
    }

    /// the count recorded for a transition, or zero if never observed.
    pub fn get(&self, transition: &str) -> u64 {
        self.counts.get(transition).copied().unwrap_or(0)
    }

    /// sum of all recorded counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// number of distinct transitions observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// flattens the table into output rows tagged with the given half
    /// type, most frequent transitions first. equal counts order by
    /// transition name so output is deterministic.
    pub fn into_rows(self, half_type: HalfType) -> Vec<TransitionRow> {
        self.counts
            .into_iter()
            .sorted_by(|(t_a, c_a), (t_b, c_b)| c_b.cmp(c_a).then_with(|| t_a.cmp(t_b)))
            .map(|(transition, count)| TransitionRow {
                transition,
                count,
                half_type,
            })
            .collect_vec()
    }
}
