//! batch operations over trip tables, one per pipeline stage: raw routes
//! are simplified, simplified routes are split at their temporal
//! midpoint, and split halves are aggregated into transition statistics.

use super::batch_ops;
use crate::route::RouteError;
use clap::Subcommand;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TripOperation {
    /// merge consecutive same-mode legs and absorb interior walking time
    Simplify {
        /// CSV file containing one raw route string per row
        #[arg(long)]
        input: String,
        /// output CSV file; input columns are preserved and the
        /// simplified route is appended as a 'Total Trip' column
        #[arg(long)]
        output: String,
        /// name of the column holding the raw route strings
        #[arg(long, default_value_t = String::from("Optimized Route"))]
        route_column: String,
        #[arg(long, default_value_t = 1)]
        parallelism: usize,
    },
    /// divide each route at the midpoint of its total duration
    Split {
        /// CSV file containing one simplified route string per row
        #[arg(long)]
        input: String,
        /// output CSV file with 'Ascending' and 'Descending' columns
        #[arg(long)]
        output: String,
        /// name of the column holding the simplified route strings
        #[arg(long, default_value_t = String::from("Total Trip"))]
        route_column: String,
        #[arg(long, default_value_t = 1)]
        parallelism: usize,
    },
    /// tally mode-to-mode transition frequencies across route halves
    Transitions {
        /// CSV file containing ascending and descending route halves
        #[arg(long)]
        input: String,
        /// output CSV file with 'Transition', 'Count' and 'Type' columns
        #[arg(long)]
        output: String,
        /// name of the column holding first-half route strings
        #[arg(long, default_value_t = String::from("Ascending"))]
        ascending_column: String,
        /// name of the column holding second-half route strings
        #[arg(long, default_value_t = String::from("Descending"))]
        descending_column: String,
        #[arg(long, default_value_t = 1)]
        parallelism: usize,
    },
}

impl TripOperation {
    pub fn run(&self) -> Result<(), RouteError> {
        match self {
            TripOperation::Simplify {
                input,
                output,
                route_column,
                parallelism,
            } => batch_ops::simplify_file(input, output, route_column, *parallelism),
            TripOperation::Split {
                input,
                output,
                route_column,
                parallelism,
            } => batch_ops::split_file(input, output, route_column, *parallelism),
            TripOperation::Transitions {
                input,
                output,
                ascending_column,
                descending_column,
                parallelism,
            } => batch_ops::transitions_file(
                input,
                output,
                ascending_column,
                descending_column,
                *parallelism,
            ),
        }
    }
}
