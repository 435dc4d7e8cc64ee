use super::TripOperation;
use clap::Parser;

/// command line tool for batch simplification, midpoint splitting, and
/// transition counting of multimodal transit itineraries
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TripApp {
    #[command(subcommand)]
    pub op: TripOperation,
}
