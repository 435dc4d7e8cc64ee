//! batch analysis of multimodal transit itineraries: simplify raw route
//! strings, split them at their temporal midpoint, and tally mode
//! transition frequencies across trips.
use clap::Parser;
use tripflow::route::app::TripApp;

fn main() {
    env_logger::init();
    let args = TripApp::parse();
    match args.op.run() {
        Ok(_) => {}
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
