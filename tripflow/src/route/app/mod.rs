pub mod batch_ops;
mod operation;
mod trip_app;

pub use operation::TripOperation;
pub use trip_app::TripApp;
