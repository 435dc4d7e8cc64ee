pub mod app;
pub mod duration_codec;
mod half_type;
pub mod parse_ops;
mod route_error;
mod segment;
pub mod simplify_ops;
pub mod split_ops;
mod transition_ops;
mod transition_row;

pub use half_type::HalfType;
pub use route_error::RouteError;
pub use segment::Segment;
pub use split_ops::SplitRoute;
pub use transition_ops::TransitionCounts;
pub use transition_row::TransitionRow;
