mod handler;
pub mod model;
pub mod service;
pub mod store;

pub use handler::{add_marker, get_marker, list_markers};
pub use service::MarkerService;
pub use store::{MarkerStore, PgMarkerStore};
