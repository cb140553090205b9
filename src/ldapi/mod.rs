pub mod capabilities;
pub mod negotiation;

pub use capabilities::{Capabilities, CapabilityTable, ViewSpec};
pub use negotiation::{resolve, resolve_mimetype, resolve_view};
