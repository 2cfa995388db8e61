// Contact history: the append-only log of every delivery attempt. The dedup
// core consumes the narrow read trait; only the delivery step writes.

pub mod handlers;
pub mod store;

pub use store::{ContactHistory, PgContactHistory};
