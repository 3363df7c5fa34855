mod persistence;
mod session;

pub use persistence::{load_scene, save_scene};
pub(crate) use persistence::write_atomic;
pub use session::{DEFAULT_SEGMENT_LIMIT, EditingSession};
