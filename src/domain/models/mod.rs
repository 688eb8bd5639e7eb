mod change;
mod content_hash;
mod snapshot;

pub use change::*;
pub use content_hash::*;
pub use snapshot::*;
