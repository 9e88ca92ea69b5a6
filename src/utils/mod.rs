//! Utility modules.

pub mod path;
pub mod plural;

pub use path::normalize_path;
pub use plural::plural_count;
