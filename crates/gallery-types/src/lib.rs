pub mod types;

pub use types::{DisplayRecord, OverlayFragment, Tag, TagChip};
