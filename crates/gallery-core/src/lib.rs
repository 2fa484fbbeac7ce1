pub mod cache;
pub mod gallery;
pub mod overlay;
pub mod tags;
pub mod window;

pub use cache::RenderCache;
pub use gallery::{GalleryView, GridGallery};
pub use overlay::{compose, overlay_for};
pub use tags::extract_tags;
pub use window::{build_record, window};
