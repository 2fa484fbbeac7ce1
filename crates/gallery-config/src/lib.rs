pub mod config;
pub mod error;

pub use config::{
    ColumnConfig, DEFAULT_PAGE_LENGTH, GalleryConfig, GalleryProps, PaginatorOptions, load_props,
};
pub use error::{ConfigError, ConfigResult};
