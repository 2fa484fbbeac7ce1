use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use shared::Dataset;
use std::{fs, num::NonZeroUsize, path::Path};

pub const DEFAULT_PAGE_LENGTH: usize = 25;
const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(DEFAULT_PAGE_LENGTH).unwrap();
pub const DEFAULT_MARGIN_PAGES: usize = 2;
pub const DEFAULT_PAGE_RANGE: usize = 5;

/// Settings handed to the page-navigation control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginatorOptions {
    pub previous_label: String,
    pub next_label: String,
    pub break_label: String,
    /// Pages always listed at each end.
    pub margin_pages_displayed: usize,
    /// Pages listed around the selected one.
    pub page_range_displayed: usize,
}

impl Default for PaginatorOptions {
    fn default() -> Self {
        Self {
            previous_label: "previous".to_string(),
            next_label: "next".to_string(),
            break_label: "...".to_string(),
            margin_pages_displayed: DEFAULT_MARGIN_PAGES,
            page_range_displayed: DEFAULT_PAGE_RANGE,
        }
    }
}

/// Props as the dashboard host supplies them, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryProps {
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub data: Dataset,
    /// Image and thumbnail source column.
    pub all_columns_x: Option<String>,
    /// Caption column.
    pub all_columns_y: Option<String>,
    /// Tag columns, in badge order.
    pub all_columns: Vec<String>,
    pub page_length: usize,
    pub paginator: PaginatorOptions,
}

impl Default for GalleryProps {
    fn default() -> Self {
        Self {
            height: None,
            width: None,
            data: Dataset::default(),
            all_columns_x: None,
            all_columns_y: None,
            all_columns: Vec::new(),
            page_length: DEFAULT_PAGE_LENGTH,
            paginator: PaginatorOptions::default(),
        }
    }
}

impl GalleryProps {
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(self) -> ConfigResult<GalleryConfig> {
        let page_length =
            NonZeroUsize::new(self.page_length).ok_or(ConfigError::InvalidPageLength)?;

        if self.paginator.page_range_displayed == 0 {
            return Err(ConfigError::InvalidPageRange);
        }

        Ok(GalleryConfig {
            data: self.data,
            columns: ColumnConfig {
                image: self.all_columns_x,
                caption: self.all_columns_y,
                tags: self.all_columns,
            },
            page_length,
            paginator: self.paginator,
            height: self.height,
            width: self.width,
        })
    }
}

/// Which row fields feed each part of a tile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub image: Option<String>,
    pub caption: Option<String>,
    pub tags: Vec<String>,
}

impl ColumnConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, column: impl Into<String>) -> Self {
        self.image = Some(column.into());
        self
    }

    pub fn with_caption(mut self, column: impl Into<String>) -> Self {
        self.caption = Some(column.into());
        self
    }

    pub fn with_tags<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = columns.into_iter().map(Into::into).collect();
        self
    }
}

/// Validated props. Replaced wholesale whenever the host re-supplies props.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    pub data: Dataset,
    pub columns: ColumnConfig,
    pub page_length: NonZeroUsize,
    pub paginator: PaginatorOptions,
    pub height: Option<f64>,
    pub width: Option<f64>,
}

impl GalleryConfig {
    pub fn new(data: Dataset, columns: ColumnConfig) -> Self {
        Self {
            data,
            columns,
            page_length: DEFAULT_PAGE_SIZE,
            paginator: PaginatorOptions::default(),
            height: None,
            width: None,
        }
    }

    pub fn with_page_length(mut self, page_length: NonZeroUsize) -> Self {
        self.page_length = page_length;
        self
    }

    pub fn with_paginator(mut self, paginator: PaginatorOptions) -> Self {
        self.paginator = paginator;
        self
    }
}

/// Reads and validates a props JSON file.
pub fn load_props(path: &Path) -> ConfigResult<GalleryConfig> {
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = GalleryProps::from_json_str(&json)?.validate()?;
    tracing::debug!(
        "Loaded {} rows from {} (page length {})",
        config.data.len(),
        path.display(),
        config.page_length
    );

    Ok(config)
}
