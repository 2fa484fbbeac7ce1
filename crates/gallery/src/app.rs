use gallery_config::load_props;
use gallery_core::GridGallery;
use gallery_nav::PageChange;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    error::AppResult,
    message::Message,
    render::{write_json, write_text},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

pub struct App {
    gallery: GridGallery,
    props_path: PathBuf,
    output: OutputMode,
}

impl App {
    pub fn load(props_path: &Path, output: OutputMode) -> AppResult<Self> {
        let config = load_props(props_path)?;
        tracing::info!(
            "Gallery ready: {} rows, {} per page",
            config.data.len(),
            config.page_length
        );

        Ok(Self {
            gallery: GridGallery::new(config),
            props_path: props_path.to_path_buf(),
            output,
        })
    }

    pub fn gallery(&self) -> &GridGallery {
        &self.gallery
    }

    /// Handles one command. Returns whether the page must be drawn again.
    pub fn update(&mut self, message: Message) -> AppResult<bool> {
        let change = match message {
            Message::Page(page) => {
                let paginator = &self.gallery.view().paginator;
                page.checked_sub(1).and_then(|index| paginator.select(index))
            }
            Message::Next => self.gallery.view().paginator.next(),
            Message::Prev => self.gallery.view().paginator.previous(),
            Message::First => self.gallery.view().paginator.first(),
            Message::Last => self.gallery.view().paginator.last(),
            Message::Reload => {
                let config = load_props(&self.props_path)?;
                tracing::info!("Props reloaded from {}", self.props_path.display());
                self.gallery.set_config(config);
                return Ok(false);
            }
            Message::Refresh => {
                self.gallery.refresh();
                return Ok(true);
            }
            Message::Quit => return Ok(false),
        };

        Ok(self.apply(change))
    }

    fn apply(&mut self, change: Option<PageChange>) -> bool {
        match change {
            Some(change) => self.gallery.handle_page_change(change),
            None => {
                tracing::debug!("No page change at offset {}", self.gallery.offset());
                false
            }
        }
    }

    pub fn draw<W: Write>(&mut self, out: &mut W) -> AppResult<()> {
        let view = self.gallery.view();
        match self.output {
            OutputMode::Text => write_text(out, view)?,
            OutputMode::Json => write_json(out, view)?,
        }
        out.flush()?;
        Ok(())
    }
}
