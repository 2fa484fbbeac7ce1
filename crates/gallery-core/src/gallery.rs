//! The paginated grid component.
//!
//! Owns the page offset and the validated props, and produces a
//! [`GalleryView`] for the external grid renderer and paginator. The view is
//! re-rendered only when the offset changes; replacing props alone keeps the
//! previous view until the next page change.

use gallery_config::GalleryConfig;
use gallery_nav::{PageChange, PageEvent, PageState, PaginatorView, page_count, reduce};
use gallery_types::DisplayRecord;
use serde::Serialize;

use crate::{cache::RenderCache, overlay::compose, window::window};

/// Everything needed to draw one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryView {
    pub images: Vec<DisplayRecord>,
    pub enable_image_selection: bool,
    pub page_count: usize,
    pub paginator: PaginatorView,
}

#[derive(Debug, Clone)]
pub struct GridGallery {
    config: GalleryConfig,
    state: PageState,
    cache: RenderCache<PageState, GalleryView>,
}

impl GridGallery {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            state: PageState::default(),
            cache: RenderCache::new(),
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn offset(&self) -> usize {
        self.state.offset
    }

    /// Host re-supplied props. Does not trigger a re-render by itself.
    pub fn set_config(&mut self, config: GalleryConfig) {
        self.config = config;
    }

    pub fn page_count(&self) -> usize {
        page_count(self.config.data.len(), self.config.page_length)
    }

    pub fn should_update(&self, next: PageState) -> bool {
        next.offset != self.state.offset
    }

    /// Applies a paginator event. Returns whether the grid needs a re-render.
    pub fn handle_page_change(&mut self, change: PageChange) -> bool {
        let next = reduce(self.state, PageEvent::from(change));
        let update = self.should_update(next);
        self.state = next;
        update
    }

    pub fn view(&mut self) -> &GalleryView {
        let Self {
            config,
            state,
            cache,
        } = self;

        cache.get_or_render(*state, || {
            let page_count = page_count(config.data.len(), config.page_length);
            GalleryView {
                images: compose(window(config, *state)),
                enable_image_selection: false,
                page_count,
                paginator: PaginatorView::new(page_count, state.offset, &config.paginator),
            }
        })
    }

    /// Drops the rendered view so the next [`GridGallery::view`] reads the
    /// current props.
    pub fn refresh(&mut self) {
        self.cache.invalidate();
    }

    pub fn render_count(&self) -> u64 {
        self.cache.misses()
    }
}
