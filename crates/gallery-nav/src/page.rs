use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Event the paginator reports on navigation, `{"selected": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageChange {
    pub selected: usize,
}

impl PageChange {
    pub fn new(selected: usize) -> Self {
        Self { selected }
    }
}

/// The gallery's only mutable state: which page is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PageState {
    pub offset: usize,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(offset: usize) -> Self {
        Self { offset }
    }

    /// Index of the first row on this page.
    pub fn start(&self, page_length: NonZeroUsize) -> usize {
        self.offset.saturating_mul(page_length.get())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Changed(PageChange),
}

impl PageEvent {
    /// The selected index replaces the offset as-is; it is not checked
    /// against the dataset.
    pub fn apply_to_state(self, _current_state: PageState) -> PageState {
        match self {
            PageEvent::Changed(change) => PageState::at(change.selected),
        }
    }
}

impl From<PageChange> for PageEvent {
    fn from(change: PageChange) -> Self {
        PageEvent::Changed(change)
    }
}

pub fn reduce(state: PageState, event: PageEvent) -> PageState {
    let next = event.apply_to_state(state);
    if next != state {
        tracing::info!("Page offset {} -> {}", state.offset, next.offset);
    }
    next
}

/// Number of pages needed for `total` rows.
pub fn page_count(total: usize, page_length: NonZeroUsize) -> usize {
    total.div_ceil(page_length.get())
}
