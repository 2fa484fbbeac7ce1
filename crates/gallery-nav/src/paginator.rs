//! Page-navigation model.
//!
//! Builds the list of items the pagination control shows and turns clicks on
//! those items back into [`PageChange`] events:
//! - the first and last `margin_pages_displayed` pages are always listed
//! - `page_range_displayed` pages are listed around the selected page
//! - each run of hidden pages collapses into one break item

use gallery_config::PaginatorOptions;
use serde::{Deserialize, Serialize};

use crate::page::PageChange;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageItem {
    Page {
        index: usize,
        label: String,
        active: bool,
    },
    Break {
        label: String,
    },
}

impl PageItem {
    fn page(index: usize, selected: usize) -> Self {
        PageItem::Page {
            index,
            label: (index + 1).to_string(),
            active: index == selected,
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, PageItem::Break { .. })
    }

    pub fn label(&self) -> &str {
        match self {
            PageItem::Page { label, .. } | PageItem::Break { label } => label,
        }
    }
}

/// Previous/next button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatorView {
    pub page_count: usize,
    pub selected: usize,
    pub previous: Control,
    pub items: Vec<PageItem>,
    pub next: Control,
}

impl PaginatorView {
    pub fn new(page_count: usize, selected: usize, options: &PaginatorOptions) -> Self {
        Self {
            page_count,
            selected,
            previous: Control {
                label: options.previous_label.clone(),
                disabled: selected == 0,
            },
            items: layout(page_count, selected, options),
            next: Control {
                label: options.next_label.clone(),
                disabled: selected.saturating_add(1) >= page_count,
            },
        }
    }

    /// Click on a page item. Re-selecting the current page reports nothing.
    pub fn select(&self, index: usize) -> Option<PageChange> {
        if index == self.selected || index >= self.page_count {
            return None;
        }
        Some(PageChange::new(index))
    }

    pub fn previous(&self) -> Option<PageChange> {
        if self.previous.disabled {
            return None;
        }
        Some(PageChange::new(self.selected - 1))
    }

    pub fn next(&self) -> Option<PageChange> {
        if self.next.disabled {
            return None;
        }
        self.select(self.selected.saturating_add(1))
    }

    pub fn first(&self) -> Option<PageChange> {
        self.select(0)
    }

    pub fn last(&self) -> Option<PageChange> {
        self.select(self.page_count.checked_sub(1)?)
    }

    pub fn active_item(&self) -> Option<&PageItem> {
        self.items
            .iter()
            .find(|item| matches!(item, PageItem::Page { active: true, .. }))
    }
}

fn layout(page_count: usize, selected: usize, options: &PaginatorOptions) -> Vec<PageItem> {
    let range = options.page_range_displayed;
    let margin = options.margin_pages_displayed;

    if page_count <= range {
        return (0..page_count)
            .map(|index| PageItem::page(index, selected))
            .collect();
    }

    // The window half-width is fractional for odd ranges; the comparisons
    // below rely on that to place the window the same way the control does.
    let half = range as f64 / 2.0;
    let sel = selected as f64;
    let (left, right) = if sel > page_count as f64 - half {
        let right = page_count as f64 - sel;
        (range as f64 - right, right)
    } else if sel < half {
        (sel, range as f64 - sel)
    } else {
        (half, range as f64 - half)
    };

    let mut items: Vec<PageItem> = Vec::new();
    for index in 0..page_count {
        let page = index + 1;
        let in_margin = page <= margin || page > page_count.saturating_sub(margin);
        let in_window = index as f64 >= sel - left && index as f64 <= sel + right;

        if in_margin || in_window {
            items.push(PageItem::page(index, selected));
            continue;
        }

        if !options.break_label.is_empty() && !items.last().is_some_and(PageItem::is_break) {
            items.push(PageItem::Break {
                label: options.break_label.clone(),
            });
        }
    }

    items
}
