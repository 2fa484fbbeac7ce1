use gallery_config::{ColumnConfig, GalleryConfig};
use gallery_nav::PageState;
use gallery_types::DisplayRecord;
use shared::Row;

use crate::tags::extract_tags;

/// Builds the tile for dataset index `row_index`. `row` is `None` when the
/// index is past the end of the dataset.
pub fn build_record(row_index: usize, row: Option<&Row>, columns: &ColumnConfig) -> DisplayRecord {
    let field = |column: &Option<String>| row.and_then(|row| row.field(column.as_deref())).cloned();
    let source = field(&columns.image);

    DisplayRecord {
        thumbnail: source.clone(),
        src: source,
        is_selected: false,
        tags: extract_tags(row, &columns.tags),
        thumbnail_caption: field(&columns.caption),
        custom_overlay: None,
        row_index,
        present: row.is_some(),
    }
}

/// Exactly `page_length` records for the page at `state.offset`.
///
/// The window is not clamped to the dataset: on a final partial page (or an
/// offset past the end) the trailing records are vacant.
pub fn window(config: &GalleryConfig, state: PageState) -> Vec<DisplayRecord> {
    let start = state.start(config.page_length);

    let records: Vec<DisplayRecord> = (0..config.page_length.get())
        .map(|k| {
            let index = start.saturating_add(k);
            build_record(index, config.data.get(index), &config.columns)
        })
        .collect();

    let vacant = records.iter().filter(|record| record.is_vacant()).count();
    if vacant > 0 {
        tracing::debug!(
            "Page {} has {vacant} vacant tiles past row {}",
            state.offset,
            config.data.len()
        );
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{CellValue, Dataset};
    use std::num::NonZeroUsize;

    fn config(rows: usize, page_length: usize) -> GalleryConfig {
        let data: Dataset = (0..rows)
            .map(|i| {
                Row::new()
                    .with("img", format!("{i}.png"))
                    .with("cap", format!("Image {i}"))
            })
            .collect();

        GalleryConfig::new(
            data,
            ColumnConfig::new().with_image("img").with_caption("cap"),
        )
        .with_page_length(NonZeroUsize::new(page_length).unwrap())
    }

    #[test]
    fn test_record_fields() {
        let row = Row::new().with("img", "a.png").with("cap", "A");
        let columns = ColumnConfig::new().with_image("img").with_caption("cap");
        let record = build_record(7, Some(&row), &columns);

        assert_eq!(record.src, Some(CellValue::from("a.png")));
        assert_eq!(record.thumbnail, record.src);
        assert_eq!(record.thumbnail_caption, Some(CellValue::from("A")));
        assert!(!record.is_selected);
        assert_eq!(record.row_index, 7);
        assert!(record.present);
    }

    #[test]
    fn test_unset_columns_read_absent() {
        let row = Row::new().with("img", "a.png");
        let record = build_record(0, Some(&row), &ColumnConfig::new());

        assert_eq!(record.src, None);
        assert_eq!(record.thumbnail_caption, None);
        assert!(record.present);
    }

    #[test]
    fn test_first_page() {
        let records = window(&config(12, 5), PageState::at(0));
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].source_text(), "0.png");
        assert_eq!(records[4].caption_text(), "Image 4");
    }

    #[test]
    fn test_partial_last_page_is_not_clamped() {
        let records = window(&config(12, 5), PageState::at(2));
        assert_eq!(records.len(), 5);
        assert!(records[0].present);
        assert!(records[1].present);
        assert!(records[2..].iter().all(DisplayRecord::is_vacant));
        assert_eq!(records[4].row_index, 14);
    }

    #[test]
    fn test_offset_past_end() {
        let records = window(&config(3, 4), PageState::at(50));
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(DisplayRecord::is_vacant));
        assert!(records.iter().all(|record| record.src.is_none()));
    }

    #[test]
    fn test_huge_offset_does_not_overflow() {
        let records = window(&config(3, 4), PageState::at(usize::MAX));
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(DisplayRecord::is_vacant));
    }
}
