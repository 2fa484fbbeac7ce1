use gallery_types::{DisplayRecord, OverlayFragment, TagChip};

/// Caption text followed by one `title:value` chip per tag.
pub fn overlay_for(record: &DisplayRecord) -> OverlayFragment {
    OverlayFragment {
        caption: record.caption_text(),
        chips: record.tags.iter().map(TagChip::from).collect(),
    }
}

pub fn compose(records: Vec<DisplayRecord>) -> Vec<DisplayRecord> {
    records
        .into_iter()
        .map(|mut record| {
            record.custom_overlay = Some(overlay_for(&record));
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_types::Tag;
    use shared::CellValue;

    fn record(caption: Option<&str>, tags: Vec<Tag>) -> DisplayRecord {
        DisplayRecord {
            src: None,
            thumbnail: None,
            is_selected: false,
            tags,
            thumbnail_caption: caption.map(CellValue::from),
            custom_overlay: None,
            row_index: 0,
            present: true,
        }
    }

    #[test]
    fn test_overlay_caption_and_chips() {
        let overlay = overlay_for(&record(
            Some("Sunset"),
            vec![
                Tag::new("place", Some(CellValue::from("Bergen"))),
                Tag::new("year", Some(CellValue::from(2020.0))),
            ],
        ));

        assert_eq!(overlay.caption, "Sunset");
        let labels: Vec<&str> = overlay.chips.iter().map(|chip| chip.label.as_str()).collect();
        assert_eq!(labels, vec!["place:Bergen", "year:2020"]);
        assert_eq!(overlay.chips[0].key, "Bergen");
    }

    #[test]
    fn test_overlay_without_caption_or_tags() {
        let overlay = overlay_for(&record(None, Vec::new()));
        assert_eq!(overlay, OverlayFragment::default());
    }

    #[test]
    fn test_compose_attaches_overlay_to_every_record() {
        let records = compose(vec![record(Some("a"), Vec::new()), record(Some("b"), Vec::new())]);
        assert!(records.iter().all(|record| record.custom_overlay.is_some()));
        assert_eq!(
            records[1].custom_overlay.as_ref().map(|o| o.caption.as_str()),
            Some("b")
        );
    }
}
