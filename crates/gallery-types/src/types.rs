use serde::{Deserialize, Serialize};
use shared::{CellValue, cell::display_text};

/// A `{title, value}` pair taken from one tag column of a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub title: String,
    pub value: Option<CellValue>,
}

impl Tag {
    pub fn new(title: impl Into<String>, value: Option<CellValue>) -> Self {
        Self {
            title: title.into(),
            value,
        }
    }

    pub fn value_text(&self) -> String {
        display_text(self.value.as_ref())
    }

    /// Chip text shown on the tile, `title:value`.
    pub fn label(&self) -> String {
        format!("{}:{}", self.title, self.value_text())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagChip {
    pub key: String,
    pub label: String,
}

impl From<&Tag> for TagChip {
    fn from(tag: &Tag) -> Self {
        Self {
            key: tag.value_text(),
            label: tag.label(),
        }
    }
}

/// Caption plus tag chips drawn over the bottom of a tile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlayFragment {
    pub caption: String,
    pub chips: Vec<TagChip>,
}

/// What the grid renderer needs for one tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub src: Option<CellValue>,
    pub thumbnail: Option<CellValue>,
    pub is_selected: bool,
    pub tags: Vec<Tag>,
    pub thumbnail_caption: Option<CellValue>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub custom_overlay: Option<OverlayFragment>,
    /// Dataset index this record was built from.
    pub row_index: usize,
    /// False when `row_index` is past the end of the dataset.
    pub present: bool,
}

impl DisplayRecord {
    pub fn is_vacant(&self) -> bool {
        !self.present
    }

    pub fn caption_text(&self) -> String {
        display_text(self.thumbnail_caption.as_ref())
    }

    pub fn source_text(&self) -> String {
        display_text(self.src.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_label() {
        let tag = Tag::new("country", Some(CellValue::from("NO")));
        assert_eq!(tag.label(), "country:NO");

        let missing = Tag::new("country", None);
        assert_eq!(missing.label(), "country:");
    }

    #[test]
    fn test_chip_from_tag() {
        let chip = TagChip::from(&Tag::new("year", Some(CellValue::from(1999.0))));
        assert_eq!(chip.key, "1999");
        assert_eq!(chip.label, "year:1999");
    }

    #[test]
    fn test_record_serializes_renderer_field_names() {
        let record = DisplayRecord {
            src: Some(CellValue::from("a.png")),
            thumbnail: Some(CellValue::from("a.png")),
            is_selected: false,
            tags: vec![Tag::new("t", None)],
            thumbnail_caption: Some(CellValue::from("A")),
            custom_overlay: None,
            row_index: 0,
            present: true,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["src"], "a.png");
        assert_eq!(json["thumbnail"], "a.png");
        assert_eq!(json["isSelected"], false);
        assert_eq!(json["thumbnailCaption"], "A");
        assert_eq!(json["tags"][0]["title"], "t");
        assert!(json["tags"][0]["value"].is_null());
        assert!(json.get("customOverlay").is_none());
    }
}
