use gallery_core::GalleryView;
use gallery_nav::{PageItem, PaginatorView};
use std::io::{self, Write};

pub fn write_text<W: Write>(out: &mut W, view: &GalleryView) -> io::Result<()> {
    writeln!(
        out,
        "Page {} of {}",
        view.paginator.selected.saturating_add(1),
        view.page_count
    )?;

    for record in &view.images {
        if record.is_vacant() {
            writeln!(out, "  [{:>4}] (empty)", record.row_index)?;
            continue;
        }

        let (caption, chips) = match &record.custom_overlay {
            Some(overlay) => (
                overlay.caption.clone(),
                overlay
                    .chips
                    .iter()
                    .map(|chip| chip.label.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            None => (record.caption_text(), String::new()),
        };

        writeln!(
            out,
            "  [{:>4}] {} | {} | {}",
            record.row_index,
            record.source_text(),
            caption,
            chips
        )?;
    }

    writeln!(out, "{}", paginator_line(&view.paginator))
}

pub fn write_json<W: Write>(out: &mut W, view: &GalleryView) -> serde_json::Result<()> {
    serde_json::to_writer(&mut *out, view)?;
    writeln!(out).map_err(serde_json::Error::io)
}

fn paginator_line(paginator: &PaginatorView) -> String {
    let control = |label: &str, disabled: bool| {
        if disabled {
            format!("({label})")
        } else {
            format!("<{label}>")
        }
    };

    let mut parts = vec![control(&paginator.previous.label, paginator.previous.disabled)];
    parts.extend(paginator.items.iter().map(|item| match item {
        PageItem::Page {
            label,
            active: true,
            ..
        } => format!("[{label}]"),
        other => other.label().to_string(),
    }));
    parts.push(control(&paginator.next.label, paginator.next.disabled));

    parts.join(" ")
}
