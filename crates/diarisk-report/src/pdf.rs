//! PDF rendering of the report content via `printpdf`.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::content::ReportContent;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const WRAP_CHARS: usize = 90;

/// Renders the report as A4 PDF bytes.
pub fn render_pdf(content: &ReportContent) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        &content.title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| anyhow!("add font: {err}"))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|err| anyhow!("add font: {err}"))?;

    let mut y = Mm(PAGE_HEIGHT_MM - 17.0);
    layer.use_text(&content.title, 14.0, Mm(MARGIN_MM), y, &bold);
    y -= Mm(8.0);
    layer.use_text(
        format!("Date: {}", content.date.format("%Y-%m-%d")),
        10.0,
        Mm(MARGIN_MM),
        y,
        &font,
    );
    y -= Mm(8.0);
    layer.use_text(
        format!("Prediction: {}", content.result),
        11.0,
        Mm(MARGIN_MM),
        y,
        &font,
    );
    y -= Mm(6.0);
    layer.use_text(
        format!("Risk Probability: {:.1}%", content.probability_pct),
        11.0,
        Mm(MARGIN_MM),
        y,
        &font,
    );
    if let Some(confidence) = content.confidence {
        y -= Mm(6.0);
        layer.use_text(
            format!("Confidence: {confidence}"),
            11.0,
            Mm(MARGIN_MM),
            y,
            &font,
        );
    }

    y -= Mm(10.0);
    layer.use_text("RECOMMENDED DIET:", 11.0, Mm(MARGIN_MM), y, &bold);
    y -= Mm(6.0);
    for (number, item) in content.diet_rows() {
        draw_table_row(&layer, &font, number, item, &mut y);
    }

    y -= Mm(8.0);
    for line in wrap_text(&content.disclaimer, WRAP_CHARS) {
        layer.use_text(&line, 8.0, Mm(MARGIN_MM), y, &font);
        y -= Mm(3.5);
    }

    let mut buffer = BufWriter::new(Vec::new());
    doc.save(&mut buffer).map_err(|err| anyhow!("save pdf: {err}"))?;
    buffer
        .into_inner()
        .map_err(|err| anyhow!("flush pdf buffer: {err}"))
}

fn draw_table_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    number: usize,
    item: &str,
    y: &mut Mm,
) {
    layer.use_text(format!("{number}."), 9.0, Mm(MARGIN_MM + 5.0), *y, font);
    layer.use_text(item, 9.0, Mm(MARGIN_MM + 13.0), *y, font);
    *y -= Mm(5.0);
}

/// Renders and writes the report to `path`, creating parent directories.
pub fn write_pdf(content: &ReportContent, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create report dir {}", parent.display()))?;
        }
    }
    let bytes = render_pdf(content)?;
    std::fs::write(path, bytes).with_context(|| format!("write report {}", path.display()))?;
    Ok(path.to_path_buf())
}

/// Word wrap for the disclaimer block.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + word.len() + 1 > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_max_width() {
        let text = "one two three four five six seven eight nine ten";
        let lines = wrap_text(text, 12);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= 12, "{line:?}");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap_text("short text", 80), vec!["short text".to_string()]);
        assert!(wrap_text("", 80).is_empty());
    }
}
