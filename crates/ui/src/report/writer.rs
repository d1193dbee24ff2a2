use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};
use study_core::text::transliterate_ascii;

use super::{ReportContext, ReportError};

const MARGIN: f32 = 15.0;
const PT_TO_MM: f32 = 0.3528;
/// Average Helvetica glyph width as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.5;

#[derive(Clone, Copy, Debug)]
pub(super) enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    fn size(self) -> (f32, f32) {
        match self {
            Orientation::Portrait => (210.0, 297.0),
            Orientation::Landscape => (297.0, 210.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Weight {
    Regular,
    Bold,
}

/// Top-down text cursor over a growing A4 document.
pub(super) struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    width: f32,
    height: f32,
    cursor: f32,
}

impl PageWriter {
    /// Open a document and draw the shared report header.
    pub(super) fn open(
        ctx: &ReportContext<'_>,
        heading: &str,
        orientation: Orientation,
    ) -> Result<Self, ReportError> {
        let (width, height) = orientation.size();
        let doc_title = transliterate_ascii(&format!("{} - {heading}", ctx.title));
        let (doc, page, layer) = PdfDocument::new(doc_title, Mm(width), Mm(height), "Layer 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let layer = doc.get_page(page).get_layer(layer);

        let mut writer = Self {
            doc,
            layer,
            regular,
            bold,
            width,
            height,
            cursor: height - MARGIN,
        };
        writer.line(ctx.title, 18.0, Weight::Bold);
        writer.line(heading, 13.0, Weight::Bold);
        writer.line(&ctx.subtitle(), 9.0, Weight::Regular);
        writer.gap(2.0);
        writer.rule();
        writer.gap(3.0);
        Ok(writer)
    }

    pub(super) fn left(&self) -> f32 {
        MARGIN
    }

    pub(super) fn inner_width(&self) -> f32 {
        self.width - 2.0 * MARGIN
    }

    /// Break to a fresh page unless `needed` millimetres remain.
    pub(super) fn ensure_space(&mut self, needed: f32) {
        if self.cursor - needed >= MARGIN {
            return;
        }
        let (page, layer) = self.doc.add_page(Mm(self.width), Mm(self.height), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor = self.height - MARGIN;
    }

    pub(super) fn gap(&mut self, mm: f32) {
        self.cursor -= mm;
    }

    pub(super) fn line(&mut self, text: &str, size: f32, weight: Weight) {
        self.row(&[(0.0, text.to_owned())], size, weight);
    }

    /// One line of text split into columns at the given offsets from the
    /// left margin.
    pub(super) fn row(&mut self, cells: &[(f32, String)], size: f32, weight: Weight) {
        let advance = line_height(size);
        self.ensure_space(advance);
        self.cursor -= advance;
        let font = match weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
        };
        for (offset, text) in cells {
            let text = transliterate_ascii(text);
            if text.is_empty() {
                continue;
            }
            self.layer
                .use_text(text, size, Mm(MARGIN + offset), Mm(self.cursor), font);
        }
    }

    /// Horizontal hairline across the printable width.
    pub(super) fn rule(&mut self) {
        self.ensure_space(2.0);
        self.cursor -= 1.5;
        let y = self.cursor;
        self.polyline(&[(MARGIN, y), (self.width - MARGIN, y)], GRAY, 0.3);
        self.cursor -= 0.5;
    }

    /// Claim a block of `height` millimetres and return its top edge.
    pub(super) fn reserve(&mut self, height: f32) -> f32 {
        self.ensure_space(height);
        let top = self.cursor;
        self.cursor -= height;
        top
    }

    pub(super) fn polyline(&self, points: &[(f32, f32)], color: (f32, f32, f32), thickness: f32) {
        if points.len() < 2 {
            return;
        }
        let (r, g, b) = color;
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(r, g, b, None)));
        self.layer.set_outline_thickness(thickness);
        self.layer.add_line(Line {
            points: points
                .iter()
                .map(|&(x, y)| (Point::new(Mm(x), Mm(y)), false))
                .collect(),
            is_closed: false,
        });
    }

    /// Draw text at an absolute position without moving the cursor.
    pub(super) fn label(&self, x: f32, y: f32, text: &str, size: f32) {
        self.layer
            .use_text(transliterate_ascii(text), size, Mm(x), Mm(y), &self.regular);
    }

    pub(super) fn finish(self) -> Result<Vec<u8>, ReportError> {
        Ok(self.doc.save_to_bytes()?)
    }
}

pub(super) const GRAY: (f32, f32, f32) = (0.6, 0.6, 0.6);
pub(super) const BLUE: (f32, f32, f32) = (0.15, 0.39, 0.92);

fn line_height(size: f32) -> f32 {
    size * PT_TO_MM * 1.4
}

/// Shorten `text` so it fits `width` millimetres at `size` points.
pub(super) fn clip(text: &str, width: f32, size: f32) -> String {
    let ascii = transliterate_ascii(text.trim());
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let max = (width / (size * PT_TO_MM * GLYPH_WIDTH)).floor().max(3.0) as usize;
    if ascii.chars().count() <= max {
        return ascii;
    }
    let mut out: String = ascii.chars().take(max.saturating_sub(2)).collect();
    out.push_str("..");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_keeps_short_text_and_marks_cuts() {
        assert_eq!(clip(" Fizik ", 40.0, 8.0), "Fizik");
        let cut = clip("Trigonometric identities and equations", 20.0, 8.0);
        assert!(cut.ends_with(".."));
        assert!(cut.len() < 20);
        assert_eq!(clip("Türkçe", 40.0, 8.0), "Turkce");
    }
}
