//! printpdf backend for the report [`Canvas`].

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rect,
};

use crate::report::error::ReportError;
use crate::report::layout::{
    Canvas, FontWeight, Paint, Rgb, TextStyle, PAGE_HEIGHT, PAGE_WIDTH,
};

/// A4 document backed by the built-in Helvetica faces.
pub struct PdfCanvas {
    doc: PdfDocumentReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// Layer of the current page. printpdf creates page one up front, so the
    /// first `begin_page` claims it instead of adding a page.
    layer: PdfLayerReference,
    pages: usize,
}

impl PdfCanvas {
    pub fn new(title: &str) -> Result<Self, ReportError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Page 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|err| ReportError::Render(err.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|err| ReportError::Render(err.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            regular,
            bold,
            layer,
            pages: 0,
        })
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn into_bytes(self) -> Result<Vec<u8>, ReportError> {
        self.doc
            .save_to_bytes()
            .map_err(|err| ReportError::Render(err.to_string()))
    }

    fn ensure_started(&mut self) {
        if self.pages == 0 {
            self.pages = 1;
        }
    }
}

impl Canvas for PdfCanvas {
    fn begin_page(&mut self) {
        self.pages += 1;
        if self.pages == 1 {
            return;
        }
        let label = format!("Page {}", self.pages);
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), label);
        self.layer = self.doc.get_page(page).get_layer(layer);
    }

    fn text(&mut self, x: f32, y: f32, text: &str, style: TextStyle) {
        let safe = encodable_text(text);
        if safe.is_empty() {
            return;
        }
        self.ensure_started();
        let font = match style.weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        };
        self.layer.set_fill_color(color(style.color));
        self.layer
            .use_text(safe, style.size, Mm(x), Mm(PAGE_HEIGHT - y), font);
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: Paint) {
        self.ensure_started();
        let mode = match paint {
            Paint::Fill(fill) => {
                self.layer.set_fill_color(color(fill));
                PaintMode::Fill
            }
            Paint::Stroke(stroke) => {
                self.layer.set_outline_color(color(stroke));
                self.layer.set_outline_thickness(0.6);
                PaintMode::Stroke
            }
            Paint::FillStroke { fill, stroke } => {
                self.layer.set_fill_color(color(fill));
                self.layer.set_outline_color(color(stroke));
                self.layer.set_outline_thickness(0.8);
                PaintMode::FillStroke
            }
        };
        let shape = Rect::new(
            Mm(x),
            Mm(PAGE_HEIGHT - y - height),
            Mm(x + width),
            Mm(PAGE_HEIGHT - y),
        )
        .with_mode(mode);
        self.layer.add_rect(shape);
    }
}

fn color(rgb: Rgb) -> Color {
    let Rgb(r, g, b) = rgb;
    Color::Rgb(printpdf::Rgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        None,
    ))
}

/// Reduces `text` to what the built-in Type1 fonts can show. Typographic
/// punctuation maps to ASCII look-alikes; anything else outside printable
/// ASCII becomes `?`.
pub fn encodable_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            ' '..='~' => out.push(ch),
            '\u{2013}' | '\u{2014}' | '\u{2212}' => out.push('-'),
            '\u{2018}' | '\u{2019}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{2033}' => out.push('"'),
            '\u{2022}' | '\u{25CF}' | '\u{00B7}' => out.push('*'),
            '\u{2026}' => out.push_str("..."),
            '\u{00A0}' | '\t' => out.push(' '),
            c if c.is_control() => {}
            _ => out.push('?'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::{Emotion, EmotionData};
    use crate::report::layout::{render_report, ReportContent, TITLE};
    use crate::report::stats::EmotionStats;

    #[test]
    fn typographic_punctuation_is_flattened() {
        assert_eq!(encodable_text(TITLE), "MindFuse - Clinical Emotion Report");
        assert_eq!(encodable_text("“calm” • steady…"), "\"calm\" * steady...");
        assert_eq!(encodable_text("ok\u{0007}😊"), "ok?");
    }

    #[test]
    fn renders_a_pdf_document() {
        let obs: Vec<EmotionData> = [Emotion::Happy, Emotion::Neutral, Emotion::Happy]
            .into_iter()
            .map(|e| EmotionData::new(e, 1.0, 0))
            .collect();
        let stats = EmotionStats::from_observations(&obs);

        let mut canvas = PdfCanvas::new(TITLE).unwrap();
        let summary = render_report(
            &mut canvas,
            &ReportContent {
                stats: &stats,
                narrative: "Clinician Insights\n- Mostly positive affect.\n",
                generated_at: "2026-10-16 09:30 UTC",
            },
        );
        assert_eq!(canvas.pages(), summary.pages);

        let bytes = canvas.into_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1_000);
    }
}
