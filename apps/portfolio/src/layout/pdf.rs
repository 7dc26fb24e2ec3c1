//! PDF drawing backend.
//!
//! `PdfBackend` is the seam between layout and bytes: the layout engine only
//! produces a `PageSet`, and a backend turns it into a file. The default
//! backend writes the page set with `pdf-writer` using the three base-14
//! Helvetica faces, so no font data is embedded.

use chrono::{DateTime, Datelike, Timelike, Utc};
use pdf_writer::{Content, Date, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use thiserror::Error;

use crate::layout::font_metrics::get_metrics;
use crate::layout::page::{DrawOp, PageSet};
use crate::models::FontStyle;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("page set is empty")]
    EmptyDocument,
}

/// Metadata written into the PDF info dictionary.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
    pub created: DateTime<Utc>,
}

pub trait PdfBackend: Send + Sync {
    fn render(&self, pages: &PageSet, info: &DocumentInfo) -> Result<Vec<u8>, RenderError>;
}

/// Writes uncompressed PDF 1.7 with `pdf-writer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfWriterBackend;

const FACES: [(FontStyle, &[u8]); 3] = [
    (FontStyle::Regular, b"F1"),
    (FontStyle::Bold, b"F2"),
    (FontStyle::Italic, b"F3"),
];

fn font_resource(style: FontStyle) -> Name<'static> {
    let name = FACES
        .iter()
        .find(|(face, _)| *face == style)
        .map(|(_, name)| *name)
        .unwrap_or(b"F1");
    Name(name)
}

fn pdf_date(at: &DateTime<Utc>) -> Date {
    Date::new(at.year().clamp(0, 9999) as u16)
        .month(at.month() as u8)
        .day(at.day() as u8)
        .hour(at.hour() as u8)
        .minute(at.minute() as u8)
        .second(at.second() as u8)
        .utc_offset_hour(0)
}

/// Encodes `text` for a WinAnsiEncoding simple font.
///
/// Latin-1 maps straight through; the handful of typographic characters that
/// WinAnsi places in 0x80..0x9F are translated; anything else becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}' => c as u8,
            '€' => 0x80,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

impl PdfBackend for PdfWriterBackend {
    fn render(&self, pages: &PageSet, info: &DocumentInfo) -> Result<Vec<u8>, RenderError> {
        if pages.pages.is_empty() {
            return Err(RenderError::EmptyDocument);
        }

        let mut alloc = Ref::new(1);
        let catalog_id = alloc.bump();
        let tree_id = alloc.bump();
        let info_id = alloc.bump();
        let font_ids: Vec<(FontStyle, Ref)> =
            FACES.iter().map(|(style, _)| (*style, alloc.bump())).collect();
        let page_ids: Vec<(Ref, Ref)> = pages
            .pages
            .iter()
            .map(|_| (alloc.bump(), alloc.bump()))
            .collect();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(tree_id);
        pdf.pages(tree_id)
            .kids(page_ids.iter().map(|(page_id, _)| *page_id))
            .count(page_ids.len() as i32);

        pdf.document_info(info_id)
            .title(TextStr(&info.title))
            .author(TextStr(&info.author))
            .creator(TextStr(concat!("portfolio ", env!("CARGO_PKG_VERSION"))))
            .creation_date(pdf_date(&info.created));

        for (style, font_id) in &font_ids {
            pdf.type1_font(*font_id)
                .base_font(Name(get_metrics(*style).base_font.as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let media_box = Rect::new(0.0, 0.0, pages.width, pages.height);
        for (page, (page_id, content_id)) in pages.pages.iter().zip(&page_ids) {
            let mut page_writer = pdf.page(*page_id);
            page_writer.media_box(media_box);
            page_writer.parent(tree_id);
            page_writer.contents(*content_id);
            {
                let mut resources = page_writer.resources();
                let mut fonts = resources.fonts();
                for (style, font_id) in &font_ids {
                    fonts.pair(font_resource(*style), *font_id);
                }
            }
            page_writer.finish();

            let mut content = Content::new();
            for op in &page.ops {
                match op {
                    DrawOp::FillRect {
                        x,
                        y,
                        width,
                        height,
                        color,
                    } => {
                        let (r, g, b) = color.unit();
                        content.set_fill_rgb(r, g, b);
                        content.rect(*x, pages.height - y - height, *width, *height);
                        content.fill_nonzero();
                    }
                    DrawOp::Text {
                        x,
                        y,
                        text,
                        style,
                        size,
                        color,
                    } => {
                        let (r, g, b) = color.unit();
                        let encoded = encode_win_ansi(text);
                        content.set_fill_rgb(r, g, b);
                        content.begin_text();
                        content.set_font(font_resource(*style), *size);
                        content.next_line(*x, pages.height - y);
                        content.show(Str(&encoded));
                        content.end_text();
                    }
                }
            }
            pdf.stream(*content_id, &content.finish());
        }

        Ok(pdf.finish())
    }
}
