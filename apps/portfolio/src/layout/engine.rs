//! CV layout engine: flows the résumé document onto fixed-size pages.
//!
//! # Architecture
//! - `LayoutEngine` owns the page list for one generation pass. The cursor is
//!   threaded through `render_section_header` / `render_text` as a plain `f32`
//!   and is reset to `PageConfig::top_cursor()` on every page break.
//! - `render_document` is the public entry point; it walks the sections in
//!   order and stamps `Page i / N` footers once the page count is known.
//!
//! CPU-bound but fast; callers in async context run it inside
//! `tokio::task::spawn_blocking` together with PDF encoding.

use tracing::debug;

use crate::layout::font_metrics::get_metrics;
use crate::layout::page::{DrawOp, Page, PageConfig, PageSet, Rgb};
use crate::models::{Document, FontStyle, LineItem};

const TITLE_FONT_SIZE: f32 = 18.0;
const NAME_FONT_SIZE: f32 = 14.0;
const FOOTER_FONT_SIZE: f32 = 10.0;
/// Gap added above a banner that is not already at the top of a page.
const SECTION_GAP: f32 = 20.0;
/// Cursor advance past a banner (banner plus breathing room).
const BANNER_ADVANCE: f32 = 30.0;
/// Width reserved at the right edge for the email address in the header block.
const EMAIL_COLUMN: f32 = 200.0;
/// Width reserved at the right edge for date labels.
const DATE_COLUMN: f32 = 120.0;

/// How a run of text is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOptions {
    pub style: FontStyle,
    pub size: f32,
    pub color: Rgb,
}

impl TextOptions {
    pub fn body(config: &PageConfig) -> Self {
        Self {
            style: FontStyle::Regular,
            size: config.body_font_size,
            color: Rgb::BLACK,
        }
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }
}

pub struct LayoutEngine<'a> {
    config: &'a PageConfig,
    /// Never empty; the last page is the one being written.
    pages: Vec<Page>,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(config: &'a PageConfig) -> Self {
        Self {
            config,
            pages: vec![Page::default()],
        }
    }

    #[cfg(test)]
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn draw(&mut self, op: DrawOp) {
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, options: &TextOptions) {
        self.draw(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            style: options.style,
            size: options.size,
            color: options.color,
        });
    }

    /// Starts a new page and returns the reset cursor.
    fn break_page(&mut self) -> f32 {
        self.pages.push(Page::default());
        debug!("Layout: page break, now on page {}", self.pages.len());
        self.config.top_cursor()
    }

    /// Draws a section banner at `cursor_y` and returns the cursor below it.
    ///
    /// When the space left on the page is at or below `header_reserve`, the
    /// banner goes to the top of a new page instead. A banner that is not
    /// already at the top of a page gets `SECTION_GAP` above it.
    pub fn render_section_header(&mut self, title: &str, cursor_y: f32) -> f32 {
        let config = self.config;
        let mut y = cursor_y;

        if config.page_height - y <= config.header_reserve {
            y = self.break_page();
        } else if y > config.top_cursor() {
            y += SECTION_GAP;
        }

        self.draw(DrawOp::FillRect {
            x: config.margin,
            y: y - 12.0,
            width: config.content_width(),
            height: config.banner_height,
            color: config.banner_fill,
        });
        let banner_text = TextOptions {
            style: FontStyle::Bold,
            size: config.banner_font_size,
            color: Rgb::WHITE,
        };
        self.draw_text(title, config.margin + 8.0, y + 2.0, &banner_text);

        y + BANNER_ADVANCE
    }

    /// Wraps `text` to the width left of `x` and draws it line by line.
    ///
    /// Each line whose cursor is past the bottom threshold first moves to a
    /// new page, so an overflow costs exactly one break. Returns the cursor
    /// below the last line.
    pub fn render_text(&mut self, text: &str, x: f32, cursor_y: f32, options: &TextOptions) -> f32 {
        let config = self.config;
        let metrics = get_metrics(options.style);
        let max_width = config.content_width() - (x - config.margin).max(0.0);
        let lines = metrics.split_text_to_size(text, max_width, options.size);

        let mut y = cursor_y;
        for line in &lines {
            if y > config.page_height - config.bottom_threshold {
                y = self.break_page();
            }
            self.draw_text(line, x, y, options);
            y += config.line_height;
        }
        y
    }

    fn render_header_block(&mut self, document: &Document, cursor_y: f32) -> f32 {
        let config = self.config;
        let body = TextOptions::body(config);
        let mut y = cursor_y;

        let title = TextOptions {
            style: FontStyle::Bold,
            size: TITLE_FONT_SIZE,
            color: Rgb::BLACK,
        };
        self.draw_text(&document.title, config.margin, y, &title);
        y += 30.0;

        let name = TextOptions {
            size: NAME_FONT_SIZE,
            ..title
        };
        self.draw_text(&document.header.name, config.margin, y, &name);
        let email = TextOptions {
            color: Rgb::LINK_BLUE,
            ..body
        };
        self.draw_text(
            &document.header.email,
            config.page_width - config.margin - EMAIL_COLUMN,
            y,
            &email,
        );
        y += config.line_height;

        y = self.render_text(&document.header.address, config.margin, y, &body);
        y + 20.0
    }

    fn render_item(&mut self, item: &LineItem, cursor_y: f32) -> f32 {
        let config = self.config;
        let body = TextOptions::body(config);

        match item {
            LineItem::Text { text, .. } if text.trim().is_empty() => {
                cursor_y + config.line_height / 2.0
            }
            LineItem::Text { text, style, date } => {
                let y = self.render_text(text, config.margin, cursor_y, &body.with_style(*style));
                if let Some(date) = date {
                    let italic = body.with_style(FontStyle::Italic);
                    self.draw_text(
                        date,
                        config.page_width - config.margin - DATE_COLUMN,
                        y - config.line_height,
                        &italic,
                    );
                }
                y
            }
            LineItem::Bullet { text } => self.render_text(
                &format!("• {text}"),
                config.margin + config.bullet_indent,
                cursor_y,
                &body,
            ),
            LineItem::Blank => cursor_y + config.line_height / 2.0,
            LineItem::Spacer { height } => cursor_y + height,
        }
    }

    /// Appends a right-aligned `Page i / N` footer to every page.
    fn stamp_footers(&mut self) {
        let config = self.config;
        let total = self.pages.len();
        let metrics = get_metrics(FontStyle::Regular);

        for (index, page) in self.pages.iter_mut().enumerate() {
            let label = format!("Page {} / {}", index + 1, total);
            let width = metrics.measure_str(&label, FOOTER_FONT_SIZE);
            page.ops.push(DrawOp::Text {
                x: config.page_width - config.margin - width,
                y: config.page_height - 30.0,
                text: label,
                style: FontStyle::Regular,
                size: FOOTER_FONT_SIZE,
                color: Rgb::FOOTER_GREY,
            });
        }
    }

    fn finish(mut self) -> PageSet {
        self.stamp_footers();
        PageSet {
            width: self.config.page_width,
            height: self.config.page_height,
            pages: self.pages,
        }
    }
}

/// Lays out the whole document: header block, then every section in order.
pub fn render_document(document: &Document, config: &PageConfig) -> PageSet {
    let mut engine = LayoutEngine::new(config);
    let mut y = engine.render_header_block(document, config.margin);

    for section in &document.sections {
        y = engine.render_section_header(&section.title, y);
        for item in &section.items {
            y = engine.render_item(item, y);
        }
        y += section.trailing_gap;
    }

    let pages = engine.finish();
    debug!(
        "Layout: {} sections on {} page(s)",
        document.sections.len(),
        pages.page_count()
    );
    pages
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
