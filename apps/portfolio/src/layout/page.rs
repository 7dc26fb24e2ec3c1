//! Page geometry and the drawing commands the layout engine emits.
//!
//! Coordinates are PDF points with the origin at the top-left corner and y
//! growing downwards. The PDF backend flips them.

use serde::{Deserialize, Serialize};

use crate::models::FontStyle;

/// Layout parameters for the CV pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub line_height: f32,
    pub body_font_size: f32,
    pub banner_font_size: f32,
    pub banner_height: f32,
    /// Minimum space a section banner needs below it; less than this and the
    /// banner moves to a new page.
    pub header_reserve: f32,
    /// A line whose cursor lands deeper than `page_height - bottom_threshold`
    /// moves to a new page.
    pub bottom_threshold: f32,
    /// Extra left indent for bullet items.
    pub bullet_indent: f32,
    pub banner_fill: Rgb,
}

impl PageConfig {
    /// Cursor position at the top of every page after a break.
    pub fn top_cursor(&self) -> f32 {
        self.margin + 20.0
    }

    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }
}

/// A4 in points, 40pt margins, 11pt body text on 16pt lines.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        page_width: 595.28,
        page_height: 841.89,
        margin: 40.0,
        line_height: 16.0,
        body_font_size: 11.0,
        banner_font_size: 14.0,
        banner_height: 20.0,
        header_reserve: 100.0,
        bottom_threshold: 30.0,
        bullet_indent: 10.0,
        banner_fill: Rgb(41, 82, 143),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const LINK_BLUE: Rgb = Rgb(0, 0, 255);
    pub const FOOTER_GREY: Rgb = Rgb(100, 100, 100);

    /// Components as 0.0–1.0 floats, the form PDF color operators take.
    pub fn unit(self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawOp {
    /// Filled rectangle; `y` is the top edge.
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    /// A single line of text; `y` is the baseline.
    Text {
        x: f32,
        y: f32,
        text: String,
        style: FontStyle,
        size: f32,
        color: Rgb,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// All text drawn on this page, in drawing order.
    #[cfg(test)]
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::FillRect { .. } => None,
        })
    }
}

/// The renderable multi-page result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSet {
    pub width: f32,
    pub height: f32,
    pub pages: Vec<Page>,
}

impl PageSet {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
