use serde::{Deserialize, Serialize};

/// The résumé as laid out by the layout engine. Built once per generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Large heading drawn at the top of page 1 ("CURRICULUM VITAE").
    pub title: String,
    pub header: PersonalHeader,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalHeader {
    pub name: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub items: Vec<LineItem>,
    /// Vertical space left after the last item, before the next banner.
    #[serde(default = "default_trailing_gap")]
    pub trailing_gap: f32,
}

fn default_trailing_gap() -> f32 {
    10.0
}

/// Face used for a run of text. Maps 1:1 onto the three Helvetica faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineItem {
    /// A paragraph. `date`, when present, is drawn right-aligned in italics
    /// on the paragraph's last line.
    Text {
        text: String,
        #[serde(default)]
        style: FontStyle,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date: Option<String>,
    },
    /// A `•` sub-item, indented past the section's text column.
    Bullet { text: String },
    /// Half a line of vertical space, nothing drawn.
    Blank,
    /// Explicit vertical space in points.
    Spacer { height: f32 },
}

impl LineItem {
    pub fn text(text: impl Into<String>) -> Self {
        LineItem::Text {
            text: text.into(),
            style: FontStyle::Regular,
            date: None,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        LineItem::Text {
            text: text.into(),
            style: FontStyle::Bold,
            date: None,
        }
    }

    pub fn dated(text: impl Into<String>, date: impl Into<String>) -> Self {
        LineItem::Text {
            text: text.into(),
            style: FontStyle::Regular,
            date: Some(date.into()),
        }
    }

    pub fn bullet(text: impl Into<String>) -> Self {
        LineItem::Bullet { text: text.into() }
    }
}

impl Section {
    pub fn new(title: impl Into<String>, items: Vec<LineItem>) -> Self {
        Self {
            title: title.into(),
            items,
            trailing_gap: default_trailing_gap(),
        }
    }

    pub fn with_trailing_gap(mut self, gap: f32) -> Self {
        self.trailing_gap = gap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_json_uses_kind_tag() {
        let item = LineItem::dated("SEE - 3.10 GPA", "2022");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["style"], "regular");
        assert_eq!(json["date"], "2022");
    }

    #[test]
    fn test_section_trailing_gap_defaults_when_missing() {
        let section: Section = serde_json::from_str(
            r#"{ "title": "SKILLS", "items": [{ "kind": "bullet", "text": "Rust" }, { "kind": "blank" }] }"#,
        )
        .unwrap();
        assert_eq!(section.trailing_gap, 10.0);
        assert_eq!(section.items[0], LineItem::bullet("Rust"));
        assert_eq!(section.items[1], LineItem::Blank);
    }

    #[test]
    fn test_text_item_style_defaults_to_regular() {
        let item: LineItem = serde_json::from_str(r#"{ "kind": "text", "text": "hello" }"#).unwrap();
        assert_eq!(item, LineItem::text("hello"));
    }
}
