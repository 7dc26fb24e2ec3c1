//! Static advance-width tables for the three Helvetica faces used by the CV.
//!
//! Widths are the standard base-14 AFM values in 1/1000 em. Every PDF reader
//! ships these fonts, so the tables are exact rather than approximations.
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use crate::models::FontStyle;

/// Static character-width table for one Helvetica face.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    /// PDF base font name.
    pub base_font: &'static str,
    widths: [u16; 95],
    /// Width of `•`, the only non-ASCII glyph the CV draws.
    bullet_width: u16,
    /// Fallback for everything else outside printable ASCII.
    pub fallback_width: u16,
}

impl FontMetricTable {
    fn char_units(&self, c: char) -> u16 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            self.widths[code - 32]
        } else if c == '•' {
            self.bullet_width
        } else {
            self.fallback_width
        }
    }

    /// Measures `s` in points at `font_size`.
    pub fn measure_str(&self, s: &str, font_size: f32) -> f32 {
        let units: u32 = s.chars().map(|c| self.char_units(c) as u32).sum();
        units as f32 * font_size / 1000.0
    }

    /// Greedy word wrap of `text` into lines no wider than `max_width` points.
    ///
    /// Leading indentation is kept on the first line. A word wider than the
    /// whole line is split by character so nothing is ever dropped. Empty or
    /// whitespace-only text yields no lines.
    pub fn split_text_to_size(&self, text: &str, max_width: f32, font_size: f32) -> Vec<String> {
        let trimmed = text.trim_start();
        if trimmed.trim_end().is_empty() {
            return vec![];
        }
        let indent = &text[..text.len() - trimmed.len()];

        let space_w = self.measure_str(" ", font_size);
        let mut lines: Vec<String> = Vec::new();
        let mut current = indent.to_string();
        let mut current_width = self.measure_str(indent, font_size);
        let mut first_on_line = true;

        for word in trimmed.split_whitespace() {
            let word_w = self.measure_str(word, font_size);
            let gap = if first_on_line { 0.0 } else { space_w };

            if current_width + gap + word_w <= max_width {
                if !first_on_line {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += gap + word_w;
                first_on_line = false;
                continue;
            }

            if !first_on_line {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }

            if word_w <= max_width {
                // Still carries the indent when this is the first word.
                current.push_str(word);
                current_width += word_w;
            } else {
                // Hard-break an over-long word (URLs mostly).
                for c in word.chars() {
                    let c_w = self.measure_str(c.encode_utf8(&mut [0; 4]), font_size);
                    if current_width + c_w > max_width && !current.trim().is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0.0;
                    }
                    current.push(c);
                    current_width += c_w;
                }
            }
            first_on_line = false;
        }
        lines.push(current);
        lines
    }
}

/// Helvetica.
static HELVETICA: FontMetricTable = FontMetricTable {
    base_font: "Helvetica",
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    bullet_width: 350,
    fallback_width: 556,
};

/// Helvetica-Bold.
static HELVETICA_BOLD: FontMetricTable = FontMetricTable {
    base_font: "Helvetica-Bold",
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {    |    }    ~
        389, 280, 389, 584,
    ],
    bullet_width: 350,
    fallback_width: 611,
};

/// Helvetica-Oblique. Same advances as Helvetica.
static HELVETICA_OBLIQUE: FontMetricTable = FontMetricTable {
    base_font: "Helvetica-Oblique",
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    bullet_width: 350,
    fallback_width: 556,
};

/// Returns the static metric table for a face.
pub fn get_metrics(style: FontStyle) -> &'static FontMetricTable {
    match style {
        FontStyle::Regular => &HELVETICA,
        FontStyle::Bold => &HELVETICA_BOLD,
        FontStyle::Italic => &HELVETICA_OBLIQUE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(FontStyle::Regular);
        assert_eq!(metrics.measure_str("", 11.0), 0.0);
    }

    #[test]
    fn test_measure_str_scales_with_font_size() {
        let metrics = get_metrics(FontStyle::Regular);
        // "Rust" = R(722) + u(556) + s(500) + t(278) = 2056 units
        let width = metrics.measure_str("Rust", 10.0);
        assert!((width - 20.56).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let text = "Softwarica College of IT and E-Commerce";
        let regular = get_metrics(FontStyle::Regular).measure_str(text, 11.0);
        let bold = get_metrics(FontStyle::Bold).measure_str(text, 11.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_bullet_has_its_own_width() {
        let metrics = get_metrics(FontStyle::Regular);
        assert!((metrics.measure_str("•", 1000.0) - 350.0).abs() < 1e-3);
        assert!((metrics.measure_str("é", 1000.0) - 556.0).abs() < 1e-3);
    }

    #[test]
    fn test_split_short_text_is_one_line() {
        let metrics = get_metrics(FontStyle::Regular);
        let lines = metrics.split_text_to_size("Chabahil, Kathmandu", 515.0, 11.0);
        assert_eq!(lines, vec!["Chabahil, Kathmandu".to_string()]);
    }

    #[test]
    fn test_split_whitespace_only_yields_nothing() {
        let metrics = get_metrics(FontStyle::Regular);
        assert!(metrics.split_text_to_size("   ", 515.0, 11.0).is_empty());
        assert!(metrics.split_text_to_size("", 515.0, 11.0).is_empty());
    }

    #[test]
    fn test_split_lines_fit_and_keep_every_word() {
        let metrics = get_metrics(FontStyle::Regular);
        let text = "Relevant Coursework: Network Security, Ethical Hacking, Digital Forensics, \
                    Cryptography, Secure Software Development, Reverse Engineering, Malware Analysis";
        let lines = metrics.split_text_to_size(text, 200.0, 11.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(metrics.measure_str(line, 11.0) <= 200.0, "line too wide: {line}");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_split_keeps_leading_indent_on_first_line() {
        let metrics = get_metrics(FontStyle::Regular);
        let lines = metrics.split_text_to_size("   • nested item", 515.0, 11.0);
        assert_eq!(lines, vec!["   • nested item".to_string()]);
    }

    #[test]
    fn test_split_counts_indent_when_first_word_overflows() {
        let metrics = get_metrics(FontStyle::Regular);
        // Ten spaces (27.8pt) plus "aaaa" (22.24pt) already exceed 40pt, so
        // "bb" must not be packed onto the same line.
        let lines = metrics.split_text_to_size("          aaaa bb", 40.0, 10.0);
        assert_eq!(lines, vec!["          aaaa".to_string(), "bb".to_string()]);
    }

    #[test]
    fn test_split_hard_breaks_overlong_word_without_loss() {
        let metrics = get_metrics(FontStyle::Regular);
        let url = "https://github.com/Spydomain/CVE-2023-22809-automated-python-exploits";
        let lines = metrics.split_text_to_size(url, 100.0, 11.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(metrics.measure_str(line, 11.0) <= 100.0);
        }
        assert_eq!(lines.concat(), url);
    }
}
