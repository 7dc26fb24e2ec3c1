use std::fmt::Write;

use crate::content::PortfolioContent;

use super::{Page, SiteState};

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn class_list(base: &str, active: bool, flag: &str) -> String {
    if active {
        format!("{base} {flag}")
    } else {
        base.to_string()
    }
}

fn page_body(page: Page, content: &PortfolioContent, transcript: &str) -> String {
    let terminal = &content.terminal;
    match page {
        Page::Home => format!(
            "<h1>{}</h1>\n<p>{}</p>",
            escape_html(&content.resume.header.name),
            escape_html(&content.resume.header.address)
        ),
        Page::About => format!("<pre>{}</pre>", escape_html(&terminal.whoami)),
        Page::Education => format!("<pre>{}</pre>", escape_html(&terminal.education)),
        Page::Projects => format!("<pre>{}</pre>", escape_html(&terminal.projects)),
        Page::Terminal => format!(
            concat!(
                "<div class=\"terminal\">\n",
                "<pre id=\"terminal-output\">{}</pre>\n",
                "<form id=\"terminal-form\" action=\"/api/terminal\" method=\"post\">\n",
                "<span class=\"prompt\">{}</span> ",
                "<input id=\"terminal-input\" name=\"input\" autocomplete=\"off\" autofocus>\n",
                "</form>\n",
                "</div>"
            ),
            escape_html(transcript),
            escape_html(&terminal.prompt)
        ),
        Page::Contact => concat!(
            "<form class=\"contact-form\" action=\"/contact\" method=\"post\">\n",
            "<input name=\"name\" placeholder=\"Name\" required>\n",
            "<input name=\"email\" type=\"email\" placeholder=\"Email\" required>\n",
            "<textarea name=\"message\" placeholder=\"Message\" required></textarea>\n",
            "<button type=\"submit\">Send</button>\n",
            "</form>"
        )
        .to_string(),
    }
}

/// Renders the full page for `state`: nav links with the active one marked,
/// menu and overlay classes, and every page section with only the active
/// one shown.
pub fn render_shell(state: &SiteState, content: &PortfolioContent) -> String {
    render_with_transcript(state, content, &content.terminal.welcome)
}

/// `render_shell` with `transcript` in the terminal output pane instead of
/// the welcome banner.
pub fn render_with_transcript(
    state: &SiteState,
    content: &PortfolioContent,
    transcript: &str,
) -> String {
    let menu_open = state.is_menu_open();
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(
        html,
        "<title>{}</title>",
        escape_html(&content.resume.header.name)
    );
    html.push_str("<link rel=\"icon\" type=\"image/png\" href=\"/favicon.png\">\n</head>\n");

    if state.scroll_locked {
        html.push_str("<body style=\"overflow: hidden\">\n");
    } else {
        html.push_str("<body>\n");
    }
    html.push_str("<nav>\n");

    if state.hamburger_visible {
        let _ = writeln!(
            html,
            "<a class=\"{}\" href=\"?menu={}\">&#9776;</a>",
            class_list("hamburger", menu_open, "active"),
            if menu_open { "closed" } else { "open" }
        );
    }

    let _ = writeln!(
        html,
        "<ul class=\"{}\">",
        class_list("nav-links", menu_open, "show")
    );
    for page in Page::ALL {
        let _ = writeln!(
            html,
            "<li><a href=\"/{id}\" data-page=\"{id}\" class=\"{class}\">{label}</a></li>",
            id = page.id(),
            class = if page == state.active_page { "active" } else { "" },
            label = page.label()
        );
    }
    html.push_str("</ul>\n");
    let _ = writeln!(
        html,
        "<div class=\"{}\"></div>\n</nav>",
        class_list("nav-overlay", menu_open, "show")
    );

    html.push_str("<main class=\"page-container\">\n");
    for page in Page::ALL {
        let _ = writeln!(
            html,
            "<section id=\"{}\" class=\"{}\">\n{}\n</section>",
            page.id(),
            class_list("page", page == state.active_page, "active"),
            page_body(page, content, transcript)
        );
    }
    html.push_str("</main>\n<footer><a href=\"/cv.pdf\">Download CV</a></footer>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin_content;
    use crate::site::{navigate, open_menu};

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_active_page_is_marked() {
        let state = navigate(SiteState::default(), "projects");
        let html = render_shell(&state, &builtin_content());

        assert!(html.contains("<section id=\"projects\" class=\"page active\">"));
        assert!(html.contains("<section id=\"home\" class=\"page\">"));
        assert!(html.contains("data-page=\"projects\" class=\"active\""));
    }

    #[test]
    fn test_open_menu_classes_and_scroll_lock() {
        let state = open_menu(SiteState::default());
        let html = render_shell(&state, &builtin_content());

        assert!(html.contains("class=\"hamburger active\""));
        assert!(html.contains("class=\"nav-links show\""));
        assert!(html.contains("class=\"nav-overlay show\""));
        assert!(html.contains("<body style=\"overflow: hidden\">"));
    }

    #[test]
    fn test_transcript_replaces_welcome_and_is_escaped() {
        let content = builtin_content();
        let state = navigate(SiteState::default(), "terminal");
        let html = render_with_transcript(&state, &content, "root@bikash# <b>");

        assert!(html.contains("<pre id=\"terminal-output\">root@bikash# &lt;b&gt;</pre>"));
        assert!(!html.contains(&escape_html(&content.terminal.welcome)));
    }

    #[test]
    fn test_closed_menu_has_no_flags() {
        let html = render_shell(&SiteState::default(), &builtin_content());
        assert!(html.contains("class=\"hamburger\""));
        assert!(html.contains("class=\"nav-links\""));
        assert!(html.contains("<body>"));
    }
}
