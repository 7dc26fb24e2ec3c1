//! Page routing and the mobile navigation menu as an explicit state value.
//!
//! Every transition is a pure function of the current state. Opening an
//! open menu or closing a closed one returns the state unchanged, so the
//! scroll lock can never be taken or released twice.

mod shell;

use serde::Serialize;

pub use shell::{render_shell, render_with_transcript};

/// Widths above this are desktop: no hamburger, menu always closed.
pub const DESKTOP_BREAKPOINT: u32 = 992;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    About,
    Education,
    Projects,
    Terminal,
    Contact,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Education,
        Page::Projects,
        Page::Terminal,
        Page::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Education => "education",
            Page::Projects => "projects",
            Page::Terminal => "terminal",
            Page::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Education => "Education",
            Page::Projects => "Projects",
            Page::Terminal => "Terminal",
            Page::Contact => "Contact",
        }
    }

    /// Unknown or empty ids resolve to `Home`.
    pub fn from_id(id: &str) -> Page {
        let id = id.trim().trim_start_matches('#');
        Page::ALL
            .into_iter()
            .find(|page| page.id() == id)
            .unwrap_or(Page::Home)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuState {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteState {
    pub active_page: Page,
    pub menu: MenuState,
    pub hamburger_visible: bool,
    pub scroll_locked: bool,
}

impl Default for SiteState {
    fn default() -> Self {
        Self {
            active_page: Page::Home,
            menu: MenuState::Closed,
            hamburger_visible: true,
            scroll_locked: false,
        }
    }
}

impl SiteState {
    pub fn is_menu_open(&self) -> bool {
        self.menu == MenuState::Open
    }
}

pub fn navigate(state: SiteState, page_id: &str) -> SiteState {
    SiteState {
        active_page: Page::from_id(page_id),
        ..close_menu(state)
    }
}

pub fn open_menu(state: SiteState) -> SiteState {
    if state.is_menu_open() {
        return state;
    }
    SiteState {
        menu: MenuState::Open,
        scroll_locked: true,
        ..state
    }
}

pub fn close_menu(state: SiteState) -> SiteState {
    if !state.is_menu_open() {
        return state;
    }
    SiteState {
        menu: MenuState::Closed,
        scroll_locked: false,
        ..state
    }
}

pub fn toggle_menu(state: SiteState) -> SiteState {
    if state.is_menu_open() {
        close_menu(state)
    } else {
        open_menu(state)
    }
}

/// The Escape key.
pub fn escape(state: SiteState) -> SiteState {
    close_menu(state)
}

pub fn resize(state: SiteState, width: u32) -> SiteState {
    if width > DESKTOP_BREAKPOINT {
        SiteState {
            menu: MenuState::Closed,
            hamburger_visible: false,
            scroll_locked: false,
            ..state
        }
    } else {
        SiteState {
            hamburger_visible: true,
            ..state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> SiteState {
        open_menu(SiteState::default())
    }

    #[test]
    fn test_unknown_or_empty_page_falls_back_to_home() {
        let state = navigate(SiteState::default(), "projects");
        assert_eq!(state.active_page, Page::Projects);
        assert_eq!(navigate(state, "nope").active_page, Page::Home);
        assert_eq!(navigate(state, "").active_page, Page::Home);
        assert_eq!(navigate(state, "#contact").active_page, Page::Contact);
    }

    #[test]
    fn test_navigation_closes_menu_and_releases_scroll() {
        let state = navigate(open(), "about");
        assert_eq!(state.menu, MenuState::Closed);
        assert!(!state.scroll_locked);
        assert_eq!(state.active_page, Page::About);
    }

    #[test]
    fn test_open_and_close_are_idempotent() {
        let once = open();
        assert_eq!(open_menu(once), once);
        assert!(once.scroll_locked);

        let closed = close_menu(once);
        assert_eq!(close_menu(closed), closed);
        assert_eq!(closed, SiteState::default());
    }

    #[test]
    fn test_toggle_flips_menu() {
        let state = toggle_menu(SiteState::default());
        assert!(state.is_menu_open());
        assert!(!toggle_menu(state).is_menu_open());
    }

    #[test]
    fn test_escape_only_acts_on_open_menu() {
        assert_eq!(escape(SiteState::default()), SiteState::default());
        assert_eq!(escape(open()).menu, MenuState::Closed);
    }

    #[test]
    fn test_resize_to_desktop_closes_menu_and_hides_hamburger() {
        let state = resize(open(), 1200);
        assert_eq!(state.menu, MenuState::Closed);
        assert!(!state.hamburger_visible);
        assert!(!state.scroll_locked);
    }

    #[test]
    fn test_resize_at_breakpoint_keeps_menu() {
        let state = resize(open(), DESKTOP_BREAKPOINT);
        assert!(state.is_menu_open());
        assert!(state.hamburger_visible);
        assert!(resize(resize(open(), 1200), 500).hamburger_visible);
    }
}
