//! Local UI chrome state (mobile menu, active navigation link).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session and listing
//! models so the navbar can evolve independently of API data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Primary navigation links shown in the navbar, in display order.
pub const NAV_LINKS: [(&str, &str); 4] = [("Home", "/"), ("Services", "/services"), ("About", "/about"), ("Contact", "/contact")];

/// UI state shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Collapse the mobile menu, e.g. after following a link.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Whether the nav link for `href` should be highlighted at `pathname`.
///
/// The home link matches only `/`; other links also match nested paths.
#[must_use]
pub fn is_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}
