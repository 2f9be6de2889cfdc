// src/nav.rs
use thiserror::Error;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::icons::Icon;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("no document to scroll")]
    NoDocument,
    #[error("no element with id `{0}`")]
    AnchorNotFound(String),
}

/// Page sections, in display order. `id()` is the DOM id shared with the
/// section markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Home,
    About,
    Music,
    Gallery,
    Events,
    Contact,
}

impl Anchor {
    #[cfg(test)]
    pub const ALL: [Anchor; 6] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Music,
        Anchor::Gallery,
        Anchor::Events,
        Anchor::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home-section",
            Anchor::About => "about-section",
            Anchor::Music => "music-section",
            Anchor::Gallery => "gallery-section",
            Anchor::Events => "events-section",
            Anchor::Contact => "contact-section",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: Anchor,
    pub icon: Icon,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", anchor: Anchor::Home, icon: Icon::Home },
    NavLink { label: "About", anchor: Anchor::About, icon: Icon::User },
    NavLink { label: "Ministration", anchor: Anchor::Music, icon: Icon::Music },
    NavLink { label: "Gallery", anchor: Anchor::Gallery, icon: Icon::Image },
    NavLink { label: "Events", anchor: Anchor::Events, icon: Icon::Calendar },
    NavLink { label: "Contact", anchor: Anchor::Contact, icon: Icon::Mail },
];

/// Something that can bring an element into view by id.
pub trait Viewport {
    fn scroll_into_view(&self, id: &str) -> Result<(), NavError>;
}

/// The browser document.
pub struct DomViewport;

impl Viewport for DomViewport {
    fn scroll_into_view(&self, id: &str) -> Result<(), NavError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(NavError::NoDocument)?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| NavError::AnchorNotFound(id.to_string()))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavController {
    menu_open: bool,
}

impl NavController {
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Scrolls to `anchor` and closes the mobile menu. The menu is closed even
    /// when the scroll fails; the error is only informational.
    pub fn navigate(&mut self, viewport: &impl Viewport, anchor: Anchor) -> Result<(), NavError> {
        let scrolled = viewport.scroll_into_view(anchor.id());
        self.menu_open = false;
        scrolled
    }
}
