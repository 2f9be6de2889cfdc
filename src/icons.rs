// src/icons.rs — inline outline icons (24x24, stroke = currentColor)
use yew::prelude::*;

use crate::content::SocialKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    User,
    Music,
    Image,
    Calendar,
    Mail,
    Menu,
    Close,
    Facebook,
    Instagram,
    Youtube,
}

impl From<SocialKind> for Icon {
    fn from(kind: SocialKind) -> Self {
        match kind {
            SocialKind::Facebook => Icon::Facebook,
            SocialKind::Instagram => Icon::Instagram,
            SocialKind::Youtube => Icon::Youtube,
        }
    }
}

fn shapes(icon: Icon) -> Html {
    match icon {
        Icon::Home => html! {
            <>
                <path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" />
                <polyline points="9 22 9 12 15 12 15 22" />
            </>
        },
        Icon::User => html! {
            <>
                <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" />
                <circle cx="12" cy="7" r="4" />
            </>
        },
        Icon::Music => html! {
            <>
                <path d="M9 18V5l12-2v13" />
                <circle cx="6" cy="18" r="3" />
                <circle cx="18" cy="16" r="3" />
            </>
        },
        Icon::Image => html! {
            <>
                <rect width="18" height="18" x="3" y="3" rx="2" ry="2" />
                <circle cx="9" cy="9" r="2" />
                <path d="m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21" />
            </>
        },
        Icon::Calendar => html! {
            <>
                <rect width="18" height="18" x="3" y="4" rx="2" ry="2" />
                <line x1="16" x2="16" y1="2" y2="6" />
                <line x1="8" x2="8" y1="2" y2="6" />
                <line x1="3" x2="21" y1="10" y2="10" />
                <path d="M8 14h.01M12 14h.01M16 14h.01M8 18h.01M12 18h.01M16 18h.01" />
            </>
        },
        Icon::Mail => html! {
            <>
                <rect width="20" height="16" x="2" y="4" rx="2" />
                <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
            </>
        },
        Icon::Menu => html! {
            <>
                <line x1="4" x2="20" y1="12" y2="12" />
                <line x1="4" x2="20" y1="6" y2="6" />
                <line x1="4" x2="20" y1="18" y2="18" />
            </>
        },
        Icon::Close => html! {
            <>
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </>
        },
        Icon::Facebook => html! {
            <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" />
        },
        Icon::Instagram => html! {
            <>
                <rect width="20" height="20" x="2" y="2" rx="5" ry="5" />
                <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
            </>
        },
        Icon::Youtube => html! {
            <>
                <path d="M2.8 2.8A2.8 2.8 0 0 0 0 5.6v12.8A2.8 2.8 0 0 0 2.8 21.2h18.4a2.8 2.8 0 0 0 2.8-2.8V5.6a2.8 2.8 0 0 0-2.8-2.8H2.8z" />
                <path d="m10 15 5-3-5-3v6z" />
            </>
        },
    }
}

/// `size` is the tailwind w-/h- step, e.g. 5 for `w-5 h-5`.
pub fn icon(icon: Icon, size: u8) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class={format!("w-{size} h-{size}")}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { shapes(icon) }
        </svg>
    }
}
