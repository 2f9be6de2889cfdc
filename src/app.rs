// src/app.rs
use std::rc::Rc;

use chrono::Datelike;
use wasm_bindgen::JsValue;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::config::BANNER_URL;
use crate::content::{Event, GalleryImage, Profile, SiteContent, SocialLink, Song};
use crate::icons::{icon, Icon};
use crate::nav::{Anchor, DomViewport, NavController, NavLink, Viewport, NAV_LINKS};
use crate::sections::{
    AboutSection, ContactSection, EventsSection, Footer, GallerySection, HomeSection,
    MusicSection,
};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub profile: Rc<Profile>,
    pub songs: Rc<[Song]>,
    pub gallery: Rc<[GalleryImage]>,
    pub events: Rc<[Event]>,
    pub socials: Rc<[SocialLink]>,
}

impl From<SiteContent> for AppProps {
    fn from(content: SiteContent) -> Self {
        Self {
            profile: Rc::new(content.profile),
            songs: content.songs.into(),
            gallery: content.gallery.into(),
            events: content.events.into(),
            socials: content.socials.into(),
        }
    }
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn preload_image(url: &str) -> Result<(), JsValue> {
    let img = HtmlImageElement::new()?;
    img.set_src(url);
    Ok(())
}

/// Applies a nav click. A missing anchor is a no-op; the menu closes either way.
fn navigated(mut nav: NavController, viewport: &impl Viewport, anchor: Anchor) -> NavController {
    let _ = nav.navigate(viewport, anchor);
    nav
}

fn nav_item(link: &NavLink, on_navigate: &Callback<Anchor>, mobile: bool) -> Html {
    let anchor = link.anchor;
    let onclick = on_navigate.reform(move |_: MouseEvent| anchor);
    let class = if mobile {
        "flex items-center space-x-3 px-4 py-3 w-full text-left transition-all duration-200 text-gray-800 hover:bg-gray-100"
    } else {
        "flex items-center space-x-2 px-3 py-2 rounded-md transition-all duration-200 text-gray-700 hover:bg-gray-100 hover:text-orange-600"
    };

    html! {
        <button {onclick} {class}>
            { icon(link.icon, 5) }
            <span>{ link.label }</span>
        </button>
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let nav = use_state(NavController::default);
    let year = use_state(current_year);

    use_effect_with((), |_| {
        preload_image(BANNER_URL).ok();
        || ()
    });

    let on_toggle = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *nav;
            next.toggle_menu();
            nav.set(next);
        })
    };

    let on_navigate = {
        let nav = nav.clone();
        Callback::from(move |anchor: Anchor| nav.set(navigated(*nav, &DomViewport, anchor)))
    };

    let menu_open = nav.menu_open();

    html! {
        <div class="min-h-screen bg-gray-100 font-inter text-gray-900">
            <header class="bg-white shadow-lg sticky top-0 z-50">
                <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                    <div class="text-2xl font-bold text-orange-600">{ props.profile.name.clone() }</div>

                    <nav class="hidden md:flex space-x-6">
                        { for NAV_LINKS.iter().map(|l| nav_item(l, &on_navigate, false)) }
                    </nav>

                    <div class="md:hidden">
                        <button
                            onclick={on_toggle}
                            aria-label={if menu_open { "Close menu" } else { "Open menu" }}
                            aria-expanded={menu_open.to_string()}
                            class="p-2 rounded-md text-gray-800 hover:bg-gray-200 focus:outline-none focus:ring-2 focus:ring-orange-500"
                        >
                            { icon(if menu_open { Icon::Close } else { Icon::Menu }, 6) }
                        </button>
                    </div>
                </div>

                if menu_open {
                    <nav class="md:hidden bg-white shadow-lg pb-4">
                        { for NAV_LINKS.iter().map(|l| nav_item(l, &on_navigate, true)) }
                    </nav>
                }
            </header>

            <main class="container mx-auto px-4 py-8">
                <HomeSection profile={props.profile.clone()} on_navigate={on_navigate.clone()} />
                <AboutSection profile={props.profile.clone()} />
                <MusicSection songs={props.songs.clone()} />
                <GallerySection images={props.gallery.clone()} />
                <EventsSection events={props.events.clone()} />
                <ContactSection socials={props.socials.clone()} />
            </main>

            <Footer owner={props.profile.name.clone()} year={*year} socials={props.socials.clone()} />
        </div>
    }
}

/// Shown instead of the site when the bundled content can't be decoded.
#[function_component(Unavailable)]
pub fn unavailable() -> Html {
    html! {
        <main class="min-h-screen flex items-center justify-center bg-gray-100 text-gray-700">
            <p>{"This page is temporarily unavailable. Please check back soon."}</p>
        </main>
    }
}
