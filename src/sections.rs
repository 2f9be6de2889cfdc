// src/sections.rs — page sections, top to bottom
use std::rc::Rc;

use yew::prelude::*;

use crate::content::{Event, GalleryImage, Profile, SocialLink, Song};
use crate::fallback::{FallbackImage, Placeholder};
use crate::icons::{icon, Icon};
use crate::nav::Anchor;

const PORTRAIT: Placeholder = Placeholder::square(200);
const BIO_IMAGE: Placeholder = Placeholder::square(400);
const COVER: Placeholder = Placeholder::square(300);
const GALLERY: Placeholder = Placeholder::new(400, 300);

const SECTION: &str = "py-12 bg-white rounded-lg shadow-xl p-6 md:p-10 mb-12";
const CARD: &str = "bg-gray-50 rounded-lg shadow-md overflow-hidden transform hover:scale-105 transition-transform duration-300";

fn heading(text: &str) -> Html {
    html! { <h2 class="text-4xl font-bold text-orange-600 mb-8 text-center">{ text }</h2> }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub profile: Rc<Profile>,
    pub on_navigate: Callback<Anchor>,
}

#[function_component(HomeSection)]
pub fn home_section(props: &HomeProps) -> Html {
    let profile = &props.profile;
    let listen = props.on_navigate.reform(|_: MouseEvent| Anchor::Music);
    let events = props.on_navigate.reform(|_: MouseEvent| Anchor::Events);

    html! {
        <section id={Anchor::Home.id()} class="text-center py-16 bg-white rounded-lg shadow-xl mb-12">
            <div class="max-w-4xl mx-auto">
                <FallbackImage
                    src={profile.portrait.clone()}
                    alt="Minister's Portrait"
                    placeholder={PORTRAIT}
                    class="mx-auto rounded-full w-48 h-48 object-cover border-4 border-orange-600 shadow-lg mb-8"
                />
                <h1 class="text-5xl font-extrabold text-orange-600 mb-4 leading-tight">
                    {"Welcome to the Official Page of "}
                    <br class="hidden sm:inline" />
                    { profile.name.clone() }
                </h1>
                <p class="text-xl text-gray-700 mb-8 max-w-2xl mx-auto">{ profile.tagline.clone() }</p>
                <div class="flex justify-center space-x-4">
                    <button
                        onclick={listen}
                        class="bg-orange-600 hover:bg-orange-700 text-white font-bold py-3 px-8 rounded-full shadow-lg transform hover:scale-105 transition-all duration-300"
                    >
                        {"Listen Now"}
                    </button>
                    <button
                        onclick={events}
                        class="bg-gray-200 border-2 border-orange-600 text-orange-600 font-bold py-3 px-8 rounded-full shadow-lg transform hover:scale-105 transition-all duration-300"
                    >
                        {"View Events"}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub profile: Rc<Profile>,
}

#[function_component(AboutSection)]
pub fn about_section(props: &AboutProps) -> Html {
    let profile = &props.profile;
    let last = profile.bio.len().saturating_sub(1);

    html! {
        <section id={Anchor::About.id()} class={SECTION}>
            { heading(&format!("About {}", profile.name)) }
            <div class="flex flex-col md:flex-row items-center md:space-x-8">
                <div class="md:w-1/3 mb-8 md:mb-0">
                    <FallbackImage
                        src={profile.bio_image.clone()}
                        alt="Minister's Bio Image"
                        placeholder={BIO_IMAGE}
                        class="rounded-lg shadow-lg w-full h-auto object-cover"
                    />
                </div>
                <div class="md:w-2/3 text-lg text-gray-700 leading-relaxed">
                    { for profile.bio.iter().enumerate().map(|(i, para)| html! {
                        <p class={classes!((i < last).then_some("mb-4"))}>{ para.clone() }</p>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn song_card(song: &Song) -> Html {
    html! {
        <article key={song.id} class={CARD}>
            <FallbackImage
                src={song.cover.clone()}
                alt={format!("{} Cover", song.title)}
                placeholder={COVER}
                class="w-full h-48 object-cover"
            />
            <div class="p-4">
                <h3 class="text-xl font-semibold text-gray-800 mb-1">{ song.title.clone() }</h3>
                <p class="text-gray-600 text-sm mb-2">{ format!("Event: {}", song.event) }</p>
                <p class="text-gray-500 text-sm">{ format!("Duration: {}", song.duration) }</p>
                if let Some(video) = &song.video {
                    <a
                        href={video.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="mt-4 w-full bg-orange-600 hover:bg-orange-700 text-white font-bold py-2 px-4 rounded-md shadow-md block text-center text-sm"
                    >
                        {"Watch on YouTube"}
                    </a>
                }
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct MusicProps {
    pub songs: Rc<[Song]>,
}

#[function_component(MusicSection)]
pub fn music_section(props: &MusicProps) -> Html {
    html! {
        <section id={Anchor::Music.id()} class={SECTION}>
            { heading("Latest Ministrations") }
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8 max-w-5xl mx-auto">
                { for props.songs.iter().map(song_card) }
            </div>
        </section>
    }
}

fn gallery_card(image: &GalleryImage) -> Html {
    html! {
        <figure key={image.id} class={CARD}>
            <FallbackImage
                src={image.src.clone()}
                alt={image.caption.clone()}
                placeholder={GALLERY}
                class="w-full h-64 object-cover"
            />
            <figcaption class="p-4 text-gray-700 text-center">{ image.caption.clone() }</figcaption>
        </figure>
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub images: Rc<[GalleryImage]>,
}

#[function_component(GallerySection)]
pub fn gallery_section(props: &GalleryProps) -> Html {
    html! {
        <section id={Anchor::Gallery.id()} class={SECTION}>
            { heading("Gallery") }
            <p class="text-gray-700 text-center mb-8">
                {"Here are some moments from ministrations and events."}
            </p>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 max-w-6xl mx-auto">
                { for props.images.iter().map(gallery_card) }
            </div>
        </section>
    }
}

fn event_card(event: &Event) -> Html {
    html! {
        <article key={event.id} class="flex flex-col md:flex-row bg-gray-50 rounded-lg shadow-md p-6 items-start md:items-center space-y-4 md:space-y-0 md:space-x-6">
            <div class="flex-shrink-0 text-center md:text-left">
                <p class="text-orange-600 text-xl font-bold">{ event.date.clone() }</p>
                <p class="text-gray-600 text-sm">{ event.time.clone() }</p>
            </div>
            <div class="flex-grow">
                <h3 class="text-2xl font-semibold text-gray-800 mb-1">{ event.title.clone() }</h3>
                <p class="text-gray-500 text-sm mb-2">{ event.location.clone() }</p>
                <p class="text-gray-700">{ event.description.clone() }</p>
            </div>
            <div class="flex-shrink-0">
                if let Some(link) = &event.link {
                    <a
                        href={link.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-orange-600 hover:bg-orange-700 text-white font-bold py-2 px-5 rounded-full shadow-md transform hover:scale-105 transition-all duration-300 inline-block"
                    >
                        {"View Details"}
                    </a>
                }
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct EventsProps {
    pub events: Rc<[Event]>,
}

#[function_component(EventsSection)]
pub fn events_section(props: &EventsProps) -> Html {
    html! {
        <section id={Anchor::Events.id()} class={SECTION}>
            { heading("Upcoming Events") }
            <div class="space-y-6">
                { for props.events.iter().map(event_card) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SocialProps {
    pub socials: Rc<[SocialLink]>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &SocialProps) -> Html {
    html! {
        <section id={Anchor::Contact.id()} class={SECTION}>
            { heading("Get in Touch") }
            <div class="max-w-3xl mx-auto text-center">
                <p class="text-gray-700 mb-8">
                    {"To reach out, please connect with me through my social media channels."}
                </p>
                <div class="flex justify-center space-x-6">
                    { for props.socials.iter().map(|s| html! {
                        <a
                            href={s.url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label={s.label.clone()}
                            class="text-orange-600 hover:text-orange-800 transition-colors duration-200"
                        >
                            { icon(Icon::from(s.kind), 6) }
                        </a>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub owner: AttrValue,
    pub year: i32,
    pub socials: Rc<[SocialLink]>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="bg-white text-gray-800 py-6 text-center rounded-t-lg mt-8 shadow-inner">
            <p>{ format!("© {} {}. All Rights Reserved.", props.year, props.owner.as_str()) }</p>
            <div class="flex justify-center space-x-4 mt-2">
                { for props.socials.iter().map(|s| html! {
                    <a
                        href={s.url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-orange-600 hover:text-orange-800 transition-colors duration-200"
                    >
                        { s.label.clone() }
                    </a>
                }) }
            </div>
        </footer>
    }
}
