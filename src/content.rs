// src/content.rs
use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site.json is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate id {id} in {list}")]
    DuplicateId { list: &'static str, id: u32 },
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub portrait: String,
    pub tagline: String,
    pub bio_image: String,
    pub bio: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Song {
    pub id: u32,
    pub title: String,
    pub event: String,
    pub duration: String, // MM:SS, display only
    pub cover: String,
    #[serde(default)]
    pub video: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GalleryImage {
    pub id: u32,
    pub src: String,
    pub caption: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Event {
    pub id: u32,
    pub date: String,
    pub time: String,
    pub title: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Facebook,
    Instagram,
    Youtube,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: String,
    pub url: String,
}

/// Everything the page shows, decoded once at boot and never mutated.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SiteContent {
    pub profile: Profile,
    pub songs: Vec<Song>,
    pub gallery: Vec<GalleryImage>,
    pub events: Vec<Event>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl SiteContent {
    /// Decodes the `content/site.json` bundled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        unique_ids("songs", self.songs.iter().map(|s| s.id))?;
        unique_ids("gallery", self.gallery.iter().map(|g| g.id))?;
        unique_ids("events", self.events.iter().map(|e| e.id))
    }
}

fn unique_ids(list: &'static str, ids: impl Iterator<Item = u32>) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId { list, id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_content_loads() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.profile.name, "John Teidi");
        assert_eq!(content.songs.len(), 3);
        assert_eq!(content.gallery.len(), 6);
        assert_eq!(content.events.len(), 1);
        assert_eq!(content.profile.bio.len(), 3);
    }

    #[test]
    fn embedded_songs_keep_declared_order() {
        let content = SiteContent::embedded().unwrap();
        let titles: Vec<&str> = content.songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Mimo Mimo Ni Oluwa", "HOLY", "HUNGER"]);
    }

    #[test]
    fn hunger_points_at_its_video() {
        let content = SiteContent::embedded().unwrap();
        let hunger = content.songs.iter().find(|s| s.id == 3).unwrap();
        assert_eq!(hunger.title, "HUNGER");
        assert_eq!(
            hunger.video.as_deref(),
            Some("https://www.youtube.com/watch?v=tk2tdg-3EcM")
        );
    }

    #[test]
    fn missing_event_link_decodes_as_none() {
        let json = r#"{
            "profile": { "name": "n", "portrait": "p", "tagline": "t", "bio_image": "b", "bio": [] },
            "songs": [{ "id": 1, "title": "a", "event": "e", "duration": "1:00", "cover": "c" }],
            "gallery": [{ "id": 1, "src": "s", "caption": "c" }],
            "events": [{ "id": 1, "date": "d", "time": "t", "title": "x", "location": "l", "description": "y" }]
        }"#;
        let content = SiteContent::from_json(json).unwrap();
        assert_eq!(content.events[0].link, None);
        assert_eq!(content.songs[0].video, None);
        assert!(content.socials.is_empty());
    }

    #[test]
    fn duplicate_gallery_id_is_rejected() {
        let json = r#"{
            "profile": { "name": "n", "portrait": "p", "tagline": "t", "bio_image": "b", "bio": [] },
            "songs": [{ "id": 1, "title": "a", "event": "e", "duration": "1:00", "cover": "c" }],
            "gallery": [{ "id": 7, "src": "s", "caption": "c" }, { "id": 7, "src": "s2", "caption": "c2" }],
            "events": []
        }"#;
        match SiteContent::from_json(json) {
            Err(ContentError::DuplicateId { list, id }) => {
                assert_eq!(list, "gallery");
                assert_eq!(id, 7);
            }
            other => panic!("expected duplicate id, got {other:?}"),
        }
    }

    #[test]
    fn empty_lists_are_valid_content() {
        let json = r#"{
            "profile": { "name": "n", "portrait": "p", "tagline": "t", "bio_image": "b", "bio": [] },
            "songs": [],
            "gallery": [],
            "events": []
        }"#;
        let content = SiteContent::from_json(json).unwrap();
        assert!(content.songs.is_empty());
        assert!(content.gallery.is_empty());
        assert!(content.events.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteContent::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
    }
}
