// src/config.rs

pub const PLACEHOLDER_HOST: &str = "https://placehold.co";
pub const PLACEHOLDER_BG: &str = "FF5722";
pub const PLACEHOLDER_FG: &str = "FFFFFF";
pub const PLACEHOLDER_LABEL: &str = "Error";

// Preloaded on mount so the hero doesn't shift once it arrives.
pub const BANNER_URL: &str = "https://placehold.co/1920x1080/0A0A0A/FFFFFF?text=Minister's+Banner";
