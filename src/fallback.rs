// src/fallback.rs
use yew::prelude::*;

use crate::config::{PLACEHOLDER_BG, PLACEHOLDER_FG, PLACEHOLDER_HOST, PLACEHOLDER_LABEL};

/// Size of the stand-in image shown when a remote image can't be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub width: u32,
    pub height: u32,
}

impl Placeholder {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    pub fn url(&self) -> String {
        format!(
            "{PLACEHOLDER_HOST}/{}x{}/{PLACEHOLDER_BG}/{PLACEHOLDER_FG}?text={PLACEHOLDER_LABEL}",
            self.width, self.height
        )
    }
}

/// The `src` an image is currently showing, plus the one-shot fallback.
///
/// The fallback is consumed by the first failure, so a placeholder that
/// also fails to load leaves the source alone.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSource {
    current: AttrValue,
    fallback: Option<AttrValue>,
}

impl ImageSource {
    pub fn new(src: impl Into<AttrValue>, placeholder: Placeholder) -> Self {
        Self {
            current: src.into(),
            fallback: Some(placeholder.url().into()),
        }
    }

    pub fn current(&self) -> &AttrValue {
        &self.current
    }

    pub fn is_armed(&self) -> bool {
        self.fallback.is_some()
    }

    /// Returns true if this failure swapped in the placeholder.
    pub fn fail(&mut self) -> bool {
        match self.fallback.take() {
            Some(placeholder) => {
                self.current = placeholder;
                true
            }
            None => false,
        }
    }

    /// The state after a load error, or `None` once the fallback is spent.
    pub fn after_failure(&self) -> Option<Self> {
        let mut next = self.clone();
        next.fail().then_some(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub placeholder: Placeholder,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let source = {
        let src = props.src.clone();
        let placeholder = props.placeholder;
        use_state_eq(move || ImageSource::new(src, placeholder))
    };

    // A new src re-arms the fallback.
    {
        let source = source.clone();
        use_effect_with((props.src.clone(), props.placeholder), move |(src, placeholder)| {
            source.set(ImageSource::new(src.clone(), *placeholder));
            || ()
        });
    }

    // Only listen while the fallback is still unused.
    let onerror = source.is_armed().then(|| {
        let source = source.clone();
        Callback::from(move |_: Event| {
            if let Some(next) = source.after_failure() {
                source.set(next);
            }
        })
    });

    html! {
        <img
            src={source.current().clone()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            {onerror}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use yew::ServerRenderer;

    const COVER: &str = "https://img.youtube.com/vi/tk2tdg-3EcM/hqdefault.jpg";

    #[test]
    fn placeholder_url_encodes_size_and_label() {
        assert_eq!(
            Placeholder::new(400, 300).url(),
            "https://placehold.co/400x300/FF5722/FFFFFF?text=Error"
        );
        assert_eq!(
            Placeholder::square(200).url(),
            "https://placehold.co/200x200/FF5722/FFFFFF?text=Error"
        );
    }

    #[test]
    fn first_failure_swaps_in_placeholder() {
        let mut source = ImageSource::new(COVER, Placeholder::square(300));
        assert!(source.is_armed());
        assert_eq!(source.current().as_str(), COVER);

        assert!(source.fail());
        assert!(!source.is_armed());
        assert_eq!(
            source.current().as_str(),
            "https://placehold.co/300x300/FF5722/FFFFFF?text=Error"
        );
    }

    #[test]
    fn second_failure_leaves_placeholder_alone() {
        let mut source = ImageSource::new(COVER, Placeholder::square(300));
        source.fail();
        let after_first = source.clone();

        assert!(!source.fail());
        assert_eq!(source, after_first);
    }

    #[test]
    fn error_handler_steps_fire_once_without_side_effects() {
        let source = ImageSource::new(COVER, Placeholder::new(400, 300));

        let next = source.after_failure().expect("first error swaps");
        assert_eq!(
            next.current().as_str(),
            "https://placehold.co/400x300/FF5722/FFFFFF?text=Error"
        );
        assert!(!next.is_armed());
        assert_eq!(next.after_failure(), None);
        // the original state is untouched
        assert_eq!(source.current().as_str(), COVER);
    }

    #[test]
    fn new_src_rearms_after_placeholder_was_used() {
        let mut source = ImageSource::new(COVER, Placeholder::square(300));
        source.fail();

        let other = "https://img.youtube.com/vi/AxLpfJRbt7Y/hqdefault.jpg";
        let reseeded = ImageSource::new(other, Placeholder::square(300));
        assert_ne!(reseeded, source);
        assert!(reseeded.is_armed());
        assert_eq!(reseeded.current().as_str(), other);
    }

    #[tokio::test]
    async fn renders_remote_source_before_any_failure() {
        let html = ServerRenderer::<FallbackImage>::with_props(|| FallbackImageProps {
            src: COVER.into(),
            alt: "HUNGER Cover".into(),
            placeholder: Placeholder::square(300),
            class: classes!("w-full"),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains(&format!("src=\"{COVER}\"")), "{html}");
        assert!(html.contains("alt=\"HUNGER Cover\""), "{html}");
        assert!(!html.contains("placehold.co"), "{html}");
    }
}
