//! Wire types for the comic backend and the static selector catalogues.

use serde::{Deserialize, Deserializer, Serialize};

/// Any backend representation of an image location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    /// Bare path (`/static/comics/x.png`) or absolute URL.
    Path(String),
    /// MongoDB-style wrapper, or the legacy `{image, dialogue}` entries of `/search`.
    Object(ImageObject),
    /// Anything else the backend might send.
    Other(serde_json::Value),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageObject {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComicStatus {
    Pending,
    Failed,
    /// Also what unknown statuses deserialize to.
    #[default]
    #[serde(other)]
    Completed,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default, rename = "scene_number")]
    pub number: Option<u32>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub dialogue: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
}

impl Scene {
    /// 1-based scene number, falling back to the scene's position.
    pub fn number_or(&self, index: usize) -> u32 {
        match self.number {
            Some(n) if n > 0 => n,
            _ => index as u32 + 1,
        }
    }

    /// The scene's image, preferring the MongoDB `image_url` field.
    pub fn image_ref(&self) -> Option<ImageRef> {
        match &self.image_url {
            Some(u) if !u.is_empty() => Some(ImageRef::Object(ImageObject {
                image_url: Some(u.clone()),
                ..Default::default()
            })),
            _ => self.image.clone(),
        }
    }

    /// Non-empty trimmed dialogue lines.
    pub fn dialogue_lines(&self) -> impl Iterator<Item = &str> {
        self.dialogue
            .as_deref()
            .unwrap_or("")
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Comic {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scenes: Vec<Scene>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<ImageRef>,
    #[serde(default)]
    pub status: ComicStatus,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, alias = "comicStyle")]
    pub style: Option<String>,
    #[serde(default)]
    pub storyline: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl Comic {
    /// Cover image: first listed image, else the first scene's image.
    pub fn cover(&self) -> Option<ImageRef> {
        self.images
            .first()
            .cloned()
            .or_else(|| self.scenes.first().and_then(Scene::image_ref))
    }

    /// Flipbook pages: one per scene, or per image for image-only payloads.
    pub fn page_count(&self) -> usize {
        self.scenes.len().max(self.images.len())
    }

    /// Image for the scene at `index`: the scene's own, else the image list entry.
    pub fn scene_image(&self, index: usize) -> Option<ImageRef> {
        self.scenes
            .get(index)
            .and_then(Scene::image_ref)
            .or_else(|| self.images.get(index).cloned())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComicsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub comics: Vec<Comic>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WikiSummary {
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of `POST /search`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub result: Option<WikiSummary>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub storyline: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scenes: Vec<Scene>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<ImageRef>,
}

impl SearchResponse {
    /// Folds the payload into a `Comic`, pairing scenes with images by position.
    pub fn to_comic(&self, style: StyleId) -> Option<Comic> {
        let result = self.result.as_ref()?;
        let scenes = self
            .scenes
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let mut scene = s.clone();
                if scene.image_ref().is_none() {
                    scene.image = self.images.get(i).cloned();
                }
                scene
            })
            .collect();
        Some(Comic {
            title: result.title.clone(),
            scenes,
            images: self.images.clone(),
            status: ComicStatus::Completed,
            created_at: None,
            style: Some(style.as_str().to_string()),
            storyline: self.storyline.clone(),
            summary: result.summary.clone(),
        })
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------- Selector catalogues -----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleId {
    Manga,
    Western,
    Noir,
    Indie,
    Cartoon,
    Minimalist,
}

impl StyleId {
    /// Tag sent to the backend as `style`.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleId::Manga => "Manga",
            StyleId::Western => "Western",
            StyleId::Noir => "Noir",
            StyleId::Indie => "Indie",
            StyleId::Cartoon => "Cartoon",
            StyleId::Minimalist => "Minimalist",
        }
    }

    pub fn option(self) -> &'static StyleOption {
        STYLE_OPTIONS
            .iter()
            .find(|o| o.id == self)
            .unwrap_or(&STYLE_OPTIONS[0])
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StyleOption {
    pub id: StyleId,
    pub name: &'static str,
    pub color: &'static str,
    pub banner_color: &'static str,
    pub description: &'static str,
    /// Session level needed before the style can be picked.
    pub level: u32,
}

impl StyleOption {
    pub fn locked_at(&self, level: u32) -> bool {
        level < self.level
    }
}

pub static STYLE_OPTIONS: [StyleOption; 6] = [
    StyleOption { id: StyleId::Manga, name: "MANGA MADNESS", color: "#536DFE", banner_color: "#3D5AFE", description: "Big eyes & epic expressions!", level: 1 },
    StyleOption { id: StyleId::Western, name: "RETRO COMICS", color: "#00BCD4", banner_color: "#0097A7", description: "Classic comic book style", level: 2 },
    StyleOption { id: StyleId::Noir, name: "DARK NOIR", color: "#263238", banner_color: "#1C2429", description: "Shadows & mystery vibes", level: 3 },
    StyleOption { id: StyleId::Indie, name: "INDIE VIBES", color: "#9C27B0", banner_color: "#7B1FA2", description: "Unique artistic flair", level: 3 },
    StyleOption { id: StyleId::Cartoon, name: "WACKY TOONS", color: "#8BC34A", banner_color: "#689F38", description: "Fun & playful animation style", level: 1 },
    StyleOption { id: StyleId::Minimalist, name: "SLEEK STYLE", color: "#607D8B", banner_color: "#455A64", description: "Clean & minimalist design", level: 2 },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    pub const ALL: [Length; 3] = [Length::Short, Length::Medium, Length::Long];

    pub fn as_str(self) -> &'static str {
        match self {
            Length::Short => "short",
            Length::Medium => "medium",
            Length::Long => "long",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Length::Short => "Short",
            Length::Medium => "Medium",
            Length::Long => "Long",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Complexity {
    Elementary,
    HighSchool,
    College,
}

impl Complexity {
    /// Maps the 0-100 slider value onto a reading level.
    pub fn from_slider(value: u8) -> Self {
        match value {
            0..=32 => Complexity::Elementary,
            33..=65 => Complexity::HighSchool,
            _ => Complexity::College,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Complexity::Elementary => "Elementary",
            Complexity::HighSchool => "High School",
            Complexity::College => "College",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

pub static LANGUAGES: [Language; 6] = [
    Language { code: "en", name: "English", flag: "🇬🇧" },
    Language { code: "es", name: "Español", flag: "🇪🇸" },
    Language { code: "fr", name: "Français", flag: "🇫🇷" },
    Language { code: "de", name: "Deutsch", flag: "🇩🇪" },
    Language { code: "hi", name: "हिन्दी", flag: "🇮🇳" },
    Language { code: "ja", name: "日本語", flag: "🇯🇵" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comics_listing_accepts_mixed_image_shapes() {
        let raw = r#"{"comics":[{"title":"Cats","style":"Manga","scenes":[
            {"scene_number":1,"image_url":"/api/images/1","dialogue":"Cats are mammals"},
            {"image":"/static/comics/cat 2.png","dialogue":null}],
            "images":[{"id":"1","url":"/api/images/1","scene_number":1},"/static/x.png",42],
            "created_at":"Tue, 15 Oct 2024 10:00:00 GMT","status":"archived"}]}"#;
        let parsed: ComicsResponse = serde_json::from_str(raw).unwrap();
        let comic = &parsed.comics[0];
        assert_eq!(comic.style.as_deref(), Some("Manga"));
        assert_eq!(comic.status, ComicStatus::Completed);
        assert!(matches!(comic.images[0], ImageRef::Object(_)));
        assert!(matches!(comic.images[1], ImageRef::Path(_)));
        assert!(matches!(comic.images[2], ImageRef::Other(_)));
        assert_eq!(comic.scenes[1].number_or(1), 2);
        assert_eq!(comic.page_count(), 3);
        assert_eq!(comic.scenes[1].dialogue_lines().count(), 0);
        assert_eq!(
            comic.scenes[0].image_ref(),
            Some(ImageRef::Object(ImageObject {
                image_url: Some("/api/images/1".into()),
                ..Default::default()
            }))
        );
    }

    #[test]
    fn status_strings() {
        let parse = |raw: &str| serde_json::from_str::<ComicStatus>(raw).unwrap();
        assert_eq!(parse(r#""pending""#), ComicStatus::Pending);
        assert_eq!(parse(r#""failed""#), ComicStatus::Failed);
        assert_eq!(parse(r#""completed""#), ComicStatus::Completed);
        assert_eq!(parse(r#""archived""#), ComicStatus::Completed);
        assert_eq!(serde_json::to_string(&ComicStatus::Failed).unwrap(), r#""failed""#);
    }

    #[test]
    fn null_collections_become_empty() {
        let parsed: ComicsResponse = serde_json::from_str(r#"{"comics":null}"#).unwrap();
        assert!(parsed.comics.is_empty());
        let c: Comic = serde_json::from_str(r#"{"title":"X","scenes":null}"#).unwrap();
        assert!(c.scenes.is_empty());
        assert_eq!(c.cover(), None);
    }

    #[test]
    fn search_payload_pairs_scenes_with_images() {
        let raw = r#"{"result":{"title":"Cats","summary":"Small felines","url":"https://en.wikipedia.org/wiki/Cat"},
            "error":null,"storyline":"Once...",
            "scenes":[{"prompt":"a cat","dialogue":"Cats are mammals"},{"prompt":"two cats","dialogue":"They purr"}],
            "images":[{"image":"/static/comics/Cats_1.png","dialogue":"Cats are mammals"}]}"#;
        let parsed: SearchResponse = serde_json::from_str(raw).unwrap();
        let comic = parsed.to_comic(StyleId::Noir).unwrap();
        assert_eq!(comic.title, "Cats");
        assert_eq!(comic.style.as_deref(), Some("Noir"));
        assert!(comic.scenes[0].image.is_some());
        assert!(comic.scenes[1].image.is_none());
        assert!(comic.scene_image(0).is_some());
    }

    #[test]
    fn search_error_payload_has_no_comic() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"result":null,"error":"Page not found","scenes":[],"images":[]}"#).unwrap();
        assert_eq!(parsed.to_comic(StyleId::Manga), None);
        assert_eq!(parsed.error.as_deref(), Some("Page not found"));
    }

    #[test]
    fn complexity_bands() {
        assert_eq!(Complexity::from_slider(0), Complexity::Elementary);
        assert_eq!(Complexity::from_slider(32), Complexity::Elementary);
        assert_eq!(Complexity::from_slider(33), Complexity::HighSchool);
        assert_eq!(Complexity::from_slider(66), Complexity::College);
        assert_eq!(Complexity::from_slider(100), Complexity::College);
    }

    #[test]
    fn style_locks_by_level() {
        let noir = StyleId::Noir.option();
        assert!(noir.locked_at(2));
        assert!(!noir.locked_at(3));
        assert_eq!(StyleId::Western.as_str(), "Western");
    }
}
