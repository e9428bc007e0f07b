//! Backend location and the app-wide tunables.

use url::Url;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-comic.png";

pub const MAX_QUIZ_QUESTIONS: usize = 5;
pub const LEVEL_THRESHOLD: u32 = 100;
pub const SEED_POINTS: u32 = 350;
pub const GALLERY_PAGE_SIZE: usize = 9;
pub const MIN_SUGGEST_CHARS: usize = 2;
pub const RECENT_TOPICS_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin without a trailing slash.
    pub base_url: String,
    pub placeholder: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_base(option_env!("WIKICOMIC_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

impl ApiConfig {
    pub fn from_base(raw: &str) -> Self {
        let base_url = match Url::parse(raw.trim()) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
                parsed.as_str().trim_end_matches('/').to_string()
            }
            _ => {
                log::warn!("invalid API base url {raw:?}, using {DEFAULT_API_URL}");
                DEFAULT_API_URL.to_string()
            }
        };
        Self {
            base_url,
            placeholder: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// Joins a backend-relative path onto the base url.
    pub fn join(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub fn search_url(&self) -> String {
        self.join("/search")
    }

    pub fn suggest_url(&self, query: &str) -> String {
        let qs = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("query", query)
            .finish();
        format!("{}?{}", self.join("/suggest"), qs)
    }

    pub fn comics_url(&self) -> String {
        self.join("/comics")
    }
}
