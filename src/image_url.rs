//! Turns whatever image shape the backend produced into one fetchable URL.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::ApiConfig;
use crate::model::{ImageObject, ImageRef};

/// Characters `encodeURI` leaves alone; everything else is escaped.
const URI_PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

fn is_absolute(s: &str) -> bool {
    s.starts_with("http")
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Resolves an image reference to an absolute URL. Never fails: unknown or
/// empty shapes yield the placeholder.
pub fn resolve_image_url(image: Option<&ImageRef>, config: &ApiConfig) -> String {
    match image {
        None => config.placeholder.clone(),
        Some(ImageRef::Object(obj)) => resolve_object(obj, config),
        Some(ImageRef::Path(s)) => resolve_path(s, config),
        Some(ImageRef::Other(value)) => match value.as_str() {
            Some(s) => resolve_path(s, config),
            None => config.placeholder.clone(),
        },
    }
}

fn resolve_object(obj: &ImageObject, config: &ApiConfig) -> String {
    if let Some(field) = non_empty(&obj.url).or_else(|| non_empty(&obj.image_url)) {
        if is_absolute(field) {
            return field.to_string();
        }
        return config.join(field);
    }
    match non_empty(&obj.image) {
        Some(legacy) => resolve_path(legacy, config),
        None => config.placeholder.clone(),
    }
}

fn resolve_path(s: &str, config: &ApiConfig) -> String {
    let s = s.trim();
    if s.is_empty() {
        config.placeholder.clone()
    } else if is_absolute(s) {
        s.to_string()
    } else {
        config.join(&utf8_percent_encode(s, URI_PATH).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PLACEHOLDER_IMAGE;

    fn cfg() -> ApiConfig {
        ApiConfig::from_base("http://localhost:5000")
    }

    fn path(s: &str) -> ImageRef {
        ImageRef::Path(s.to_string())
    }

    #[test]
    fn missing_and_empty_use_placeholder() {
        let c = cfg();
        assert_eq!(resolve_image_url(None, &c), PLACEHOLDER_IMAGE);
        assert_eq!(resolve_image_url(Some(&path("")), &c), PLACEHOLDER_IMAGE);
        assert_eq!(
            resolve_image_url(Some(&ImageRef::Object(ImageObject::default())), &c),
            PLACEHOLDER_IMAGE
        );
        assert_eq!(
            resolve_image_url(Some(&ImageRef::Other(serde_json::json!(42))), &c),
            PLACEHOLDER_IMAGE
        );
        assert_eq!(
            resolve_image_url(Some(&ImageRef::Other(serde_json::Value::Null)), &c),
            PLACEHOLDER_IMAGE
        );
    }

    #[test]
    fn object_fields_are_joined_to_base() {
        let c = cfg();
        let with_url = ImageRef::Object(ImageObject {
            url: Some("/api/images/abc".into()),
            image_url: Some("/ignored".into()),
            ..Default::default()
        });
        assert_eq!(resolve_image_url(Some(&with_url), &c), "http://localhost:5000/api/images/abc");
        let with_image_url = ImageRef::Object(ImageObject {
            image_url: Some("/api/images/def".into()),
            ..Default::default()
        });
        assert_eq!(
            resolve_image_url(Some(&with_image_url), &c),
            "http://localhost:5000/api/images/def"
        );
    }

    #[test]
    fn legacy_image_field_follows_string_rules() {
        let legacy = ImageRef::Object(ImageObject {
            image: Some("/static/comics/Black hole_1.png".into()),
            ..Default::default()
        });
        assert_eq!(
            resolve_image_url(Some(&legacy), &cfg()),
            "http://localhost:5000/static/comics/Black%20hole_1.png"
        );
    }

    #[test]
    fn relative_strings_are_encoded() {
        assert_eq!(
            resolve_image_url(Some(&path("/static/comics/Café au lait (1).png")), &cfg()),
            "http://localhost:5000/static/comics/Caf%C3%A9%20au%20lait%20(1).png"
        );
    }

    #[test]
    fn absolute_urls_are_idempotent() {
        let c = cfg();
        let abs = "https://cdn.example.com/comics/a%20b.png?x=1";
        let once = resolve_image_url(Some(&path(abs)), &c);
        assert_eq!(once, abs);
        let twice = resolve_image_url(Some(&path(&once)), &c);
        assert_eq!(twice, once);

        let relative = resolve_image_url(Some(&path("/static/a b.png")), &c);
        assert_eq!(resolve_image_url(Some(&path(&relative)), &c), relative);
    }

    #[test]
    fn every_shape_yields_non_empty() {
        let c = cfg();
        let shapes = [
            None,
            Some(path("x.png")),
            Some(path("http://h/x.png")),
            Some(ImageRef::Object(ImageObject { url: Some("u".into()), ..Default::default() })),
            Some(ImageRef::Object(ImageObject { image_url: Some("i".into()), ..Default::default() })),
            Some(ImageRef::Other(serde_json::json!({"nested": true}))),
        ];
        for shape in shapes.iter() {
            assert!(!resolve_image_url(shape.as_ref(), &c).is_empty());
        }
    }
}
