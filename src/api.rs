//! HTTP calls to the comic backend.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::AppError;
use crate::model::{Comic, ComicsResponse, Length, SearchResponse, StyleId, WikiSummary};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON: &str = "application/json";

pub fn search_form(topic: &str, style: StyleId, length: Length) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("query", topic.trim())
        .append_pair("style", style.as_str())
        .append_pair("length", length.as_str())
        .finish()
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, AppError> {
    if !resp.ok() {
        return Err(AppError::NetworkFailure(format!(
            "{} returned HTTP {}",
            resp.url(),
            resp.status()
        )));
    }
    let text = resp.text().await?;
    Ok(serde_json::from_str(&text)?)
}

/// `POST /search`: generates a comic for `topic`.
pub async fn generate_comic(
    config: &ApiConfig,
    topic: &str,
    style: StyleId,
    length: Length,
) -> Result<(WikiSummary, Comic), AppError> {
    let url = config.search_url();
    log::debug!("POST {url} topic={topic:?} style={} length={}", style.as_str(), length.as_str());
    let resp = Request::post(&url)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .header("Accept", JSON)
        .body(search_form(topic, style, length))?
        .send()
        .await?;
    let payload: SearchResponse = read_json(resp).await?;
    into_generated(payload, style)
}

fn into_generated(payload: SearchResponse, style: StyleId) -> Result<(WikiSummary, Comic), AppError> {
    if let Some(msg) = payload.error.as_deref().filter(|m| !m.is_empty()) {
        return Err(AppError::Backend(msg.to_string()));
    }
    match (payload.result.clone(), payload.to_comic(style)) {
        (Some(summary), Some(comic)) => Ok((summary, comic)),
        _ => Err(AppError::InvalidFormat("search response without result".into())),
    }
}

/// `GET /suggest?query=...`
pub async fn suggest(config: &ApiConfig, query: &str) -> Result<Vec<String>, AppError> {
    let resp = Request::get(&config.suggest_url(query)).send().await?;
    read_json(resp).await
}

/// `GET /comics`
pub async fn list_comics(config: &ApiConfig) -> Result<Vec<Comic>, AppError> {
    let url = config.comics_url();
    log::debug!("GET {url}");
    let resp = Request::get(&url).header("Accept", JSON).send().await?;
    let listing: ComicsResponse = read_json(resp).await?;
    Ok(listing.comics)
}

/// Looks a comic up by title in the `/comics` listing.
pub async fn fetch_comic(config: &ApiConfig, title: &str) -> Result<Comic, AppError> {
    let comics = list_comics(config).await?;
    pick_comic(comics, title)
}

fn pick_comic(comics: Vec<Comic>, title: &str) -> Result<Comic, AppError> {
    comics
        .into_iter()
        .find(|c| c.title == title)
        .ok_or_else(|| AppError::NotFound(title.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_body_is_urlencoded() {
        assert_eq!(
            search_form(" Black hole & stars ", StyleId::Noir, Length::Long),
            "query=Black+hole+%26+stars&style=Noir&length=long"
        );
    }

    #[test]
    fn backend_error_string_is_reported() {
        let payload: SearchResponse =
            serde_json::from_str(r#"{"result":null,"error":"Page not found"}"#).unwrap();
        assert_eq!(
            into_generated(payload, StyleId::Manga),
            Err(AppError::Backend("Page not found".into()))
        );
    }

    #[test]
    fn missing_result_is_invalid_format() {
        let payload: SearchResponse = serde_json::from_str(r#"{"scenes":[]}"#).unwrap();
        assert!(matches!(
            into_generated(payload, StyleId::Manga),
            Err(AppError::InvalidFormat(_))
        ));
    }

    #[test]
    fn generated_payload_becomes_comic() {
        let payload: SearchResponse = serde_json::from_str(
            r#"{"result":{"title":"Moon","summary":"Natural satellite"},"error":"",
                "scenes":[{"dialogue":"The Moon is bright"}],"images":["/static/moon_1.png"]}"#,
        )
        .unwrap();
        let (summary, comic) = into_generated(payload, StyleId::Cartoon).unwrap();
        assert_eq!(summary.title, "Moon");
        assert_eq!(comic.scenes.len(), 1);
        assert_eq!(comic.style.as_deref(), Some("Cartoon"));
    }

    #[test]
    fn lookup_by_exact_title() {
        let comics = vec![
            Comic { title: "Moon".into(), ..Default::default() },
            Comic { title: "Mars".into(), ..Default::default() },
        ];
        assert_eq!(pick_comic(comics.clone(), "Mars").map(|c| c.title), Ok("Mars".into()));
        assert_eq!(
            pick_comic(comics, "moon"),
            Err(AppError::NotFound("moon".into()))
        );
    }
}
