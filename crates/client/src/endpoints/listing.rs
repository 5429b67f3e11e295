//! Continuation-token listing endpoints.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::AuthStrategy;
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{ItemFilter, Page, Source};

/// Fetch one page of a listing.
///
/// Sends `repository`, the filter's search parameters when `source` is
/// [`Source::Search`], and `continuationToken` when a token is given.
/// Items are returned as the server sent them, without the local re-check.
pub async fn fetch_page<F: ItemFilter>(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    source: Source,
    filter: &F,
    continuation_token: Option<&str>,
) -> Result<Page<F::Item>> {
    let endpoint = F::endpoint(source);
    let url = format!("{}{}", base_url, endpoint);

    let mut query_params: Vec<(&str, String)> =
        vec![("repository", filter.repository().to_string())];
    if source == Source::Search {
        query_params.extend(filter.search_params());
    }
    if let Some(token) = continuation_token {
        query_params.push(("continuationToken", token.to_string()));
    }

    debug!(endpoint, has_token = continuation_token.is_some(), "Fetching page");

    let builder = auth.apply(client.get(&url).query(&query_params));
    let response = send_request(builder).await?;
    let body = response.text().await.map_err(ClientError::from_transport)?;

    parse_page(&body)
}

/// Parse a listing body, requiring an `items` array.
fn parse_page<T: DeserializeOwned>(body: &str) -> Result<Page<T>> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ClientError::InvalidResponse(format!("body is not JSON: {}", e)))?;

    match value.get("items") {
        Some(serde_json::Value::Array(_)) => {}
        Some(_) => {
            return Err(ClientError::InvalidResponse(
                "\"items\" is not an array".to_string(),
            ));
        }
        None => {
            return Err(ClientError::InvalidResponse(
                "response lacks an \"items\" field".to_string(),
            ));
        }
    }

    serde_json::from_value(value)
        .map_err(|e| ClientError::InvalidResponse(format!("malformed page: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Asset, Component};

    #[test]
    fn test_parse_page_requires_items() {
        let result = parse_page::<Asset>(r#"{"continuationToken": "abc"}"#);
        assert!(matches!(result, Err(ClientError::InvalidResponse(ref m)) if m.contains("items")));
    }

    #[test]
    fn test_parse_page_rejects_non_array_items() {
        let result = parse_page::<Asset>(r#"{"items": {"path": "a"}}"#);
        assert!(matches!(result, Err(ClientError::InvalidResponse(_))));
    }

    #[test]
    fn test_parse_page_rejects_non_json() {
        let result = parse_page::<Asset>("<html>login</html>");
        assert!(matches!(result, Err(ClientError::InvalidResponse(ref m)) if m.contains("not JSON")));
    }

    #[test]
    fn test_parse_page_rejects_item_without_identifier() {
        let result = parse_page::<Asset>(r#"{"items": [{"id": "no-path"}]}"#);
        assert!(matches!(result, Err(ClientError::InvalidResponse(ref m)) if m.contains("malformed")));
    }

    #[test]
    fn test_parse_page_keeps_items_with_null_or_odd_fields() {
        let page = parse_page::<Asset>(
            r#"{"items": [
                {"path": "a", "checksum": null},
                {"path": "b", "format": 3, "contentType": {"mime": "text/plain"}},
                {"path": "c", "checksum": {"sha256": "ff"}}
            ], "continuationToken": null}"#,
        )
        .unwrap();

        let paths: Vec<_> = page.items.iter().map(|a| a.path.as_str()).collect();
        assert_eq!(paths, vec!["a", "b", "c"]);
        assert_eq!(page.items[0].sha256(), None);
        assert_eq!(page.items[1].format.as_deref(), Some("3"));
        assert_eq!(page.items[1].content_type, None);
        assert_eq!(page.items[2].sha256(), Some("ff"));
    }

    #[test]
    fn test_parse_page_keeps_component_with_null_assets() {
        let page = parse_page::<Component>(
            r#"{"items": [
                {"name": "app", "assets": null},
                {"name": "lib", "assets": [{"id": "no-path"}, {"path": "lib.jar"}]}
            ]}"#,
        )
        .unwrap();

        assert_eq!(page.items.len(), 2);
        assert!(page.items[0].assets.is_empty());
        assert_eq!(page.items[1].assets.len(), 1);
        assert_eq!(page.items[1].assets[0].path, "lib.jar");
    }

    #[test]
    fn test_parse_page_ok() {
        let page = parse_page::<Asset>(
            r#"{"items": [{"path": "a"}, {"path": "b"}], "continuationToken": "t1"}"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_token(), Some("t1"));
    }
}
