//! Single-item lookup tests.
//!
//! # Invariants
//! - A lookup stops requesting pages once a match is found
//! - Exhausting every page without a match yields `Lookup::NotFound`, not an error

mod common;

use common::*;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};

#[tokio::test]
async fn test_find_asset_by_path_stops_after_matching_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/service/rest/v1/assets"))
        .and(query_param_is_missing("continuationToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("assets/page_1.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    // The second page must never be requested.
    Mock::given(method("GET"))
        .and(path("/service/rest/v1/assets"))
        .and(query_param("continuationToken", "88491cd1d185dd1393d2b81b2e9b5c55"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("assets/page_2.json")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let lookup = client
        .find_asset_by_path("raw-hosted", "bin/tool-1.0.tar.gz")
        .await
        .unwrap();

    match lookup {
        Lookup::Found(asset) => {
            assert_eq!(asset.path, "bin/tool-1.0.tar.gz");
            assert_eq!(
                asset.sha256(),
                Some("0d5f2c4e3a8d6b3b2e4a1c7f9e8d7c6b5a4f3e2d1c0b9a8f7e6d5c4b3a2f1e0d")
            );
        }
        Lookup::NotFound => panic!("Expected asset to be found"),
    }
}

#[tokio::test]
async fn test_find_asset_by_path_on_later_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/service/rest/v1/assets"))
        .and(query_param_is_missing("continuationToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("assets/page_1.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/service/rest/v1/assets"))
        .and(query_param("continuationToken", "88491cd1d185dd1393d2b81b2e9b5c55"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("assets/page_2.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let lookup = client
        .find_asset_by_path("raw-hosted", "bin/tool-1.1.tar.gz")
        .await
        .unwrap();

    assert!(lookup.is_found());
}

#[tokio::test]
async fn test_find_asset_not_found_after_all_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/service/rest/v1/assets"))
        .and(query_param_is_missing("continuationToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("assets/page_1.json")))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/service/rest/v1/assets"))
        .and(query_param("continuationToken", "88491cd1d185dd1393d2b81b2e9b5c55"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("assets/page_2.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let lookup = client
        .find_asset_by_path("raw-hosted", "does/not/exist.bin")
        .await
        .unwrap();

    assert_eq!(lookup, Lookup::NotFound);
}

#[tokio::test]
async fn test_find_component_skips_near_misses() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/service/rest/v1/search"))
        .and(query_param("name", "app"))
        .and(query_param("version", "1.0.0-rc1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("components/search_page.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let component = client
        .find_component("maven-releases", Some("org.example"), "app", Some("1.0.0-rc1"))
        .await
        .unwrap()
        .into_option()
        .expect("component should be found");

    assert_eq!(component.version.as_deref(), Some("1.0.0-rc1"));
}

#[tokio::test]
async fn test_find_component_without_group_or_version() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/service/rest/v1/search"))
        .and(query_param("name", "app-cli"))
        .and(query_param_is_missing("group"))
        .and(query_param_is_missing("version"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("components/search_page.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let lookup = client
        .find_component("maven-releases", None, "app-cli", None)
        .await
        .unwrap();

    assert!(matches!(lookup, Lookup::Found(ref c) if c.name == "app-cli"));
}
