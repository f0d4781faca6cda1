use exodash::catalog::query::CatalogQuery;
use exodash::catalog::{DataSource, FALLBACK_NOTICE};
use exodash::env_state::ResponseFormat;
use exodash::exodash::Exodash;
use exodash::exodash_errors::ExodashError;
use exodash::statistics::MethodCount;
use mockito::{Matcher, Server};

mod common;
use common::{mock_config, planet_names, TAP_CSV, TAP_JSON};

fn tap_params(format: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("format".into(), format.into()),
        Matcher::UrlEncoded("maxrows".into(), "50".into()),
        Matcher::Regex("default_flag".into()),
    ])
}

#[tokio::test]
async fn test_remote_load_json() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/TAP/sync")
        .match_query(tap_params("json"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TAP_JSON)
        .create_async()
        .await;

    let exodash = Exodash::new(mock_config(&server.url(), ResponseFormat::Json)).unwrap();
    let load = exodash.load_planets(DataSource::Remote).await;

    mock.assert_async().await;
    assert_eq!(load.source, DataSource::Remote);
    assert_eq!(load.notice, None);
    assert_eq!(planet_names(&load.planets), vec!["TOI-700 d", "WASP-12 b"]);
    assert_eq!(load.planets[0].eccentricity, Some(0.032));
    assert_eq!(load.planets[0].mass, None);
}

#[tokio::test]
async fn test_remote_fetch_csv() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/TAP/sync")
        .match_query(tap_params("csv"))
        .with_status(200)
        .with_header("content-type", "text/csv")
        .with_body(TAP_CSV)
        .create_async()
        .await;

    let exodash = Exodash::new(mock_config(&server.url(), ResponseFormat::Csv)).unwrap();
    let planets = exodash
        .fetch(&CatalogQuery::ByYearRange {
            start: 1990,
            end: 2025,
        })
        .await
        .unwrap();

    assert_eq!(planet_names(&planets), vec!["TOI-700 d", "51 Peg b"]);
    assert_eq!(planets[1].radius, None);
    assert_eq!(planets[1].equilibrium_temperature, Some(1284.0));
}

#[tokio::test]
async fn test_server_error_falls_back_to_sample() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/TAP/sync")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let exodash = Exodash::new(mock_config(&server.url(), ResponseFormat::Json)).unwrap();

    let err = exodash
        .fetch(&CatalogQuery::ConfirmedPlanets)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ExodashError::CatalogStatus {
            status: 500,
            body: "internal error".into()
        }
    );

    let load = exodash.load_planets(DataSource::Remote).await;
    assert_eq!(load.source, DataSource::Sample);
    assert_eq!(load.notice.as_deref(), Some(FALLBACK_NOTICE));
    assert_eq!(load.planets.len(), 16);
}

#[tokio::test]
async fn test_malformed_or_empty_body_falls_back() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/TAP/sync")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>scheduled maintenance</html>")
        .create_async()
        .await;

    let exodash = Exodash::new(mock_config(&server.url(), ResponseFormat::Json)).unwrap();
    let load = exodash.load_planets(DataSource::Remote).await;
    assert!(load.is_fallback());
    assert_eq!(load.source, DataSource::Sample);

    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/TAP/sync")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let exodash = Exodash::new(mock_config(&server.url(), ResponseFormat::Json)).unwrap();
    let load = exodash.load_planets(DataSource::Remote).await;
    assert!(load.is_fallback());
}

#[tokio::test]
async fn test_rejected_query() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/TAP/sync")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "text/xml")
        .with_body(
            r#"<VOTABLE><RESOURCE type="results"><INFO name="QUERY_STATUS" value="ERROR">Table 'nope' not found</INFO></RESOURCE></VOTABLE>"#,
        )
        .create_async()
        .await;

    let exodash = Exodash::new(mock_config(&server.url(), ResponseFormat::Json)).unwrap();
    let err = exodash
        .fetch_planet_details("TOI-700 d")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ExodashError::CatalogQueryError("Table 'nope' not found".into())
    );
}

#[tokio::test]
async fn test_planet_details_and_aggregates() {
    let mut server = Server::new_async().await;
    let _details = server
        .mock("GET", "/TAP/sync")
        .match_query(Matcher::Regex("pl_name".into()))
        .with_status(200)
        .with_body(TAP_JSON)
        .create_async()
        .await;

    let exodash = Exodash::new(mock_config(&server.url(), ResponseFormat::Json)).unwrap();
    let planet = exodash.fetch_planet_details("TOI-700 d").await.unwrap();
    assert_eq!(planet.map(|p| p.name), Some("TOI-700 d".to_string()));

    let mut server = Server::new_async().await;
    let _stats = server
        .mock("GET", "/TAP/sync")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"discoverymethod": "Transit", "count": 4400}, {"discoverymethod": "Imaging", "count": 80}]"#)
        .create_async()
        .await;

    let exodash = Exodash::new(mock_config(&server.url(), ResponseFormat::Json)).unwrap();
    let stats = exodash.discovery_method_stats().await.unwrap();
    assert_eq!(
        stats[1],
        MethodCount {
            method: "Imaging".into(),
            count: 80
        }
    );

    let mut server = Server::new_async().await;
    let _none = server
        .mock("GET", "/TAP/sync")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let exodash = Exodash::new(mock_config(&server.url(), ResponseFormat::Json)).unwrap();
    assert_eq!(exodash.fetch_planet_details("Nowhere b").await.unwrap(), None);
}
