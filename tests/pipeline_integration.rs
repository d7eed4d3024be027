//! Integration tests for parsing and the full search pipeline using fixture files.

use price_scout::commands::SearchCommand;
use price_scout::config::Config;
use price_scout::sites::{Parser, ProductRecord, Site, SiteClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EBAY_FIXTURE: &str = include_str!("fixtures/ebay_search.html");
const EBAY_USB_CABLE: &str = include_str!("fixtures/ebay_usb_cable.html");
const WALMART_USB_CABLE: &str = include_str!("fixtures/walmart_usb_cable.html");

#[test]
fn test_parse_ebay_fixture() {
    let records = Parser::new(Site::Ebay).parse_search(EBAY_FIXTURE, 5);

    // Five fragments, two of them without a price
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.source == Site::Ebay));

    assert_eq!(records[0].name, "Logitech M185 Wireless Mouse");
    assert_eq!(records[0].price, "$12.99");
    assert_eq!(records[0].rating, "1,204");

    assert_eq!(records[1].name, "New ListingRazer Basilisk X HyperSpeed");
    assert_eq!(records[1].price, "$29.50to$34.00");
    assert_eq!(records[1].rating, "N/A");

    assert_eq!(records[2].name, "Microsoft Bluetooth Mouse");
    assert_eq!(records[2].rating, "87");
}

#[test]
fn test_parse_ebay_fixture_truncated() {
    let records = Parser::new(Site::Ebay).parse_search(EBAY_FIXTURE, 2);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Logitech M185 Wireless Mouse");
}

#[test]
fn test_parse_walmart_fixture() {
    let records = Parser::new(Site::Walmart).parse_search(WALMART_USB_CABLE, 5);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "onn. 6' USB-C to USB-C Cable, Black");
    assert_eq!(records[0].price, "current price $7.88$7.88");
    assert_eq!(records[0].rating, "4.6");
    assert_eq!(records[0].source, Site::Walmart);
}

async fn mount_fixtures(server: &MockServer, ebay: ResponseTemplate, walmart: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/sch/i.html"))
        .and(query_param("_nkw", "usb cable"))
        .respond_with(ebay)
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "usb cable"))
        .respond_with(walmart)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_usb_cable_scenario() {
    let server = MockServer::start().await;
    mount_fixtures(
        &server,
        ResponseTemplate::new(200).set_body_string(EBAY_USB_CABLE),
        ResponseTemplate::new(200).set_body_string(WALMART_USB_CABLE),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let config = Config { delay_ms: 0, output_dir: dir.path().to_path_buf(), ..Config::default() };
    let client = SiteClient::with_base_url(&config, Some(server.uri())).await.unwrap();
    let cmd = SearchCommand::new(config);
    let mut out = Vec::new();

    let path = cmd.execute_with_client(&client, "usb cable", &mut out).await.unwrap().unwrap();
    assert_eq!(path.file_name().unwrap(), "usb_cable_products.csv");

    let printed = String::from_utf8(out).unwrap();
    let numbered: Vec<_> =
        printed.lines().filter(|l| l.starts_with("1. ") || l.starts_with("2. ")).collect();
    assert_eq!(
        numbered,
        vec![
            "1. [eBay] Anker USB-C to USB-C Cable 6ft | $9.99 | Rating: 452",
            "2. [Walmart] onn. 6' USB-C to USB-C Cable, Black | current price $7.88$7.88 | Rating: 4.6",
        ]
    );
    assert!(!printed.contains("3. "));

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<ProductRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].source, Site::Ebay);
    assert_eq!(rows[1].name, "onn. 6' USB-C to USB-C Cable, Black");
}

#[tokio::test]
async fn test_both_sources_down() {
    let server = MockServer::start().await;
    mount_fixtures(&server, ResponseTemplate::new(503), ResponseTemplate::new(500)).await;

    let dir = tempfile::tempdir().unwrap();
    let config = Config { delay_ms: 0, output_dir: dir.path().to_path_buf(), ..Config::default() };
    let client = SiteClient::with_base_url(&config, Some(server.uri())).await.unwrap();
    let cmd = SearchCommand::new(config);
    let mut out = Vec::new();

    let result = cmd.execute_with_client(&client, "usb cable", &mut out).await.unwrap();
    assert!(result.is_none());
    assert!(String::from_utf8(out).unwrap().contains("No products found"));
    assert!(!dir.path().join("usb_cable_products.csv").exists());
}

#[tokio::test]
async fn test_one_source_down() {
    let server = MockServer::start().await;
    mount_fixtures(
        &server,
        ResponseTemplate::new(403),
        ResponseTemplate::new(200).set_body_string(WALMART_USB_CABLE),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let config = Config { delay_ms: 0, output_dir: dir.path().to_path_buf(), ..Config::default() };
    let client = SiteClient::with_base_url(&config, Some(server.uri())).await.unwrap();
    let cmd = SearchCommand::new(config);

    let records =
        cmd.collect(&client, &price_scout::SearchTerm::parse("usb cable").unwrap()).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].source, Site::Walmart);
}
