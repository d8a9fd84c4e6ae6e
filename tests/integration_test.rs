use anyhow::Result;
use caremap::{
    generate_catalog, parse_catalog, write_catalog, Catalog, GeoPoint, ListingStore, MapConfig,
    SortCriterion, StoreEvent, TileProviderConfig, ViewportController,
};
use std::env;
use std::fs;
use std::time::{Duration, Instant};

#[test]
fn test_write_and_parse_catalog() -> Result<()> {
    let test_file = env::temp_dir().join("test_catalog.json");
    let test_file = test_file.to_str().unwrap();

    // Clean up any existing file
    let _ = fs::remove_file(test_file);

    let center = GeoPoint::new(40.81, -73.96);
    let catalog = generate_catalog(7, 12, center);
    write_catalog(&catalog, test_file)?;

    let parsed = parse_catalog(test_file)?;
    assert_eq!(parsed.len(), 12);
    for (written, read) in catalog.listings.iter().zip(parsed.listings.iter()) {
        assert_eq!(written.name, read.name);
        assert_eq!(written.price, read.price);
        assert_eq!(written.distance_label, read.distance_label);
    }

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_write_and_parse_brotli_catalog() -> Result<()> {
    let test_file = env::temp_dir().join("test_catalog.json.br");
    let test_file = test_file.to_str().unwrap();

    let _ = fs::remove_file(test_file);

    let center = GeoPoint::new(40.81, -73.96);
    let catalog = generate_catalog(7, 8, center);
    write_catalog(&catalog, test_file)?;

    // Compressed output should not be readable as plain JSON
    let raw = fs::read(test_file)?;
    assert!(serde_json::from_slice::<serde_json::Value>(&raw).is_err());

    let parsed = parse_catalog(test_file)?;
    assert_eq!(parsed.len(), 8);

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_parsed_catalog_sorts_end_to_end() -> Result<()> {
    let test_file = env::temp_dir().join("test_catalog_sort.json");
    let test_file = test_file.to_str().unwrap();

    let _ = fs::remove_file(test_file);

    let center = GeoPoint::new(40.81, -73.96);
    write_catalog(&generate_catalog(99, 25, center), test_file)?;
    let catalog = parse_catalog(test_file)?;

    let mut store = ListingStore::new(catalog);

    store.set_sort_criterion(SortCriterion::LowestPrice)?;
    let prices: Vec<i64> = store.ordered_records().map(|(_, r)| r.price).collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));

    store.set_sort_criterion(SortCriterion::ShortestDistance)?;
    let distances: Vec<f64> = store
        .ordered_records()
        .map(|(_, r)| caremap::parse_distance_label(&r.distance_label).unwrap())
        .collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));

    // Ordered view stays a permutation of the catalog under every sort
    let mut seen: Vec<usize> = store.ordered_view().to_vec();
    seen.sort_unstable();
    assert_eq!(seen, (0..25).collect::<Vec<_>>());

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_store_emits_order_events_across_sorts() {
    let mut store = ListingStore::new(Catalog::builtin());
    store.take_events();

    store
        .set_sort_criterion(SortCriterion::ShortestDistance)
        .unwrap();
    store.set_sort_criterion(SortCriterion::LowestPrice).unwrap();

    let events = store.take_events();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[0],
        StoreEvent::OrderChanged {
            criterion: SortCriterion::ShortestDistance
        }
    ));
    assert!(matches!(
        events[1],
        StoreEvent::OrderChanged {
            criterion: SortCriterion::LowestPrice
        }
    ));
    // Drained queue stays empty until the next change
    assert!(store.take_events().is_empty());
}

#[test]
fn test_toggle_burst_yields_single_notification() {
    let mut viewport = ViewportController::with_delay(Duration::from_millis(500));
    let start = Instant::now();

    // Six rapid toggles inside the debounce window
    for i in 0..6 {
        viewport.toggle_sidebar(start + Duration::from_millis(i * 50));
    }
    assert!(viewport.has_pending_notification());

    // Only the deadline of the last toggle counts
    let last_toggle = start + Duration::from_millis(250);
    assert!(!viewport.poll(last_toggle + Duration::from_millis(499)));
    assert!(viewport.poll(last_toggle + Duration::from_millis(500)));

    // Single-shot: nothing further fires
    assert!(!viewport.poll(last_toggle + Duration::from_secs(10)));
    assert!(!viewport.has_pending_notification());
}

#[test]
fn test_map_config_validation() {
    let mut config = MapConfig::default();
    assert!(config.validate().is_ok());

    config.zoom = 25;
    assert!(config.validate().is_err());

    let mut config = MapConfig::default();
    config.tile_provider = TileProviderConfig {
        url_template: "https://tiles.example.com/{z}/{x}/{y}.png?key={token}".to_string(),
        api_token: None,
        attribution: String::new(),
    };
    assert!(config.validate().is_err());

    config.tile_provider.api_token = Some("abc123".to_string());
    assert!(config.validate().is_ok());
}

#[test]
fn test_malformed_distance_keeps_previous_ordering() {
    let json = r#"[
        {"name": "A", "rating": 4.0, "distance": "1.0 miles away", "price": 300,
         "price_type": "Fixed", "location": {"lat": 40.8, "lon": -73.9}, "address": "1 First St"},
        {"name": "B", "rating": 4.0, "distance": "not a distance", "price": 100,
         "price_type": "Fixed", "location": {"lat": 40.8, "lon": -73.9}, "address": "2 Second St"}
    ]"#;
    let catalog = caremap::parse_catalog_str(json).unwrap();
    let mut store = ListingStore::new(catalog);

    let before = store.ordered_view().to_vec();
    let revision = store.revision();
    store.take_events();

    let err = store
        .set_sort_criterion(SortCriterion::ShortestDistance)
        .unwrap_err();
    assert!(err.to_string().contains("not a distance"));

    assert_eq!(store.ordered_view(), before.as_slice());
    assert_eq!(store.revision(), revision);
    assert!(store.take_events().is_empty());
}
