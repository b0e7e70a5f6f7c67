//! End-to-end rendering against a canned Census Reporter response.

use std::path::PathBuf;

use serde_json::json;

use census_curate::client::MockRequest;
use census_curate::{CurateError, MockSource, ParamsV1, RenderConfig, Renderer, Sumlevel, Topic};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn places_renderer() -> Renderer<MockSource> {
    let source = MockSource::from_file(fixture("b25003_places_ca.json")).expect("fixture loads");
    Renderer::new(source)
}

#[test]
fn test_render_v0_payload() {
    let renderer = places_renderer();
    let output = renderer
        .render(json!({
            "topic": 10,
            "sumlevel": 2,
            "states-for-counties": 2,
            "states-for-places": 4,
            "states-for-metro-areas": 23,
        }))
        .unwrap();

    assert_eq!(
        renderer.source().requests(),
        vec![MockRequest {
            tables: vec!["B25003".to_string()],
            geo_filter: "160|04000US06".to_string(),
            release: "latest".to_string(),
        }]
    );

    assert_eq!(output.request.topic, Topic::OwnershipOfOccupiedUnits);
    assert_eq!(output.request.release, "acs2019_5yr");

    let table = output.table;
    assert_eq!(table.labels, vec!["Owner Occupied", "Renter Occupied"]);
    // California is the parent and is dropped.
    let names: Vec<_> = table.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Bakersfield, CA", "Los Angeles, CA"]);
    assert_eq!(table.value("16000US0644000", "Owner Occupied"), Some(503163.0));
    assert_eq!(table.value("16000US0603526", "Renter Occupied"), Some(51909.0));
}

#[test]
fn test_render_v1_topic_name() {
    let renderer = places_renderer();
    let params = ParamsV1::new("ownership_of_occupied_units", Sumlevel::Places).with_statecode("ca");
    let output = renderer.render_params(&params).unwrap();
    assert_eq!(output.table.rows.len(), 2);
}

#[test]
fn test_render_is_deterministic() {
    let renderer = places_renderer();
    let params = json!({"topic": "b25003", "sumlevel": "places", "statecode": "ca"});

    let first = renderer.render(params.clone()).unwrap().table;
    let second = renderer.render(params).unwrap().table;

    let mut a = Vec::new();
    let mut b = Vec::new();
    first.write_delimited(&mut a, b'\t').unwrap();
    second.write_delimited(&mut b, b'\t').unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_render_unknown_state() {
    let err = places_renderer()
        .render(json!({"topic": "b25003", "sumlevel": "places", "statecode": "zz"}))
        .unwrap_err();
    assert!(matches!(err, CurateError::UnknownStateCode(ref c) if c == "zz"));
}

#[test]
fn test_render_unknown_topic() {
    let err = places_renderer()
        .render(json!({"topic": "b99999", "sumlevel": "all_states"}))
        .unwrap_err();
    assert!(matches!(err, CurateError::UnknownTopic(_)));
}

#[test]
fn test_render_with_stale_rules_fails() {
    // The fixture serves B25003; curating it as B25002 finds none of the
    // rule's columns in the declared column space.
    let err = places_renderer()
        .render(json!({"topic": "occupied_vs_vacant_housing", "sumlevel": "places", "statecode": "ca"}))
        .unwrap_err();
    assert!(matches!(
        err,
        CurateError::MissingColumn { ref column, .. } if column == "B25002002"
    ));
}

#[test]
fn test_render_raw_with_labels_and_moe() {
    let source = MockSource::from_file(fixture("b25003_places_ca.json")).unwrap();
    let renderer = Renderer::with_config(source, RenderConfig::default().with_moe(true));
    let params = ParamsV1::new("b25003", Sumlevel::Places).with_statecode("ca");

    let raw = renderer.render_raw(&params).unwrap();

    let codes: Vec<_> = raw.labels.keys().map(String::as_str).collect();
    assert_eq!(
        codes,
        vec![
            "B25003001",
            "B25003001_moe",
            "B25003002",
            "B25003002_moe",
            "B25003003",
            "B25003003_moe",
        ]
    );
    assert_eq!(raw.labels["B25003002"], "Owner occupied");
    assert_eq!(raw.labels["B25003002_moe"], "Owner occupied (margin of error)");
    // Raw output keeps the parent geography.
    assert_eq!(raw.table.len(), 3);
    assert_eq!(raw.table.get("16000US0644000", "B25003003_moe"), Some(5714.0));
}

#[test]
fn test_missing_fixture_is_io_error() {
    let err = MockSource::from_file(fixture("does_not_exist.json")).err().unwrap();
    assert!(matches!(err, CurateError::Io { .. }));
}
