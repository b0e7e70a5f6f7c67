//! Property-based tests for migration and curation.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p census-curate --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p census-curate --test property_tests
//! ```

use proptest::prelude::*;
use serde_json::json;

use census_curate::legacy::{STATE_MENU, SUMLEVEL_MENU, TOPIC_MENU};
use census_curate::{
    CurateError, ParamsV1, RawRow, RawTable, SchemaVersion, Sumlevel, Topic, curate,
    migrate_params,
};

// =============================================================================
// Test Strategies
// =============================================================================

fn topic() -> impl Strategy<Value = Topic> {
    (0..Topic::ALL.len()).prop_map(|i| Topic::ALL[i])
}

fn sumlevel() -> impl Strategy<Value = Sumlevel> {
    (0..Sumlevel::ALL.len()).prop_map(|i| Sumlevel::ALL[i])
}

/// Whole-number counts, as ACS estimates are.
fn count() -> impl Strategy<Value = f64> {
    (0u32..50_000_000).prop_map(f64::from)
}

/// A geography row holding every column of `topic`'s source table that the
/// rules reference, with arbitrary counts.
fn full_row(topic: Topic) -> impl Strategy<Value = RawRow> {
    let codes: Vec<&'static str> = topic
        .rules()
        .iter()
        .flat_map(|r| r.columns.iter().copied())
        .collect();
    prop::collection::vec(count(), codes.len()).prop_map(move |values| {
        codes
            .iter()
            .zip(values)
            .fold(RawRow::new("Somewhere"), |row, (code, v)| row.with_value(*code, v))
    })
}

fn topic_and_table() -> impl Strategy<Value = (Topic, RawTable)> {
    topic().prop_flat_map(|t| {
        prop::collection::vec(full_row(t), 2..6).prop_map(move |rows| {
            let table = rows.into_iter().enumerate().fold(RawTable::new(), |table, (i, row)| {
                table.with_row(format!("05000US01{:03}", i), row)
            });
            (t, table)
        })
    })
}

// =============================================================================
// Migration
// =============================================================================

proptest! {
    #[test]
    fn v1_payloads_are_fixed_points(
        t in topic(),
        level in sumlevel(),
        state in 0..STATE_MENU.len(),
    ) {
        let v1 = serde_json::to_value(
            ParamsV1::new(t.key(), level).with_statecode(STATE_MENU[state]),
        ).unwrap();
        prop_assert_eq!(migrate_params(v1.clone()).unwrap(), v1);
    }

    #[test]
    fn in_range_v0_always_migrates(
        topic_index in 0..TOPIC_MENU.len(),
        level_index in 0..SUMLEVEL_MENU.len(),
        counties in 0..STATE_MENU.len(),
        places in 0..STATE_MENU.len(),
        metros in 0..STATE_MENU.len(),
    ) {
        let migrated = migrate_params(json!({
            "topic": topic_index,
            "sumlevel": level_index,
            "states-for-counties": counties,
            "states-for-places": places,
            "states-for-metro-areas": metros,
        })).unwrap();

        prop_assert_eq!(SchemaVersion::detect(&migrated), SchemaVersion::V1);
        prop_assert_eq!(migrate_params(migrated.clone()).unwrap(), migrated.clone());

        let expected_state = match level_index {
            0 | 1 => counties,
            2 => places,
            _ => metros,
        };
        prop_assert_eq!(&migrated["statecode"], STATE_MENU[expected_state]);
        prop_assert_eq!(&migrated["sumlevel"], SUMLEVEL_MENU[level_index]);
        prop_assert_eq!(
            migrated["topic"].as_str().unwrap(),
            TOPIC_MENU[topic_index].to_lowercase()
        );

        let params = ParamsV1::from_value(migrated).unwrap();
        prop_assert!(params.resolve_topic().is_ok());
        prop_assert!(params.geo_filter().is_ok());
    }

    #[test]
    fn out_of_range_topic_index_fails(topic_index in 20i64..100_000) {
        let err = migrate_params(json!({
            "topic": topic_index,
            "sumlevel": 0,
            "states-for-counties": 0,
            "states-for-places": 0,
            "states-for-metro-areas": 0,
        })).unwrap_err();
        let is_invalid_migration = matches!(err, CurateError::InvalidMigration { field: "topic", .. });
        prop_assert!(is_invalid_migration);
    }
}

// =============================================================================
// Curation
// =============================================================================

proptest! {
    #[test]
    fn curated_values_are_exact_sums((t, raw) in topic_and_table()) {
        let curated = curate(&raw, t).unwrap();
        prop_assert_eq!(curated.rows.len(), raw.len() - 1);

        for row in &curated.rows {
            let source = raw.row(&row.geoid).unwrap();
            prop_assert_eq!(row.values.len(), t.rules().len());
            for (rule, value) in t.rules().iter().zip(&row.values) {
                let expected: u64 = rule
                    .columns
                    .iter()
                    .map(|c| source.get(c).unwrap() as u64)
                    .sum();
                prop_assert_eq!(*value, expected as f64);
            }
        }
    }

    #[test]
    fn curation_is_deterministic((t, raw) in topic_and_table()) {
        let first = curate(&raw, t).unwrap();
        let second = curate(&raw, t).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn any_missing_column_is_fatal((t, mut raw) in topic_and_table(), pick in any::<prop::sample::Index>()) {
        let codes: Vec<&str> = t.rules().iter().flat_map(|r| r.columns.iter().copied()).collect();
        let code = codes[pick.index(codes.len())];
        let geoid = raw.geoids().last().unwrap().to_string();
        raw.rows.get_mut(&geoid).unwrap().values.remove(code);

        let err = curate(&raw, t).unwrap_err();
        let is_missing = matches!(err, CurateError::MissingColumn { .. });
        prop_assert!(is_missing);
    }
}
