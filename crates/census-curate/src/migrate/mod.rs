//! Parameter schema migration.
//!
//! Two schema versions exist:
//!
//! - **v0**: `topic` and `sumlevel` are menu indices, and the state is picked
//!   through one of three parallel selector keys (`states-for-counties`,
//!   `states-for-places`, `states-for-metro-areas`). Legacy clients always
//!   submitted all three; only the one matching `sumlevel` is meaningful.
//! - **v1**: `topic` is a lowercase key such as `b25003`, `sumlevel` is one of
//!   `all_states|counties|places|metro_areas` and `statecode` is a lowercase
//!   two-letter code.
//!
//! Migration is v0 → v1 or the identity. A v1 payload is never touched.

mod params;

use serde_json::Value;
use tracing::debug;

use crate::error::{CurateError, Result};
use crate::geo::Sumlevel;
use crate::legacy::{STATE_MENU, SUMLEVEL_MENU, TOPIC_MENU};

pub use params::{ParamsV0, ParamsV1};

/// Key whose presence marks a v0 payload.
pub const V0_MARKER: &str = "states-for-counties";

/// Schema version of a parameter payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    V0,
    V1,
}

impl SchemaVersion {
    /// `V0` iff the payload carries the legacy `states-for-counties` key.
    pub fn detect(params: &Value) -> SchemaVersion {
        match params {
            Value::Object(map) if map.contains_key(V0_MARKER) => SchemaVersion::V0,
            _ => SchemaVersion::V1,
        }
    }
}

/// Migrate any supported payload to the v1 schema.
///
/// v1 payloads are returned unchanged.
pub fn migrate_params(params: Value) -> Result<Value> {
    match SchemaVersion::detect(&params) {
        SchemaVersion::V1 => Ok(params),
        SchemaVersion::V0 => {
            let v0: ParamsV0 = serde_json::from_value(params)
                .map_err(|e| CurateError::MalformedParams(format!("v0 payload: {}", e)))?;
            let v1 = migrate_v0(&v0)?;
            debug!(?v0, ?v1, "migrated v0 parameters");
            Ok(serde_json::to_value(v1)?)
        }
    }
}

/// The v0 → v1 transition.
pub fn migrate_v0(params: &ParamsV0) -> Result<ParamsV1> {
    let sumlevel_key = lookup("sumlevel", &SUMLEVEL_MENU, params.sumlevel)?;
    let sumlevel: Sumlevel = sumlevel_key.parse()?;

    // Only the selector matching the summary level counts; the other two
    // carry whatever the hidden menus held.
    let (selector, state_index) = match sumlevel {
        Sumlevel::AllStates | Sumlevel::Counties => {
            ("states-for-counties", Some(params.states_for_counties))
        }
        Sumlevel::Places => ("states-for-places", params.states_for_places),
        Sumlevel::MetroAreas => ("states-for-metro-areas", params.states_for_metro_areas),
    };
    let state_index = state_index
        .ok_or_else(|| CurateError::MalformedParams(format!("v0 payload lacks '{}'", selector)))?;
    let statecode = lookup(selector, &STATE_MENU, state_index)?;

    let topic = lookup("topic", &TOPIC_MENU, params.topic)?;

    Ok(ParamsV1 {
        topic: topic.to_lowercase(),
        sumlevel,
        statecode: Some(statecode.to_string()),
    })
}

fn lookup(field: &'static str, menu: &[&'static str], index: i64) -> Result<&'static str> {
    usize::try_from(index)
        .ok()
        .and_then(|i| menu.get(i).copied())
        .ok_or(CurateError::InvalidMigration {
            field,
            index,
            len: menu.len(),
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_detect_version() {
        assert_eq!(
            SchemaVersion::detect(&json!({"topic": 0, "sumlevel": 0, "states-for-counties": 0})),
            SchemaVersion::V0
        );
        assert_eq!(
            SchemaVersion::detect(&json!({"topic": "b01001", "sumlevel": "counties", "statecode": "al"})),
            SchemaVersion::V1
        );
        assert_eq!(SchemaVersion::detect(&json!([])), SchemaVersion::V1);
    }

    #[test]
    fn test_counties_read_counties_selector() {
        let v1 = migrate_params(json!({
            "topic": 0,
            "sumlevel": 1,
            "states-for-counties": 35,
            "states-for-places": 4,
            "states-for-metro-areas": 23,
        }))
        .unwrap();
        assert_eq!(v1, json!({"topic": "b01001", "sumlevel": "counties", "statecode": "oh"}));
    }

    #[test]
    fn test_metro_areas_read_metro_selector() {
        let v1 = migrate_params(json!({
            "topic": 19,
            "sumlevel": 3,
            "states-for-counties": 0,
            "states-for-places": 0,
            "states-for-metro-areas": 43,
        }))
        .unwrap();
        assert_eq!(v1, json!({"topic": "b21002", "sumlevel": "metro_areas", "statecode": "tx"}));
    }

    #[test]
    fn test_unselected_selectors_may_be_absent() {
        let v1 = migrate_params(json!({
            "topic": 1,
            "sumlevel": 0,
            "states-for-counties": 0,
        }))
        .unwrap();
        assert_eq!(v1["statecode"], "al");
    }

    #[test]
    fn test_selected_selector_missing_is_malformed() {
        let err = migrate_params(json!({
            "topic": 1,
            "sumlevel": 2,
            "states-for-counties": 0,
        }))
        .unwrap_err();
        assert!(matches!(err, CurateError::MalformedParams(_)));
    }

    #[test]
    fn test_out_of_range_sumlevel() {
        let err = migrate_params(json!({
            "topic": 0,
            "sumlevel": 4,
            "states-for-counties": 0,
            "states-for-places": 0,
            "states-for-metro-areas": 0,
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            CurateError::InvalidMigration { field: "sumlevel", index: 4, len: 4 }
        ));
    }

    #[test]
    fn test_negative_index_is_invalid() {
        let err = migrate_params(json!({
            "topic": -1,
            "sumlevel": 0,
            "states-for-counties": 0,
        }))
        .unwrap_err();
        assert!(matches!(err, CurateError::InvalidMigration { field: "topic", .. }));
    }

    #[test]
    fn test_out_of_range_state() {
        let err = migrate_params(json!({
            "topic": 0,
            "sumlevel": 2,
            "states-for-counties": 0,
            "states-for-places": 56,
            "states-for-metro-areas": 0,
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            CurateError::InvalidMigration { field: "states-for-places", index: 56, len: 56 }
        ));
    }

    #[test]
    fn test_non_integer_index_is_malformed() {
        let err = migrate_params(json!({
            "topic": "age",
            "sumlevel": 0,
            "states-for-counties": 0,
        }))
        .unwrap_err();
        assert!(matches!(err, CurateError::MalformedParams(_)));
    }
}
