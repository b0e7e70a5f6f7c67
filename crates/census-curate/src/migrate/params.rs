//! Typed parameter payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CurateError, Result};
use crate::geo::{self, Sumlevel};
use crate::topic::Topic;

use super::migrate_params;

/// Legacy index-based payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamsV0 {
    pub topic: i64,
    pub sumlevel: i64,
    #[serde(rename = "states-for-counties")]
    pub states_for_counties: i64,
    #[serde(rename = "states-for-places", default)]
    pub states_for_places: Option<i64>,
    #[serde(rename = "states-for-metro-areas", default)]
    pub states_for_metro_areas: Option<i64>,
}

/// Current string-keyed payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamsV1 {
    /// Topic name or lowercase table id.
    pub topic: String,
    pub sumlevel: Sumlevel,
    /// Lowercase two-letter state code; unused for `all_states`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statecode: Option<String>,
}

impl ParamsV1 {
    pub fn new(topic: impl Into<String>, sumlevel: Sumlevel) -> Self {
        Self {
            topic: topic.into(),
            sumlevel,
            statecode: None,
        }
    }

    pub fn with_statecode(mut self, code: impl Into<String>) -> Self {
        self.statecode = Some(code.into());
        self
    }

    /// Migrate a payload of any schema version and parse it as v1.
    pub fn from_value(params: Value) -> Result<Self> {
        let migrated = migrate_params(params)?;
        if let Some(sumlevel) = migrated.get("sumlevel").and_then(Value::as_str) {
            // Surface the domain error rather than a serde message.
            sumlevel.parse::<Sumlevel>()?;
        }
        serde_json::from_value(migrated)
            .map_err(|e| CurateError::MalformedParams(format!("v1 payload: {}", e)))
    }

    /// Resolve the requested topic.
    pub fn resolve_topic(&self) -> Result<Topic> {
        Topic::resolve(&self.topic)
    }

    /// Geography filter for the requested summary level and state.
    pub fn geo_filter(&self) -> Result<String> {
        geo::geo_filter(self.sumlevel, self.statecode.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_v1_value() {
        let params = ParamsV1::from_value(json!({
            "topic": "sex",
            "sumlevel": "counties",
            "statecode": "al",
        }))
        .unwrap();
        assert_eq!(params, ParamsV1::new("sex", Sumlevel::Counties).with_statecode("al"));
        assert_eq!(params.resolve_topic().unwrap(), Topic::Sex);
        assert_eq!(params.geo_filter().unwrap(), "050|04000US01");
    }

    #[test]
    fn test_from_v0_value() {
        let params = ParamsV1::from_value(json!({
            "topic": 4,
            "sumlevel": 3,
            "states-for-counties": 0,
            "states-for-places": 0,
            "states-for-metro-areas": 32,
        }))
        .unwrap();
        assert_eq!(params.topic, "b17001");
        assert_eq!(params.resolve_topic().unwrap(), Topic::Poverty);
        assert_eq!(params.geo_filter().unwrap(), "310|04000US36");
    }

    #[test]
    fn test_unknown_sumlevel_value() {
        let err = ParamsV1::from_value(json!({"topic": "age", "sumlevel": "tracts"})).unwrap_err();
        assert!(matches!(err, CurateError::UnknownSumlevel(ref s) if s == "tracts"));
    }

    #[test]
    fn test_missing_topic_is_malformed() {
        let err = ParamsV1::from_value(json!({"sumlevel": "all_states"})).unwrap_err();
        assert!(matches!(err, CurateError::MalformedParams(_)));
    }

    #[test]
    fn test_all_states_without_statecode() {
        let params = ParamsV1::from_value(json!({"topic": "race", "sumlevel": "all_states"})).unwrap();
        assert_eq!(params.statecode, None);
        assert_eq!(params.geo_filter().unwrap(), "040|01000US");
    }
}
