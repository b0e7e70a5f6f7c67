//! Summary levels, state FIPS codes and geography filter resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CurateError, Result};

/// Geography filter for every state in the nation.
pub const ALL_STATES_FILTER: &str = "040|01000US";

/// Geographic granularity of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sumlevel {
    AllStates,
    Counties,
    Places,
    MetroAreas,
}

impl Sumlevel {
    pub const ALL: [Sumlevel; 4] = [
        Sumlevel::AllStates,
        Sumlevel::Counties,
        Sumlevel::Places,
        Sumlevel::MetroAreas,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Sumlevel::AllStates => "all_states",
            Sumlevel::Counties => "counties",
            Sumlevel::Places => "places",
            Sumlevel::MetroAreas => "metro_areas",
        }
    }

    /// Census summary level code plus the parent geography prefix, for
    /// levels that are scoped to one state.
    fn state_scoped_prefix(self) -> Option<&'static str> {
        match self {
            Sumlevel::AllStates => None,
            Sumlevel::Counties => Some("050|04000US"),
            Sumlevel::Places => Some("160|04000US"),
            Sumlevel::MetroAreas => Some("310|04000US"),
        }
    }

    /// Whether the level needs a state code to resolve.
    pub fn needs_state(self) -> bool {
        self.state_scoped_prefix().is_some()
    }
}

impl FromStr for Sumlevel {
    type Err = CurateError;

    fn from_str(s: &str) -> Result<Self> {
        Sumlevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| CurateError::UnknownSumlevel(s.to_string()))
    }
}

impl fmt::Display for Sumlevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-letter codes of the 50 states, DC and five territories, with their
/// two-digit FIPS codes. Fixed external contract.
pub const STATE_FIPS: [(&str, &str); 56] = [
    ("al", "01"), ("ak", "02"), ("az", "04"), ("ar", "05"), ("ca", "06"),
    ("co", "08"), ("ct", "09"), ("de", "10"), ("dc", "11"), ("fl", "12"),
    ("ga", "13"), ("hi", "15"), ("id", "16"), ("il", "17"), ("in", "18"),
    ("ia", "19"), ("ks", "20"), ("ky", "21"), ("la", "22"), ("me", "23"),
    ("md", "24"), ("ma", "25"), ("mi", "26"), ("mn", "27"), ("ms", "28"),
    ("mo", "29"), ("mt", "30"), ("ne", "31"), ("nv", "32"), ("nh", "33"),
    ("nj", "34"), ("nm", "35"), ("ny", "36"), ("nc", "37"), ("nd", "38"),
    ("oh", "39"), ("ok", "40"), ("or", "41"), ("pa", "42"), ("ri", "44"),
    ("sc", "45"), ("sd", "46"), ("tn", "47"), ("tx", "48"), ("ut", "49"),
    ("vt", "50"), ("va", "51"), ("wa", "53"), ("wv", "54"), ("wi", "55"),
    ("wy", "56"), ("as", "60"), ("gu", "66"), ("mp", "69"), ("pr", "72"),
    ("vi", "78"),
];

/// FIPS code for a two-letter state code.
pub fn state_fips(code: &str) -> Result<&'static str> {
    let code_lower = code.to_ascii_lowercase();
    STATE_FIPS
        .iter()
        .find(|(c, _)| *c == code_lower)
        .map(|(_, fips)| *fips)
        .ok_or_else(|| CurateError::UnknownStateCode(code.to_string()))
}

/// Resolve a summary level and state into a Census Reporter geography filter.
///
/// `statecode` is ignored for `all_states`.
pub fn geo_filter(sumlevel: Sumlevel, statecode: Option<&str>) -> Result<String> {
    match sumlevel.state_scoped_prefix() {
        None => Ok(ALL_STATES_FILTER.to_string()),
        Some(prefix) => {
            let code = statecode.ok_or_else(|| CurateError::UnknownStateCode(String::new()))?;
            let fips = state_fips(code)?;
            Ok(format!("{}{}", prefix, fips))
        }
    }
}
