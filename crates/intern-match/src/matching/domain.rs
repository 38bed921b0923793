use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Keys written onto every ranked record; catalog fields with these names are replaced.
pub const MATCH_SCORE_KEY: &str = "match_score";
pub const MATCH_REASON_KEY: &str = "match_reason";

/// Self-reported candidate attributes submitted for matching.
///
/// Every field is optional on the wire: a missing or `null` value becomes empty so a
/// partial profile still produces best-effort matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
}

/// Catalog identifier. Catalog files carry both numeric and string ids; each is
/// written back in the form it was read. Ids that are neither an unsigned integer nor
/// a string (`-2`, `1.0`, `true`) are kept as raw JSON so one odd entry cannot
/// invalidate the rest of the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InternshipId {
    Number(u64),
    Text(String),
    Other(Value),
}

impl InternshipId {
    /// Compare against an id taken from a URL path segment.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            InternshipId::Number(value) => raw.trim().parse::<u64>() == Ok(*value),
            InternshipId::Text(value) => value == raw,
            InternshipId::Other(value) => value.to_string() == raw.trim(),
        }
    }
}

impl fmt::Display for InternshipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternshipId::Number(value) => write!(f, "{value}"),
            InternshipId::Text(value) => f.write_str(value),
            InternshipId::Other(value) => write!(f, "{value}"),
        }
    }
}

/// One catalog entry. Display fields the scorer does not read (title, company,
/// stipend, ...) survive verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InternshipRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<InternshipId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sector: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_remote: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferred_education: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InternshipRecord {
    /// Copy the record and attach the match annotation; `self` is left untouched.
    pub fn annotate(&self, match_score: u8, match_reason: String) -> ScoredInternship {
        let mut internship = self.clone();
        internship.extra.remove(MATCH_SCORE_KEY);
        internship.extra.remove(MATCH_REASON_KEY);

        ScoredInternship {
            internship,
            match_score,
            match_reason,
        }
    }
}

/// Internship record augmented with its match score and explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredInternship {
    #[serde(flatten)]
    pub internship: InternshipRecord,
    pub match_score: u8,
    pub match_reason: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
