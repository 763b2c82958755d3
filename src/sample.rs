use log::{debug, trace, warn};
use rug::Integer;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::{
    decode::{decode_with_base_str, DecodeError},
    point::{Point, SampleSet},
};

/// Name of the record entry holding the counts `n` and `k`
pub const KEYS: &str = "keys";

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected a JSON object")]
    NotAnObject,
    #[error("Missing `keys` entry with counts `n` and `k`")]
    MissingKeys,
    #[error("Invalid count `{name}`: {reason}")]
    InvalidCount { name: &'static str, reason: String },
    #[error("Invalid entry key `{0}`: expected a positive integer")]
    InvalidKey(String),
    #[error("Invalid entry `{key}`: {reason}")]
    InvalidEntry { key: String, reason: String },
    #[error("Repeated entry index {0}")]
    DuplicateIndex(u64),
    #[error("Failed to decode entry {index}: {source}")]
    Decode {
        index: u64,
        #[source]
        source: DecodeError,
    },
}

/// A base-encoded sample value at a given index
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Entry {
    /// One-based index, used as the abscissa
    pub index: u64,
    /// Base specifier in textual form
    pub base: String,
    /// Digit string
    pub value: String,
}

/// A test case as supplied by a loader: counts and encoded entries
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Sample {
    n: usize,
    k: usize,
    entries: Vec<Entry>,
}

impl Sample {
    /// Construct a sample, ordering the entries by index
    pub fn new(
        n: usize,
        k: usize,
        mut entries: Vec<Entry>,
    ) -> Result<Self, FormatError> {
        entries.sort_by_key(|e| e.index);
        if let Some(pair) = entries.windows(2).find(|e| e[0].index == e[1].index) {
            return Err(FormatError::DuplicateIndex(pair[0].index));
        }
        if entries.len() != n {
            warn!("Declared {n} entries, found {}", entries.len());
        }
        Ok(Self { n, k, entries })
    }

    /// Parse a record of the form
    ///
    /// ```json
    /// { "keys": {"n": 4, "k": 3}, "1": {"base": "10", "value": "4"}, ... }
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, FormatError> {
        Self::from_json(serde_json::from_str(json)?)
    }

    pub fn from_json(json: Value) -> Result<Self, FormatError> {
        let Value::Object(mut map) = json else {
            return Err(FormatError::NotAnObject);
        };
        let keys = map.remove(KEYS).ok_or(FormatError::MissingKeys)?;
        let keys: RawKeys =
            serde_json::from_value(keys).map_err(|err| FormatError::InvalidCount {
                name: KEYS,
                reason: err.to_string(),
            })?;
        let n = keys.n.to_usize("n")?;
        let k = keys.k.to_usize("k")?;
        debug!("Parsing record with n = {n}, k = {k}");

        let mut entries = Vec::with_capacity(map.len());
        for (key, val) in map {
            let index = parse_index(&key)?;
            let raw: RawEntry = serde_json::from_value(val).map_err(|err| {
                FormatError::InvalidEntry {
                    key: key.clone(),
                    reason: err.to_string(),
                }
            })?;
            trace!("Entry {index}: base {}, value {}", raw.base, raw.value);
            entries.push(Entry {
                index,
                base: raw.base.into_string(),
                value: raw.value,
            });
        }
        Self::new(n, k, entries)
    }

    /// Declared number of entries
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of points to use for reconstruction
    pub fn k(&self) -> usize {
        self.k
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Decode all entries into points `(index, value)`
    pub fn decode(&self) -> Result<SampleSet, FormatError> {
        let pts = self
            .entries
            .iter()
            .map(|e| {
                let y = decode_with_base_str(&e.value, &e.base).map_err(
                    |source| FormatError::Decode {
                        index: e.index,
                        source,
                    },
                )?;
                Ok(Point::new(Integer::from(e.index), y))
            })
            .collect::<Result<Vec<_>, FormatError>>()?;
        // indices are unique by construction
        Ok(SampleSet::from_points_unchecked(pts))
    }
}

fn parse_index(key: &str) -> Result<u64, FormatError> {
    let invalid = || FormatError::InvalidKey(key.to_owned());
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match key.parse() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(index) => Ok(index),
    }
}

#[derive(Deserialize)]
struct RawKeys {
    n: Count,
    k: Count,
}

#[derive(Deserialize)]
struct RawEntry {
    base: Text,
    value: String,
}

// numbers are accepted both as JSON numbers and as strings
#[derive(Deserialize)]
#[serde(untagged)]
enum Count {
    Num(u64),
    Str(String),
}

impl Count {
    fn to_usize(&self, name: &'static str) -> Result<usize, FormatError> {
        let invalid = |reason: String| FormatError::InvalidCount { name, reason };
        match self {
            Count::Num(n) => usize::try_from(*n).map_err(|err| invalid(err.to_string())),
            Count::Str(s) => s.trim().parse().map_err(|_| invalid(format!("`{s}`"))),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Text {
    Str(String),
    Num(u64),
}

impl Text {
    fn into_string(self) -> String {
        match self {
            Text::Str(s) => s,
            Text::Num(n) => n.to_string(),
        }
    }
}

impl std::fmt::Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Text::Str(s) => write!(f, "{s}"),
            Text::Num(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "keys": {"n": 4, "k": 3},
        "1": {"base": "10", "value": "4"},
        "2": {"base": "2", "value": "111"},
        "3": {"base": "10", "value": "12"},
        "6": {"base": "4", "value": "213"}
    }"#;

    #[test]
    fn parse_with_gaps() {
        let sample = Sample::from_json_str(RECORD).unwrap();
        assert_eq!(sample.n(), 4);
        assert_eq!(sample.k(), 3);
        let idx = Vec::from_iter(sample.entries().iter().map(|e| e.index));
        assert_eq!(idx, [1, 2, 3, 6]);
        let pts = sample.decode().unwrap();
        assert_eq!(pts.to_string(), "[(1, 4), (2, 7), (3, 12), (6, 39)]");
    }

    #[test]
    fn numeric_order() {
        let json = r#"{
            "keys": {"n": "3", "k": "2"},
            "10": {"base": 16, "value": "ff"},
            "9": {"base": "10", "value": "9"},
            "2": {"base": "36", "value": "Z"}
        }"#;
        let sample = Sample::from_json_str(json).unwrap();
        assert_eq!(sample.k(), 2);
        let pts = sample.decode().unwrap();
        assert_eq!(pts.to_string(), "[(2, 35), (9, 9), (10, 255)]");
    }

    #[test]
    fn malformed() {
        assert!(matches!(
            Sample::from_json_str("{"),
            Err(FormatError::Json(_))
        ));
        assert!(matches!(
            Sample::from_json_str("[1, 2]"),
            Err(FormatError::NotAnObject)
        ));
        assert!(matches!(
            Sample::from_json_str(r#"{"1": {"base": "10", "value": "4"}}"#),
            Err(FormatError::MissingKeys)
        ));
        assert!(matches!(
            Sample::from_json_str(r#"{"keys": {"n": 1, "k": "three"}}"#),
            Err(FormatError::InvalidCount { name: "k", .. })
        ));
        assert!(matches!(
            Sample::from_json_str(r#"{"keys": {"n": 1, "k": 1}, "x": {}}"#),
            Err(FormatError::InvalidKey(_))
        ));
        assert!(matches!(
            Sample::from_json_str(r#"{"keys": {"n": 1, "k": 1}, "0": {"base": "2", "value": "1"}}"#),
            Err(FormatError::InvalidKey(_))
        ));
        assert!(matches!(
            Sample::from_json_str(r#"{"keys": {"n": 1, "k": 1}, "1": {"base": "2"}}"#),
            Err(FormatError::InvalidEntry { .. })
        ));
        assert!(matches!(
            Sample::from_json_str(
                r#"{"keys": {"n": 2, "k": 1}, "1": {"base": "2", "value": "1"}, "01": {"base": "2", "value": "1"}}"#
            ),
            Err(FormatError::DuplicateIndex(1))
        ));
    }

    #[test]
    fn invalid_counts() {
        for json in [
            r#"{"keys": {"n": -1, "k": 2}}"#,
            r#"{"keys": {"n": 2}}"#,
            r#"{"keys": "2 2"}"#,
        ] {
            assert!(matches!(
                Sample::from_json_str(json),
                Err(FormatError::InvalidCount { name: KEYS, .. })
            ));
        }
        let err = Sample::from_json_str(r#"{"keys": {"n": 2}}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `k`"));
        assert!(matches!(
            Sample::from_json_str(r#"{"keys": {"n": "two", "k": 2}}"#),
            Err(FormatError::InvalidCount { name: "n", .. })
        ));
        assert!(matches!(
            Sample::from_json_str(r#"{"n": 2, "k": 2}"#),
            Err(FormatError::MissingKeys)
        ));
    }

    #[test]
    fn decode_failure() {
        let json = r#"{
            "keys": {"n": 2, "k": 2},
            "1": {"base": "16", "value": "g"},
            "2": {"base": "10", "value": "1"}
        }"#;
        let err = Sample::from_json_str(json).unwrap().decode().unwrap_err();
        assert!(matches!(
            err,
            FormatError::Decode {
                index: 1,
                source: DecodeError::InvalidDigit { digit: 'g', pos: 0, base: 16 }
            }
        ));

        let json = r#"{
            "keys": {"n": 1, "k": 1},
            "1": {"base": "hex", "value": "ff"}
        }"#;
        let err = Sample::from_json_str(json).unwrap().decode().unwrap_err();
        assert!(matches!(
            err,
            FormatError::Decode { source: DecodeError::InvalidBase { .. }, .. }
        ));
    }
}
