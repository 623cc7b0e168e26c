// src/types.rs
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A coded concept as carried in a DICOM code sequence item.
///
/// Values are taken as already validated against their coding scheme; nothing
/// here checks them against a vocabulary.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodedConcept {
    /// Code Value (0008,0100)
    pub value: String,
    /// Coding Scheme Designator (0008,0102)
    pub scheme_designator: String,
    /// Code Meaning (0008,0104)
    pub meaning: String,
    /// Coding Scheme Version (0008,0103)
    pub scheme_version: Option<String>,
}

impl CodedConcept {
    pub fn new(
        value: impl Into<String>,
        scheme_designator: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        CodedConcept {
            value: value.into(),
            scheme_designator: scheme_designator.into(),
            meaning: meaning.into(),
            scheme_version: None,
        }
    }

    pub fn with_scheme_version(mut self, version: impl Into<String>) -> Self {
        self.scheme_version = Some(version.into());
        self
    }
}

impl fmt::Display for CodedConcept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, \"{}\")", self.value, self.scheme_designator, self.meaning)
    }
}

/// Segment Algorithm Type (0062,0008)
///
/// Unknown terms are kept verbatim in `Other` rather than rejected.
/// Equality and hashing go by the term, so `Other("MANUAL")` equals `Manual`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlgorithmType {
    Automatic,
    SemiAutomatic,
    Manual,
    Other(String),
}

impl AlgorithmType {
    /// The DICOM defined term for this algorithm type
    pub fn as_str(&self) -> &str {
        match self {
            AlgorithmType::Automatic => "AUTOMATIC",
            AlgorithmType::SemiAutomatic => "SEMIAUTOMATIC",
            AlgorithmType::Manual => "MANUAL",
            AlgorithmType::Other(term) => term,
        }
    }

    pub fn is_defined_term(&self) -> bool {
        matches!(self.as_str(), "AUTOMATIC" | "SEMIAUTOMATIC" | "MANUAL")
    }
}

impl PartialEq for AlgorithmType {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for AlgorithmType {}

impl Hash for AlgorithmType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AlgorithmType::from(s))
    }
}

impl From<&str> for AlgorithmType {
    fn from(term: &str) -> Self {
        match term {
            "AUTOMATIC" => AlgorithmType::Automatic,
            "SEMIAUTOMATIC" => AlgorithmType::SemiAutomatic,
            "MANUAL" => AlgorithmType::Manual,
            other => AlgorithmType::Other(other.to_string()),
        }
    }
}

impl From<String> for AlgorithmType {
    fn from(term: String) -> Self {
        match term.as_str() {
            "AUTOMATIC" | "SEMIAUTOMATIC" | "MANUAL" => AlgorithmType::from(term.as_str()),
            _ => AlgorithmType::Other(term),
        }
    }
}

impl From<AlgorithmType> for String {
    fn from(algorithm_type: AlgorithmType) -> Self {
        match algorithm_type {
            AlgorithmType::Other(term) => term,
            defined => defined.as_str().to_string(),
        }
    }
}
