use std::{fmt, str::FromStr};

use crate::error::AppError;

/// How the `productName` list filter compares against stored names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameMatch {
    /// Case-sensitive substring match.
    #[default]
    Contains,
    /// Case-sensitive whole-value equality.
    Exact,
}

/// How serial numbers are compared on lookup, delete and the duplicate check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SerialMatch {
    #[default]
    CaseSensitive,
    CaseInsensitive,
}

impl NameMatch {
    pub fn matches(self, name: &str, filter: &str) -> bool {
        match self {
            NameMatch::Contains => name.contains(filter),
            NameMatch::Exact => name == filter,
        }
    }
}

impl SerialMatch {
    pub fn matches(self, serial_num: &str, wanted: &str) -> bool {
        match self {
            SerialMatch::CaseSensitive => serial_num == wanted,
            SerialMatch::CaseInsensitive => serial_num.to_lowercase() == wanted.to_lowercase(),
        }
    }
}

impl FromStr for NameMatch {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contains" => Ok(NameMatch::Contains),
            "exact" => Ok(NameMatch::Exact),
            other => Err(AppError::ConfigError(format!(
                "Invalid PRODUCT_NAME_MATCH value '{}', expected 'contains' or 'exact'",
                other
            ))),
        }
    }
}

impl FromStr for SerialMatch {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "case_sensitive" => Ok(SerialMatch::CaseSensitive),
            "case_insensitive" => Ok(SerialMatch::CaseInsensitive),
            other => Err(AppError::ConfigError(format!(
                "Invalid PRODUCT_SERIAL_MATCH value '{}', expected 'case_sensitive' or 'case_insensitive'",
                other
            ))),
        }
    }
}

impl fmt::Display for NameMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameMatch::Contains => f.write_str("contains"),
            NameMatch::Exact => f.write_str("exact"),
        }
    }
}

impl fmt::Display for SerialMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerialMatch::CaseSensitive => f.write_str("case_sensitive"),
            SerialMatch::CaseInsensitive => f.write_str("case_insensitive"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    pub name_match: NameMatch,
    pub serial_match: SerialMatch,
}
