//! Account identifiers and API host routing.
//!
//! A Sitoo account identifier looks like `"<accountNumber>-<suffix>"`. The
//! full identifier is the Basic-auth user; only the number is used in the URL
//! path and to pick the regional API host.

use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

/// Digits needed to tell every routing prefix apart.
const MIN_NUMBER_LEN: usize = 3;

/// Prefix routing table, checked in order. First match wins.
const HOST_SUFFIXES: &[(&str, &str)] = &[
    ("9", "-sandbox"),
    ("130", "130"),
    ("100", ""),
    ("201", "201"),
    ("202", "202"),
    ("203", "203"),
];

/// Map an account number to the suffix of its API host (`api{suffix}`).
///
/// Unknown prefixes route to the production host (empty suffix).
pub fn resolve_host_suffix(account_number: &str) -> &'static str {
    HOST_SUFFIXES
        .iter()
        .find(|(prefix, _)| account_number.starts_with(prefix))
        .map(|(_, suffix)| *suffix)
        .unwrap_or("")
}

/// A validated account identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountId {
    raw: String,
    number_len: usize,
}

impl AccountId {
    /// Parse an identifier, rejecting ones whose account number is shorter
    /// than three digits or is not all ASCII digits.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let number = raw.split('-').next().unwrap_or_default();
        if number.len() < MIN_NUMBER_LEN || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ApiError::InvalidAccount(raw.to_string()));
        }
        Ok(Self {
            raw: raw.to_string(),
            number_len: number.len(),
        })
    }

    /// The identifier exactly as given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The account number: everything before the first `-`.
    pub fn number(&self) -> &str {
        &self.raw[..self.number_len]
    }

    pub fn host_suffix(&self) -> &'static str {
        resolve_host_suffix(self.number())
    }
}

impl FromStr for AccountId {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
