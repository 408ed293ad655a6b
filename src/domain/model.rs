use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::validate_trim;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JeepModel {
    Wrangler,
    Gladiator,
    #[serde(rename = "WRANGLER_4XE")]
    Wrangler4xe,
    GrandCherokee,
    #[serde(rename = "GRAND_CHEROKEE_4XE")]
    GrandCherokee4xe,
    Compass,
    Cherokee,
    Renegade,
}

impl JeepModel {
    pub const ALL: [JeepModel; 8] = [
        JeepModel::Wrangler,
        JeepModel::Gladiator,
        JeepModel::Wrangler4xe,
        JeepModel::GrandCherokee,
        JeepModel::GrandCherokee4xe,
        JeepModel::Compass,
        JeepModel::Cherokee,
        JeepModel::Renegade,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JeepModel::Wrangler => "WRANGLER",
            JeepModel::Gladiator => "GLADIATOR",
            JeepModel::Wrangler4xe => "WRANGLER_4XE",
            JeepModel::GrandCherokee => "GRAND_CHEROKEE",
            JeepModel::GrandCherokee4xe => "GRAND_CHEROKEE_4XE",
            JeepModel::Compass => "COMPASS",
            JeepModel::Cherokee => "CHEROKEE",
            JeepModel::Renegade => "RENEGADE",
        }
    }
}

impl fmt::Display for JeepModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JeepModel {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        JeepModel::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| InventoryError::InvalidParameter {
                field: "model".to_string(),
                value: s.to_string(),
                reason: "Unknown Jeep model".to_string(),
            })
    }
}

/// A trim level that passed request validation. The lookup treats it as an
/// opaque key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trim(String);

impl Trim {
    pub fn parse(value: &str) -> Result<Self> {
        validate_trim("trim", value)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Trim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jeep {
    #[serde(skip_serializing)]
    pub model_pk: u64,
    pub model_id: JeepModel,
    pub trim_level: String,
    pub num_doors: u8,
    pub wheel_size: u8,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
}

impl Ord for Jeep {
    fn cmp(&self, other: &Self) -> Ordering {
        self.model_id
            .cmp(&other.model_id)
            .then_with(|| self.trim_level.cmp(&other.trim_level))
            .then_with(|| self.num_doors.cmp(&other.num_doors))
            .then_with(|| self.wheel_size.cmp(&other.wheel_size))
            .then_with(|| self.base_price.cmp(&other.base_price))
            .then_with(|| self.model_pk.cmp(&other.model_pk))
    }
}

impl PartialOrd for Jeep {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key applied to lookup results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JeepOrdering {
    /// Model, trim, doors, wheel size, price.
    #[default]
    Natural,
    /// Ascending base price; ties fall back to the natural order.
    BasePrice,
}

impl JeepOrdering {
    pub fn sort(&self, jeeps: &mut [Jeep]) {
        match self {
            JeepOrdering::Natural => jeeps.sort(),
            JeepOrdering::BasePrice => {
                jeeps.sort_by(|a, b| a.base_price.cmp(&b.base_price).then_with(|| a.cmp(b)))
            }
        }
    }
}

impl FromStr for JeepOrdering {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "natural" => Ok(JeepOrdering::Natural),
            "base_price" => Ok(JeepOrdering::BasePrice),
            other => Err(InventoryError::InvalidConfigValueError {
                field: "lookup.ordering".to_string(),
                value: other.to_string(),
                reason: "Valid orderings: natural, base_price".to_string(),
            }),
        }
    }
}
