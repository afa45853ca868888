use crate::utils::error::PickupError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub weight: f64,
}

impl Shipment {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub postcode: String,
    pub country_code: String,
}

impl Address {
    pub fn new(postcode: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            postcode: postcode.into(),
            country_code: country_code.into(),
        }
    }
}

/// Carrier network tier, chosen from the parcel weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCode {
    #[serde(rename = "24R")]
    Standard,
    #[serde(rename = "24L")]
    Locker,
    #[serde(rename = "DRI")]
    OnDemand,
}

impl ServiceCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCode::Standard => "24R",
            ServiceCode::Locker => "24L",
            ServiceCode::OnDemand => "DRI",
        }
    }
}

impl fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relay point exactly as the directory describes it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRelayRecord {
    #[serde(rename = "Num")]
    pub num: String,
    #[serde(rename = "Pays")]
    pub pays: String,
    #[serde(rename = "LgAdr1")]
    pub lg_adr1: String,
    #[serde(rename = "LgAdr3")]
    pub lg_adr3: String,
    #[serde(rename = "LgAdr4", default)]
    pub lg_adr4: String,
    #[serde(rename = "Ville")]
    pub ville: String,
    #[serde(rename = "CP")]
    pub cp: String,
    #[serde(rename = "Latitude", deserialize_with = "string_or_number")]
    pub latitude: String,
    #[serde(rename = "Longitude", deserialize_with = "string_or_number")]
    pub longitude: String,
}

pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Coordinate {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Coordinate::deserialize(deserializer)? {
        Coordinate::Text(text) => text,
        Coordinate::Number(number) => number.to_string(),
    })
}

/// Successful directory answer. `records` is `None` when the payload had no
/// relay-point collection at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryResponse {
    pub records: Option<Vec<RawRelayRecord>>,
}

impl DirectoryResponse {
    pub fn with_records(records: Vec<RawRelayRecord>) -> Self {
        Self {
            records: Some(records),
        }
    }

    pub fn empty() -> Self {
        Self { records: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pickup {
    pub id: String,
    pub company: String,
    #[serde(rename = "street_1")]
    pub street1: String,
    #[serde(rename = "street_2")]
    pub street2: String,
    pub city: String,
    pub country: String,
    pub postcode: String,
    pub latitude: String,
    pub longitude: String,
}

/// Composite pickup handle: `<num>-<service code hint>-<country>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupId {
    pub num: String,
    pub service_code_hint: String,
    pub country: String,
}

impl fmt::Display for PickupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.num, self.service_code_hint, self.country)
    }
}

/// Envelope handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ResolutionResult {
    #[serde(rename = "pickups")]
    Pickups(Vec<Pickup>),
    #[serde(rename = "errorCode")]
    Error(PickupError),
}

impl ResolutionResult {
    pub fn pickups(&self) -> Option<&[Pickup]> {
        match self {
            ResolutionResult::Pickups(pickups) => Some(pickups),
            ResolutionResult::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&PickupError> {
        match self {
            ResolutionResult::Pickups(_) => None,
            ResolutionResult::Error(err) => Some(err),
        }
    }

    pub fn into_result(self) -> Result<Vec<Pickup>, PickupError> {
        match self {
            ResolutionResult::Pickups(pickups) => Ok(pickups),
            ResolutionResult::Error(err) => Err(err),
        }
    }
}

impl From<Result<Vec<Pickup>, PickupError>> for ResolutionResult {
    fn from(result: Result<Vec<Pickup>, PickupError>) -> Self {
        match result {
            Ok(pickups) => ResolutionResult::Pickups(pickups),
            Err(err) => ResolutionResult::Error(err),
        }
    }
}
