use crate::domain::model::{Pickup, PickupId, RawRelayRecord, ServiceCode};
use crate::utils::error::PickupError;

const ID_SEPARATOR: char = '-';

/// Service code embedded in every issued pickup id. The id always carries
/// the standard code, whatever code the listing was queried with.
pub const ID_SERVICE_CODE: ServiceCode = ServiceCode::Standard;

pub fn build_pickup_id(num: &str, country: &str) -> String {
    PickupId {
        num: num.to_string(),
        service_code_hint: ID_SERVICE_CODE.as_str().to_string(),
        country: country.to_string(),
    }
    .to_string()
}

/// Splits a composite id into its three segments.
pub fn parse_pickup_id(pickup_id: &str) -> Result<PickupId, PickupError> {
    let segments: Vec<&str> = pickup_id.split(ID_SEPARATOR).collect();
    match segments.as_slice() {
        [num, hint, country] => Ok(PickupId {
            num: num.to_string(),
            service_code_hint: hint.to_string(),
            country: country.to_string(),
        }),
        _ => Err(PickupError::MalformedId(pickup_id.to_string())),
    }
}

pub fn normalize(raw: &RawRelayRecord) -> Pickup {
    Pickup {
        id: build_pickup_id(&raw.num, &raw.pays),
        company: raw.lg_adr1.clone(),
        street1: raw.lg_adr3.clone(),
        street2: raw.lg_adr4.clone(),
        city: raw.ville.clone(),
        country: raw.pays.clone(),
        postcode: raw.cp.clone(),
        latitude: raw.latitude.clone(),
        longitude: raw.longitude.clone(),
    }
}
