use crate::domain::model::ServiceCode;

/// Heaviest parcel accepted by the standard relay network.
pub const STANDARD_MAX_WEIGHT: f64 = 30.0;

/// Heaviest parcel accepted by lockers.
pub const LOCKER_MAX_WEIGHT: f64 = 50.0;

/// Absolute carrier ceiling; above this no pickup point is eligible.
pub const MAX_SHIPPING_WEIGHT: f64 = 150.0;

pub fn select_code(weight: f64) -> ServiceCode {
    let mut code = ServiceCode::Standard;
    if weight > STANDARD_MAX_WEIGHT {
        code = ServiceCode::Locker;
    }
    if weight > LOCKER_MAX_WEIGHT {
        code = ServiceCode::OnDemand;
    }
    code
}
