pub mod normalizer;
pub mod resolver;
pub mod service_code;
pub mod shipping_cost;

pub use crate::domain::model::{
    Address, DirectoryResponse, Pickup, PickupId, RawRelayRecord, ResolutionResult, ServiceCode,
    Shipment,
};
pub use crate::domain::ports::{DirectoryResult, PickupDirectory, ShipmentSource, ShippingAddress};
pub use crate::utils::error::{DirectoryError, PickupError, Result};
