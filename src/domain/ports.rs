use crate::config::DirectoryConfig;
use crate::domain::model::{Address, DirectoryResponse, ServiceCode, Shipment};
use crate::utils::error::DirectoryError;
use async_trait::async_trait;

pub type DirectoryResult = std::result::Result<DirectoryResponse, DirectoryError>;

/// Relay-point lookup service. Implementations must be safe to share
/// between concurrent resolutions.
#[async_trait]
pub trait PickupDirectory: Send + Sync {
    /// Relay points near a postcode for the given service code.
    async fn find_all(
        &self,
        postcode: &str,
        country_code: &str,
        service_code: ServiceCode,
        config: &DirectoryConfig,
    ) -> DirectoryResult;

    /// A single relay point by its carrier number.
    async fn find(&self, num: &str, country_code: &str, config: &DirectoryConfig)
        -> DirectoryResult;
}

pub trait ShipmentSource {
    fn shipping_weight(&self) -> f64;
}

pub trait ShippingAddress {
    fn postcode(&self) -> &str;
    fn country_code(&self) -> &str;
}

impl ShipmentSource for Shipment {
    fn shipping_weight(&self) -> f64 {
        self.weight
    }
}

impl ShippingAddress for Address {
    fn postcode(&self) -> &str {
        &self.postcode
    }

    fn country_code(&self) -> &str {
        &self.country_code
    }
}
