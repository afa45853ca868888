use crate::config::ShippingConfig;
use crate::domain::ports::ShipmentSource;

/// Calculator type registered with the shop's shipping method.
pub const CARRIER_TYPE: &str = "mondial_relay";

/// Flat-rate pricing: the configured amount, whatever the shipment weighs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShippingCostProvider;

impl ShippingCostProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate<S: ShipmentSource + ?Sized>(&self, _shipment: &S, config: &ShippingConfig) -> i64 {
        config.amount.trunc() as i64
    }

    pub fn carrier_type(&self) -> &'static str {
        CARRIER_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Shipment;

    #[test]
    fn test_returns_configured_amount() {
        let provider = ShippingCostProvider::new();
        let config = ShippingConfig { amount: 490.0 };

        assert_eq!(provider.calculate(&Shipment::new(1.0), &config), 490);
        assert_eq!(provider.calculate(&Shipment::new(149.0), &config), 490);
    }

    #[test]
    fn test_truncates_fractional_amount() {
        let provider = ShippingCostProvider::new();
        assert_eq!(provider.calculate(&Shipment::new(1.0), &ShippingConfig { amount: 4.99 }), 4);
        assert_eq!(provider.calculate(&Shipment::new(1.0), &ShippingConfig { amount: -2.5 }), -2);
    }

    #[test]
    fn test_carrier_type() {
        assert_eq!(ShippingCostProvider::new().carrier_type(), "mondial_relay");
    }
}
