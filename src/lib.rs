//! Mondial Relay pickup-point resolution.
//!
//! [`PickupResolver`] picks a service code from the shipment weight, queries a
//! [`PickupDirectory`] and normalizes the relay points it returns into
//! [`Pickup`] records ready for the checkout templates.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::HttpPickupDirectory;
pub use config::{toml_config::RelayConfig, DirectoryConfig, ShippingConfig};
pub use core::{resolver::PickupResolver, shipping_cost::ShippingCostProvider};
pub use domain::model::{Address, Pickup, ResolutionResult, ServiceCode, Shipment};
pub use domain::ports::{PickupDirectory, ShipmentSource, ShippingAddress};
pub use utils::error::{DirectoryError, PickupError, RelayError, Result};
