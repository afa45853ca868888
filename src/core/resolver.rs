use crate::config::DirectoryConfig;
use crate::core::normalizer::{normalize, parse_pickup_id};
use crate::core::service_code::{select_code, MAX_SHIPPING_WEIGHT};
use crate::domain::model::{Pickup, ResolutionResult};
use crate::domain::ports::{PickupDirectory, ShipmentSource, ShippingAddress};
use crate::utils::error::PickupError;

pub const PICKUP_TEMPLATE: &str =
    "@MagentixMondialRelayPlugin/checkout/SelectShipping/pickup/list.html.twig";

/// Resolves pickup points through a [`PickupDirectory`].
///
/// The resolver keeps no per-call state: every lookup receives its
/// [`DirectoryConfig`] explicitly, so one instance can serve concurrent
/// checkouts as long as the directory itself is shareable.
pub struct PickupResolver<D: PickupDirectory> {
    directory: D,
}

impl<D: PickupDirectory> PickupResolver<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    pub fn pickup_template(&self) -> &'static str {
        PICKUP_TEMPLATE
    }

    /// Pickup points eligible for the shipment, in directory order.
    pub async fn list_pickups<A, S>(
        &self,
        address: &A,
        shipment: &S,
        config: &DirectoryConfig,
    ) -> ResolutionResult
    where
        A: ShippingAddress + ?Sized,
        S: ShipmentSource + ?Sized,
    {
        self.resolve_pickups(address, shipment, config).await.into()
    }

    async fn resolve_pickups<A, S>(
        &self,
        address: &A,
        shipment: &S,
        config: &DirectoryConfig,
    ) -> Result<Vec<Pickup>, PickupError>
    where
        A: ShippingAddress + ?Sized,
        S: ShipmentSource + ?Sized,
    {
        let weight = shipment.shipping_weight();
        if weight > MAX_SHIPPING_WEIGHT {
            tracing::info!(weight, "Shipment exceeds the carrier weight ceiling");
            return Err(PickupError::MaxSizeExceeded);
        }

        let service_code = select_code(weight);
        tracing::debug!(
            postcode = address.postcode(),
            country = address.country_code(),
            %service_code,
            "Querying pickup directory"
        );

        let response = self
            .directory
            .find_all(
                address.postcode(),
                address.country_code(),
                service_code,
                config,
            )
            .await
            .map_err(|e| {
                tracing::warn!(code = %e.code, "Pickup directory query failed");
                PickupError::from(e)
            })?;

        let records = response
            .records
            .filter(|records| !records.is_empty())
            .ok_or(PickupError::EmptyResult)?;

        let pickups: Vec<Pickup> = records.iter().map(normalize).collect();
        tracing::info!(count = pickups.len(), "Resolved pickup points");

        Ok(pickups)
    }

    /// Re-resolves one pickup from an id issued by [`Self::list_pickups`].
    ///
    /// Only the number and country segments are sent to the directory; the
    /// service code hint is ignored.
    pub async fn get_pickup_address(
        &self,
        pickup_id: &str,
        config: &DirectoryConfig,
    ) -> Result<Pickup, PickupError> {
        let id = parse_pickup_id(pickup_id).inspect_err(|_| {
            tracing::warn!(pickup_id, "Malformed pickup id");
        })?;

        tracing::debug!(num = %id.num, country = %id.country, "Looking up pickup address");

        let response = self
            .directory
            .find(&id.num, &id.country, config)
            .await
            .map_err(|e| {
                tracing::warn!(code = %e.code, "Pickup directory lookup failed");
                PickupError::from(e)
            })?;

        // duplicate answers for one id: the last record wins
        response
            .records
            .unwrap_or_default()
            .iter()
            .map(normalize)
            .last()
            .ok_or(PickupError::EmptyResult)
    }
}
