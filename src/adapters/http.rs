use crate::config::DirectoryConfig;
use crate::domain::model::{string_or_number, DirectoryResponse, RawRelayRecord, ServiceCode};
use crate::domain::ports::{DirectoryResult, PickupDirectory};
use crate::utils::error::{DirectoryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Status the carrier returns for a successful lookup.
const STAT_OK: &str = "0";

pub const UNREACHABLE: &str = "unreachable";
pub const INVALID_RESPONSE: &str = "invalid_response";

/// Relay-point directory reached over HTTP with a JSON body.
#[derive(Debug, Clone)]
pub struct HttpPickupDirectory {
    client: Client,
}

impl HttpPickupDirectory {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn query(&self, params: &[(&str, String)], config: &DirectoryConfig) -> DirectoryResult {
        tracing::debug!("Making directory request to: {}", config.endpoint);

        let response = self
            .client
            .get(&config.endpoint)
            .query(params)
            .timeout(config.timeout())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Directory request failed: {}", e);
                DirectoryError::new(UNREACHABLE)
            })?;

        let status = response.status();
        tracing::debug!("Directory response status: {}", status);
        if !status.is_success() {
            return Err(DirectoryError::new(format!("http_{}", status.as_u16())));
        }

        let payload: RelayPayload = response.json().await.map_err(|e| {
            tracing::warn!("Undecodable directory response: {}", e);
            DirectoryError::new(INVALID_RESPONSE)
        })?;

        payload.into_response()
    }
}

#[async_trait]
impl PickupDirectory for HttpPickupDirectory {
    async fn find_all(
        &self,
        postcode: &str,
        country_code: &str,
        service_code: ServiceCode,
        config: &DirectoryConfig,
    ) -> DirectoryResult {
        let params = [
            ("Enseigne", config.merchant_id.clone()),
            ("Pays", country_code.to_string()),
            ("CP", postcode.to_string()),
            ("Action", service_code.as_str().to_string()),
            ("NombreResultats", config.result_count().to_string()),
        ];
        self.query(&params, config).await
    }

    async fn find(&self, num: &str, country_code: &str, config: &DirectoryConfig) -> DirectoryResult {
        let params = [
            ("Enseigne", config.merchant_id.clone()),
            ("Pays", country_code.to_string()),
            ("NumPointRelais", num.to_string()),
        ];
        self.query(&params, config).await
    }
}

#[derive(Debug, Deserialize)]
struct RelayPayload {
    #[serde(rename = "STAT", deserialize_with = "string_or_number")]
    stat: String,
    #[serde(rename = "PointsRelais", default)]
    points_relais: Option<PointsRelais>,
}

#[derive(Debug, Deserialize)]
struct PointsRelais {
    #[serde(rename = "PointRelais_Details", default)]
    details: Option<OneOrMany<RawRelayRecord>>,
}

/// The carrier sends a bare object when only one relay point matches.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

impl RelayPayload {
    fn into_response(self) -> DirectoryResult {
        if self.stat != STAT_OK {
            return Err(DirectoryError::new(self.stat));
        }

        let records = self
            .points_relais
            .and_then(|points| points.details)
            .map(Vec::from);

        Ok(DirectoryResponse { records })
    }
}
