#![allow(dead_code)]

use async_trait::async_trait;
use mondial_relay_pickup::core::{DirectoryResponse, DirectoryResult, RawRelayRecord};
use mondial_relay_pickup::{DirectoryConfig, PickupDirectory, ServiceCode};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryCall {
    FindAll {
        postcode: String,
        country_code: String,
        service_code: ServiceCode,
        merchant_id: String,
    },
    Find {
        num: String,
        country_code: String,
        merchant_id: String,
    },
}

/// Directory double that records every call and replays a canned answer.
#[derive(Clone)]
pub struct SpyDirectory {
    result: DirectoryResult,
    calls: Arc<Mutex<Vec<DirectoryCall>>>,
}

impl SpyDirectory {
    pub fn returning(result: DirectoryResult) -> Self {
        Self {
            result,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_records(records: Vec<RawRelayRecord>) -> Self {
        Self::returning(Ok(DirectoryResponse::with_records(records)))
    }

    pub async fn calls(&self) -> Vec<DirectoryCall> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl PickupDirectory for SpyDirectory {
    async fn find_all(
        &self,
        postcode: &str,
        country_code: &str,
        service_code: ServiceCode,
        config: &DirectoryConfig,
    ) -> DirectoryResult {
        self.calls.lock().await.push(DirectoryCall::FindAll {
            postcode: postcode.to_string(),
            country_code: country_code.to_string(),
            service_code,
            merchant_id: config.merchant_id.clone(),
        });
        self.result.clone()
    }

    async fn find(&self, num: &str, country_code: &str, config: &DirectoryConfig) -> DirectoryResult {
        self.calls.lock().await.push(DirectoryCall::Find {
            num: num.to_string(),
            country_code: country_code.to_string(),
            merchant_id: config.merchant_id.clone(),
        });
        self.result.clone()
    }
}

pub fn relay_record(num: &str, pays: &str) -> RawRelayRecord {
    RawRelayRecord {
        num: num.to_string(),
        pays: pays.to_string(),
        lg_adr1: "Relay Shop".to_string(),
        lg_adr3: "1 Rue X".to_string(),
        lg_adr4: "".to_string(),
        ville: "Paris".to_string(),
        cp: "75001".to_string(),
        latitude: "48.85".to_string(),
        longitude: "2.35".to_string(),
    }
}

pub fn relay_json(num: &str, pays: &str) -> serde_json::Value {
    serde_json::json!({
        "Num": num,
        "Pays": pays,
        "LgAdr1": "Relay Shop",
        "LgAdr3": "1 Rue X",
        "LgAdr4": "",
        "Ville": "Paris",
        "CP": "75001",
        "Latitude": "48.85",
        "Longitude": "2.35"
    })
}

pub fn directory_config(endpoint: &str) -> DirectoryConfig {
    DirectoryConfig::new(endpoint, "BDTEST13")
}
