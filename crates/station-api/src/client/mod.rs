// Copyright 2025 HydroWatch Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Async HTTP client for the monitoring backend.
//!
//! All requests carry a bearer credential. Geoserver feature data is always
//! fetched through the backend's proxy endpoint, never from the originating
//! geospatial server, so the backend remains the single authorization
//! boundary.

use log::debug;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{
    ChannelReading, ExternalLayer, HistoryPoint, LayerBounds, RawSample, Station,
};

/// Client for the monitoring backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    /// Create a client for the given backend. Trailing slashes on the base
    /// URL are tolerated.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: token.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                path: path.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("DELETE {}", url);

        let response = self
            .http
            .delete(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                path: path.to_string(),
            });
        }
        Ok(())
    }

    /// Baseline station inventory for a project, with position, status and
    /// channel metadata.
    pub async fn list_stations(&self, project: &str) -> Result<Vec<Station>, ApiError> {
        self.get_json(&format!("/api/projects/{project}/stations"))
            .await
    }

    /// Catalog of thematic vector layers available for display.
    pub async fn list_layers(&self) -> Result<Vec<ExternalLayer>, ApiError> {
        self.get_json("/api/layers").await
    }

    /// Geographic extent of a layer, for camera framing.
    pub async fn layer_bounding_box(&self, layer_name: &str) -> Result<LayerBounds, ApiError> {
        self.get_json(&format!("/api/layers/{layer_name}/bbox"))
            .await
    }

    /// Feature data for a layer, proxied through the backend. Returned as raw
    /// GeoJSON for the caller to adapt.
    pub async fn layer_features(&self, layer_name: &str) -> Result<serde_json::Value, ApiError> {
        self.get_json(&format!("/api/layers/{layer_name}/features"))
            .await
    }

    /// Latest reading for one channel of a station.
    pub async fn latest_reading(
        &self,
        station_id: i64,
        channel: &str,
    ) -> Result<ChannelReading, ApiError> {
        self.get_json(&format!("/api/stations/{station_id}/channels/{channel}/latest"))
            .await
    }

    /// Legacy latest-sample batch for a station with no channel list.
    pub async fn latest_batch(&self, station_id: i64) -> Result<Vec<RawSample>, ApiError> {
        self.get_json(&format!("/api/stations/{station_id}/latest"))
            .await
    }

    /// Historical samples for one channel, most recent `hours` hours.
    pub async fn channel_history(
        &self,
        station_id: i64,
        channel: &str,
        hours: u32,
    ) -> Result<Vec<HistoryPoint>, ApiError> {
        self.get_json(&format!(
            "/api/stations/{station_id}/channels/{channel}/history?hours={hours}"
        ))
        .await
    }

    /// Remove a station's project association. The station and its source
    /// data remain intact.
    pub async fn unlink_station(&self, project: &str, station_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/projects/{project}/stations/{station_id}"))
            .await
    }

    /// Delete a station together with its underlying source data. Irreversible.
    pub async fn delete_station(&self, station_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/stations/{station_id}?purge=true"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = ApiClient::new("https://api.example.org/", "token");
        assert_eq!(client.base_url, "https://api.example.org");

        let client = ApiClient::new("https://api.example.org///", "token");
        assert_eq!(client.base_url, "https://api.example.org");
    }
}
