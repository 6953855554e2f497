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

//! Data model for the monitoring backend.
//!
//! Stations are georeferenced monitored points; each owns a set of named
//! channels (datastreams) whose live values are fetched separately and never
//! stored on the station itself. External layers are geoserver-hosted vector
//! layers that can be displayed on top of the station map.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Lifecycle status of a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StationStatus {
    Active,
    Alert,
    Inactive,
    #[default]
    Unknown,
}

impl StationStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Alert => "alert",
            Self::Inactive => "inactive",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a status string; anything unrecognized maps to `Unknown`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "active" => Self::Active,
            "alert" => Self::Alert,
            "inactive" => Self::Inactive,
            _ => Self::Unknown,
        }
    }
}

impl Serialize for StationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// A named, unit-labeled time-varying measurement belonging to a station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// Channel name, unique within its owning station.
    pub name: String,

    /// Display name; falls back to `name` when absent.
    #[serde(default)]
    pub label: Option<String>,

    /// Measurement unit (e.g. "°C", "m³/s").
    #[serde(default)]
    pub unit: Option<String>,
}

impl Channel {
    /// Display label, defaulting to the channel name.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// A georeferenced monitored point with zero or more channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    pub uuid: Uuid,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Both coordinates are required for map placement; a station missing
    /// either is never rendered.
    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub status: StationStatus,

    /// Record kind; "dataset" marks a virtual, non-physical record that is
    /// never placed on the map even when it has coordinates.
    #[serde(default)]
    pub station_type: Option<String>,

    /// Secondary stable identifier used to match geoserver features back to
    /// this station when numeric ids do not line up.
    #[serde(default)]
    pub external_ref: Option<String>,

    #[serde(default)]
    pub channels: Vec<Channel>,

    /// Opaque properties bag passed through from the backend.
    #[serde(default)]
    pub properties: serde_json::Value,
}

impl Station {
    /// Whether this is a virtual dataset record (never mapped).
    #[must_use]
    pub fn is_dataset(&self) -> bool {
        self.station_type.as_deref() == Some("dataset")
    }

    /// `(lat, lon)` when both coordinates are present.
    #[must_use]
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// An externally served thematic vector layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLayer {
    /// Identifier used in all layer-scoped requests.
    pub layer_name: String,

    /// Display name.
    pub title: String,

    #[serde(default)]
    pub is_public: bool,
}

/// Geographic extent of a layer, `[min_lon, min_lat, max_lon, max_lat]` on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct LayerBounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl From<[f64; 4]> for LayerBounds {
    fn from(b: [f64; 4]) -> Self {
        Self {
            min_lon: b[0],
            min_lat: b[1],
            max_lon: b[2],
            max_lat: b[3],
        }
    }
}

impl From<LayerBounds> for [f64; 4] {
    fn from(b: LayerBounds) -> Self {
        [b.min_lon, b.min_lat, b.max_lon, b.max_lat]
    }
}

/// Latest observed value for a single channel. Ephemeral; re-fetched on every
/// poll tick and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelReading {
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

/// One sample from the legacy latest-batch endpoint, used for stations that
/// expose raw data without a channel list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSample {
    pub channel: String,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

/// One point of a channel's history, for charting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station_json(extra: &str) -> String {
        format!(
            r#"{{"id": 7, "uuid": "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8", "name": "Rhone upstream"{extra}}}"#
        )
    }

    #[test]
    fn station_defaults_apply_for_sparse_records() {
        let station: Station = serde_json::from_str(&station_json("")).unwrap();
        assert_eq!(station.status, StationStatus::Unknown);
        assert!(station.channels.is_empty());
        assert!(station.position().is_none());
        assert!(!station.is_dataset());
    }

    #[test]
    fn dataset_records_are_flagged() {
        let station: Station =
            serde_json::from_str(&station_json(r#", "station_type": "dataset""#)).unwrap();
        assert!(station.is_dataset());
    }

    #[test]
    fn unrecognized_status_maps_to_unknown() {
        assert_eq!(StationStatus::parse("decommissioned"), StationStatus::Unknown);
        assert_eq!(StationStatus::parse("alert"), StationStatus::Alert);
    }

    #[test]
    fn layer_bounds_decode_from_bbox_array() {
        let bounds: LayerBounds = serde_json::from_str("[6.1, 46.0, 7.2, 46.8]").unwrap();
        assert!((bounds.min_lon - 6.1).abs() < f64::EPSILON);
        assert!((bounds.max_lat - 46.8).abs() < f64::EPSILON);
    }

    #[test]
    fn channel_label_falls_back_to_name() {
        let channel = Channel {
            name: "water_temp".to_string(),
            label: None,
            unit: Some("°C".to_string()),
        };
        assert_eq!(channel.display_label(), "water_temp");
    }
}
