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

//! Client library for the HydroWatch monitoring backend.
//!
//! Two layers, usable independently:
//!
//! - **Models**: station/channel/layer/observation types shared with the
//!   backend's JSON representation
//! - **Client**: async REST client with bearer authentication
//!
//! # Quick start
//!
//! ```no_run
//! use station_api::ApiClient;
//!
//! async fn print_inventory() {
//!     let client = ApiClient::new("https://api.example.org", "secret-token");
//!     match client.list_stations("demo").await {
//!         Ok(stations) => {
//!             for station in stations {
//!                 println!("{}: {:?}", station.name, station.position());
//!             }
//!         }
//!         Err(e) => eprintln!("fetch failed: {e}"),
//!     }
//! }
//! ```

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    Channel, ChannelReading, ExternalLayer, HistoryPoint, LayerBounds, RawSample, Station,
    StationStatus,
};
