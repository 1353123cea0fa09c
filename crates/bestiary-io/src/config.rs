// Copyright 2025 eraflo
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

use serde::Deserialize;
use std::time::Duration;

/// Collection endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://pokeapi.co/api/v2/pokemon";

/// Where and how the catalog is fetched.
///
/// Every field has a default, so a partial `[source]` table is enough.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// The collection-listing endpoint.
    pub endpoint: String,
    /// How many references to request from the listing.
    pub limit: u32,
    /// Upper bound on simultaneous detail requests.
    pub max_concurrent_requests: usize,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            limit: 150,
            max_concurrent_requests: 16,
            timeout_secs: 10,
            user_agent: concat!("bestiary/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl SourceConfig {
    /// The listing URL, with the configured limit.
    pub fn listing_url(&self) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}limit={}", self.endpoint, separator, self.limit)
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Fan-out width, never below one.
    pub fn concurrency(&self) -> usize {
        self.max_concurrent_requests.max(1)
    }
}
