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

//! The seam between the loader and the network.

use crate::config::SourceConfig;
use crate::error::{LoadError, LoadResult};

/// Fetches the body of a URL as text.
///
/// Implementations must be shareable across the loader's worker threads.
pub trait Transport: Send + Sync {
    /// Performs a GET request and returns the response body.
    fn get_text(&self, url: &str) -> LoadResult<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get_text(&self, url: &str) -> LoadResult<String> {
        (**self).get_text(url)
    }
}

/// A [`Transport`] backed by a blocking HTTP client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Builds a client with the configured timeout and user agent.
    pub fn new(config: &SourceConfig) -> LoadResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| LoadError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get_text(&self, url: &str) -> LoadResult<String> {
        log::trace!("GET {url}");
        let transport_error = |e: reqwest::Error| LoadError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(transport_error)
    }
}
