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

//! Resolves the remote collection into a list of creatures.

use crate::config::SourceConfig;
use crate::error::{LoadError, LoadResult};
use crate::transport::{HttpTransport, Transport};
use crate::wire::{CreatureRecord, ResourceList};
use bestiary_core::Creature;
use serde::de::DeserializeOwned;
use std::time::Instant;

/// Fetches the listing, then every detail record behind it.
///
/// Detail records are resolved `max_concurrent_requests` at a time; the
/// batch fails as soon as one chunk reports a failure, and no partial list
/// is ever returned.
pub struct CatalogLoader<T: Transport> {
    transport: T,
    config: SourceConfig,
}

impl CatalogLoader<HttpTransport> {
    /// Creates a loader talking HTTP to the configured endpoint.
    pub fn http(config: SourceConfig) -> LoadResult<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::new(transport, config))
    }
}

impl<T: Transport> CatalogLoader<T> {
    /// Creates a loader over an arbitrary transport.
    pub fn new(transport: T, config: SourceConfig) -> Self {
        Self { transport, config }
    }

    /// The loader's configuration.
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Loads the whole catalog, in listing order.
    pub fn load(&self) -> LoadResult<Vec<Creature>> {
        let start_time = Instant::now();
        let listing_url = self.config.listing_url();
        log::info!("Fetching catalog listing from '{listing_url}'.");

        let listing: ResourceList = self.fetch_json(&listing_url)?;
        let urls: Vec<String> = listing.results.into_iter().map(|r| r.url).collect();
        log::debug!(
            "Listing returned {} references; resolving {} at a time.",
            urls.len(),
            self.config.concurrency()
        );

        let creatures = resolve_all(&urls, self.config.concurrency(), |url| self.resolve(url))?;

        log::info!(
            "Loaded {} creatures in {:.2}s.",
            creatures.len(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(creatures)
    }

    fn resolve(&self, url: &str) -> LoadResult<Creature> {
        let record: CreatureRecord = self.fetch_json(url)?;
        record
            .into_creature()
            .map_err(|source| LoadError::InvalidRecord {
                url: url.to_string(),
                source,
            })
    }

    fn fetch_json<D: DeserializeOwned>(&self, url: &str) -> LoadResult<D> {
        let body = self.transport.get_text(url)?;
        serde_json::from_str(&body).map_err(|source| LoadError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

/// Runs `resolve` over every URL with at most `width` worker threads alive.
///
/// Results come back in input order. URLs are processed in chunks of
/// `width`; each chunk is joined before the next one starts.
pub fn resolve_all<O, F>(urls: &[String], width: usize, resolve: F) -> LoadResult<Vec<O>>
where
    O: Send,
    F: Fn(&str) -> LoadResult<O> + Sync,
{
    let mut resolved = Vec::with_capacity(urls.len());

    for (index, chunk) in urls.chunks(width.max(1)).enumerate() {
        log::trace!("Resolving chunk {index} ({} references).", chunk.len());
        let results: Vec<LoadResult<O>> = std::thread::scope(|s| {
            let resolve = &resolve;
            let handles: Vec<_> = chunk
                .iter()
                .map(|url| (url, s.spawn(move || resolve(url.as_str()))))
                .collect();
            handles
                .into_iter()
                .map(|(url, handle)| {
                    handle
                        .join()
                        .unwrap_or_else(|_| Err(LoadError::WorkerPanicked { url: url.clone() }))
                })
                .collect()
        });

        for result in results {
            resolved.push(result?);
        }
    }

    Ok(resolved)
}

/// Loads the catalog over HTTP with the given configuration.
pub fn load_catalog(config: SourceConfig) -> LoadResult<Vec<Creature>> {
    CatalogLoader::http(config)?.load()
}
