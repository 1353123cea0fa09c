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

//! Errors raised while loading the catalog.

use bestiary_core::EntityError;
use thiserror::Error;

/// Why a catalog load failed. Any of these fails the whole batch.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request could not be sent or its body could not be read.
    #[error("Request to '{url}' failed: {message}")]
    Transport {
        /// The requested URL.
        url: String,
        /// The underlying client error.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("Request to '{url}' returned HTTP {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The body was not the expected JSON document.
    #[error("Malformed response from '{url}': {source}")]
    Decode {
        /// The requested URL.
        url: String,
        /// The JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The record decoded but does not form a valid creature.
    #[error("Invalid record from '{url}': {source}")]
    InvalidRecord {
        /// The requested URL.
        url: String,
        /// The violated invariant.
        #[source]
        source: EntityError,
    },

    /// A fan-out worker panicked before reporting its result.
    #[error("Worker resolving '{url}' panicked")]
    WorkerPanicked {
        /// The URL the worker was resolving.
        url: String,
    },

    /// The HTTP client could not be built.
    #[error("Could not build the HTTP client: {0}")]
    Client(String),
}

/// Convenience alias for loader results.
pub type LoadResult<T> = Result<T, LoadError>;
