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

//! # Bestiary IO
//!
//! Fetches the remote collection once and hands the core a fully-resolved
//! list of creatures, or an error. Nothing here is retried or cached.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod loader;
pub mod transport;
pub mod wire;

pub use config::SourceConfig;
pub use error::{LoadError, LoadResult};
pub use loader::{load_catalog, resolve_all, CatalogLoader};
pub use transport::{HttpTransport, Transport};
