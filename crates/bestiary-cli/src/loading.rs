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

//! Runs the catalog load off the main thread and hands the result back.

use anyhow::{Context, Result};
use bestiary_core::{CatalogSession, CatalogView, Creature};
use bestiary_io::LoadResult;
use flume::Receiver;
use std::thread;

/// The pending result of a background load.
pub struct PendingLoad {
    receiver: Receiver<LoadResult<Vec<Creature>>>,
}

/// Starts `load` on a dedicated thread.
pub fn spawn_load<F>(load: F) -> Result<PendingLoad>
where
    F: FnOnce() -> LoadResult<Vec<Creature>> + Send + 'static,
{
    let (sender, receiver) = flume::bounded(1);
    thread::Builder::new()
        .name("catalog-loader".to_string())
        .spawn(move || {
            if sender.send(load()).is_err() {
                log::warn!("Catalog load finished after its receiver was dropped.");
            }
        })
        .context("Failed to spawn the catalog loader thread")?;
    Ok(PendingLoad { receiver })
}

impl PendingLoad {
    /// Blocks until the load completes and delivers it to `session`.
    ///
    /// A loader thread that dies without sending anything counts as a
    /// failed load.
    pub fn deliver(self, session: &mut CatalogSession) -> CatalogView {
        match self.receiver.recv() {
            Ok(result) => session.finish_load(result),
            Err(_) => session.finish_load(Err::<Vec<Creature>, _>(
                "the loader stopped without a result",
            )),
        }
    }
}
