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


//! Bestiary: browse the creature catalog from the terminal.
//!
//! The catalog is fetched once at start-up on a background thread; every
//! command then runs against the in-memory session.

use anyhow::Result;
use bestiary_core::{CatalogSession, CategoryLabels, LabelSet, LoadStatus};
use bestiary_io::load_catalog;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

mod commands;
mod config;
mod loading;
mod render;

use commands::catalog::ListQuery;
use commands::Output;
use config::{AppConfig, Overrides};
use render::Style;

#[derive(Parser)]
#[command(name = "bestiary")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./Bestiary.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog endpoint
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Number of creatures to request from the listing
    #[arg(long, global = true)]
    limit: Option<u32>,

    /// Maximum number of detail requests in flight
    #[arg(long, global = true)]
    concurrency: Option<usize>,

    /// Category label set
    #[arg(long, global = true, value_enum)]
    labels: Option<LabelsArg>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog interactively (default)
    Browse,

    /// Print one page of the catalog
    List {
        /// Case-insensitive name filter
        #[arg(short, long)]
        search: Option<String>,

        /// Category code, or `all`
        #[arg(short = 't', long = "type")]
        category: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long)]
        page: Option<usize>,
    },

    /// List the categories present in the catalog
    Types,

    /// Show total, visible and category counts
    Stats,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum LabelsArg {
    /// Spanish category names
    Es,
    /// Raw category codes
    Raw,
}

impl From<LabelsArg> for LabelSet {
    fn from(arg: LabelsArg) -> Self {
        match arg {
            LabelsArg::Es => LabelSet::Es,
            LabelsArg::Raw => LabelSet::Raw,
        }
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    let cli = Cli::parse();
    Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_module("rustls", log::LevelFilter::Warn)
        .init();

    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(Overrides {
        endpoint: cli.endpoint,
        limit: cli.limit,
        concurrency: cli.concurrency,
        labels: cli.labels.map(LabelSet::from),
    });
    log::debug!("Effective configuration: {config:?}");

    let style = if cli.no_color {
        Style::PLAIN
    } else {
        Style { color: true }
    };
    let output = Output::new(CategoryLabels::for_set(config.labels), style, cli.json);

    let mut session = CatalogSession::new();
    if !output.is_json() {
        eprintln!("{}", output.renderer().view(&session.view()));
    }
    let source = config.source;
    let view = loading::spawn_load(move || load_catalog(source))?.deliver(&mut session);
    if output.is_json() && !matches!(view.status, LoadStatus::Ready) {
        output.view(&view, io::stdout().lock())?;
    }
    commands::ensure_ready(&view)?;

    let stdout = io::stdout().lock();
    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => commands::browse::run(&mut session, &output, io::stdin().lock(), stdout),
        Commands::List {
            search,
            category,
            page,
        } => commands::catalog::list(
            &mut session,
            &output,
            ListQuery {
                search,
                category,
                page,
            },
            stdout,
        ),
        Commands::Types => commands::catalog::types(&session, &output, stdout),
        Commands::Stats => commands::catalog::stats(&session, &output, stdout),
    }
}
