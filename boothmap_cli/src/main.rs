// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `boothmap`: a headless front end for the venue map.
//!
//! Each subcommand builds a [`Store`], drives it with the same actions an
//! interactive front end would send, and prints the resulting view: the
//! viewport as text, the directory and detail panels as text, or the map as
//! an SVG document.

mod session;
mod svg;
mod text;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use boothmap_app::config::{self, VenueConfig};
use boothmap_app::dataset::Venue;
use boothmap_app::error::VenueError;
use boothmap_app::{Action, Store};
use boothmap_catalog::BoothId;
use boothmap_directory::DirectoryFilter;
use clap::{Args, Parser, Subcommand};
use kurbo::Size;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "boothmap=info";

#[derive(Parser, Debug)]
#[command(name = "boothmap", version, about = "Headless venue booth map")]
struct Cli {
    /// Config file (TOML). Built-in defaults are used when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Booth dataset (TOML). The built-in venue is used when omitted.
    #[arg(short, long, global = true)]
    dataset: Option<PathBuf>,

    /// Log filter directive, e.g. `boothmap=debug`. Overrides `RUST_LOG`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone, Copy)]
struct ContainerArgs {
    /// Container width in pixels.
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Container height in pixels.
    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

impl ContainerArgs {
    fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fit the map into a container and print the resulting view.
    Fit {
        #[command(flatten)]
        container: ContainerArgs,
    },
    /// Pick a booth from the directory and print where the view settles.
    Pan {
        #[command(flatten)]
        container: ContainerArgs,

        /// Booth number to pan to.
        #[arg(long, value_parser = parse_booth)]
        booth: BoothId,
    },
    /// List the directory for a search and filter.
    Directory {
        /// Search text matched against numbers, names and representatives.
        #[arg(long, default_value = "")]
        search: String,

        /// `all`, `assigned` or `available`.
        #[arg(long, default_value_t = DirectoryFilter::All)]
        filter: DirectoryFilter,

        /// Booth to mark as selected.
        #[arg(long, value_parser = parse_booth)]
        selected: Option<BoothId>,
    },
    /// Show the detail panel for a booth, or the empty panel.
    Details {
        /// Booth number to select.
        #[arg(long, value_parser = parse_booth)]
        booth: Option<BoothId>,
    },
    /// Render the map as SVG.
    Render {
        #[command(flatten)]
        container: ContainerArgs,

        /// Pan to this booth as a directory pick does.
        #[arg(long, value_parser = parse_booth)]
        booth: Option<BoothId>,

        /// Select this booth as a click does, without panning.
        #[arg(long, value_parser = parse_booth)]
        select: Option<BoothId>,

        /// Zoom steps to apply after fitting; negative values zoom out.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        zoom: i32,

        /// Output file. Standard output when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_booth(s: &str) -> Result<BoothId, String> {
    s.trim()
        .parse::<u32>()
        .ok()
        .and_then(BoothId::new)
        .ok_or_else(|| format!("`{s}` is not a booth number"))
}

fn init_logging(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => {
            EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
        }
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_store(cli: &Cli) -> Result<Store, VenueError> {
    let config: VenueConfig = config::load_or_default(cli.config.as_deref())?;
    let venue = Venue::load_or_builtin(cli.dataset.as_deref())?;
    Ok(Store::new(venue, config))
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), VenueError> {
    let mut store = load_store(cli)?;
    match &cli.command {
        Command::Fit { container } => {
            session::mount(&mut store, container.size());
            out.write_all(text::viewport_text(&store.state().viewport().debug_info()).as_bytes())?;
        }
        Command::Pan { container, booth } => {
            session::mount(&mut store, container.size());
            store.dispatch(Action::DirectorySelect(*booth));
            session::settle(&mut store);
            let view = store.view();
            out.write_all(text::viewport_text(&view.state.viewport().debug_info()).as_bytes())?;
            let panel = view.details();
            if panel.open {
                out.write_all(text::details_text(&panel).as_bytes())?;
            } else {
                writeln!(out, "booth {booth} has no map position")?;
            }
        }
        Command::Directory {
            search,
            filter,
            selected,
        } => {
            store.dispatch(Action::SetSearch(search.clone()));
            store.dispatch(Action::SetFilter(*filter));
            if let Some(id) = selected {
                store.dispatch(Action::BoothClicked(*id));
            }
            out.write_all(text::directory_text(&store.view().directory(), *filter).as_bytes())?;
        }
        Command::Details { booth } => {
            if let Some(id) = booth {
                store.dispatch(Action::BoothClicked(*id));
            }
            out.write_all(text::details_text(&store.view().details()).as_bytes())?;
        }
        Command::Render {
            container,
            booth,
            select,
            zoom,
            output,
        } => {
            session::mount(&mut store, container.size());
            if let Some(id) = booth {
                store.dispatch(Action::DirectorySelect(*id));
            }
            if let Some(id) = select {
                store.dispatch(Action::BoothClicked(*id));
            }
            let step = if *zoom < 0 {
                Action::ZoomOut
            } else {
                Action::ZoomIn
            };
            for _ in 0..zoom.unsigned_abs() {
                store.dispatch(step.clone());
            }
            session::settle(&mut store);

            let svg = svg::render_scene(&store.view().scene(), container.size());
            match output {
                Some(path) => {
                    std::fs::write(path, svg)?;
                    info!("wrote {}", path.display());
                }
                None => out.write_all(svg.as_bytes())?,
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let stdout = io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
