use anyhow::Context;
use clap::{Parser, Subcommand};
use std::{cmp::min, fs::File, io, path::PathBuf, sync::Mutex};
use tracing::Level;
use tracing_subscriber::fmt::{layer, writer::BoxMakeWriter};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

mod tui;

/// Two players, one board, one screen.
#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Verbosity level.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// Write logs to this file instead of stderr.
    #[clap(long, value_name = "path")]
    log_file: Option<PathBuf>,

    /// Board width in pixels.
    #[clap(long, default_value_t = 600.0)]
    width: f32,

    /// Board height in pixels.
    #[clap(long, default_value_t = 600.0)]
    height: f32,

    #[clap(subcommand)]
    frontend: Option<Frontend>,
}

#[derive(Subcommand, Default, Clone, Copy, PartialEq, Eq)]
enum Frontend {
    /// Board in a window.
    #[default]
    Gui,
    /// Board drawn in the terminal, driven by mouse clicks.
    Tui,
}

impl Cli {
    fn init_logging(&self, frontend: Frontend) -> anyhow::Result<()> {
        let filter = Targets::new()
            .with_target("two_player_chess", self.verbosity)
            .with_target("engine", self.verbosity)
            .with_target("gui", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        // The terminal front end owns the screen, so its logs go to a file or nowhere.
        let writer = match (&self.log_file, frontend) {
            (Some(path), _) => {
                let file = File::create(path).with_context(|| format!("cannot open log file {}", path.display()))?;
                BoxMakeWriter::new(Mutex::new(file))
            }
            (None, Frontend::Tui) => BoxMakeWriter::new(io::sink),
            (None, Frontend::Gui) => BoxMakeWriter::new(io::stderr),
        };

        registry()
            .with(filter)
            .with(layer().with_ansi(self.log_file.is_none()).with_writer(writer))
            .try_init()?;

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let frontend = cli.frontend.unwrap_or_default();
    cli.init_logging(frontend)?;

    match frontend {
        Frontend::Gui => gui::run(gui::Config {
            screen_width: cli.width,
            screen_height: cli.height,
            ..gui::Config::default()
        }),
        Frontend::Tui => tui::run(),
    }
}
