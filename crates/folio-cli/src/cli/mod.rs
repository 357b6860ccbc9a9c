//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::config::{self, paths};
use folio_core::interrupt;
use folio_core::logging::{self, LogTarget};
use folio_core::store::NewGalleryImage;
use folio_core::tabs::ViewId;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Terminal portfolio with typed-out text reveals")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// View shown at startup: home, projects or gallery (overrides config)
    #[arg(long, value_name = "VIEW")]
    view: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Type a line of text out to stdout
    Reveal {
        /// Text to reveal
        text: String,

        /// Wait before the first character (milliseconds)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        delay_ms: f64,

        /// Time between characters (milliseconds)
        #[arg(long, default_value_t = 30.0, allow_negative_numbers = true)]
        step_ms: f64,
    },

    /// Manage gallery images in the store
    Gallery {
        #[command(subcommand)]
        command: GalleryCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum GalleryCommands {
    /// List stored images in display order
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Add an image row
    Add {
        #[arg(long)]
        title: String,

        /// Public URL of the image
        #[arg(long)]
        image_url: String,

        #[arg(long)]
        alt_text: String,

        #[arg(long)]
        description: Option<String>,

        /// Position in the gallery (ascending)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        display_order: i32,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Create a default config file
    Init,
    /// Print a fresh default config
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    interrupt::init()?;

    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;

    let Cli { command, view } = cli;

    // default to the interactive portfolio
    let Some(command) = command else {
        let start_view = match view.as_deref() {
            Some(view) => view.parse::<ViewId>()?,
            None => config.start_view,
        };
        // stderr belongs to the alternate screen, so logs go to a file
        let _log_guard = logging::init(
            &LogTarget::File(paths::logs_dir()),
            config.log_level.as_deref(),
        )?;
        return commands::view::run(&config, start_view).await;
    };

    let _log_guard = logging::init(&LogTarget::Stderr, config.log_level.as_deref())?;

    match command {
        Commands::Reveal {
            text,
            delay_ms,
            step_ms,
        } => commands::reveal::run(&text, delay_ms, step_ms).await,
        Commands::Gallery { command } => match command {
            GalleryCommands::List { json } => commands::gallery::list(&config, json).await,
            GalleryCommands::Add {
                title,
                image_url,
                alt_text,
                description,
                display_order,
            } => {
                let image = NewGalleryImage {
                    title,
                    description,
                    image_url,
                    alt_text,
                    display_order,
                };
                commands::gallery::add(&config, &image).await
            }
        },
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        },
    }
}
