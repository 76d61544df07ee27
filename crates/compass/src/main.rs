use clap::{Parser, Subcommand};
use compass::config;
use compass::gui::app::AppModel;
use compass::sys::runtime;
use radial::{
    ArcSpec, DialKind, Document, ElevationControl, HeadingControl, Rect, build_arc,
};
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "compass", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read dial settings from this file instead of the user config directory
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Write the stock settings to the config file if it does not exist yet
    InitConfig,
    /// Print the slice paths a dial draws (heading, elevation, or both)
    Paths {
        /// Only print the paths of this dial ("heading"/"compass"/"h" or "elevation"/"tilt"/"e")
        dial: Option<DialKind>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };

    match cli.command {
        Some(Commands::InitConfig) => {
            config::write_default_config(&config_path)?;
            println!("{}", config_path.display());
            Ok(())
        }
        Some(Commands::Paths { dial }) => print_paths(&config::load_config(&config_path)?, dial),
        None => {
            let config = config::load_or_default(&config_path);
            let (tx, rx) = async_channel::bounded(32);

            // Start Background Services
            runtime::start_background_services(config_path.clone(), tx);

            let app = RelmApp::new("org.radial.compass").with_args(Vec::new());
            app.run::<AppModel>((config, config_path, rx));
            Ok(())
        }
    }
}

fn print_paths(config: &config::Config, only: Option<DialKind>) -> anyhow::Result<()> {
    let document = Document::new();
    let wanted = |kind| only.is_none_or(|k| k == kind);

    if wanted(DialKind::Heading) {
        let heading =
            HeadingControl::mount(&config.heading, 0.0, &document, Rect::default(), |_| {})?;
        for spec in heading.exclusion_arcs() {
            print_slice(DialKind::Heading, "excluded", &spec);
        }
    }

    if wanted(DialKind::Elevation) {
        let elevation =
            ElevationControl::mount(&config.elevation, 0.0, &document, Rect::default(), |_| {})?;
        print_slice(DialKind::Elevation, "highlight", &elevation.highlight_arc());
        for spec in elevation.exclusion_arcs() {
            print_slice(DialKind::Elevation, "excluded", &spec);
        }
    }

    Ok(())
}

fn print_slice(kind: DialKind, role: &str, spec: &ArcSpec) {
    println!(
        "{kind} {role} {:.0}..{:.0}: {}",
        spec.start_angle,
        spec.end_angle,
        build_arc(spec)
    );
}
