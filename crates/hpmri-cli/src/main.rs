use std::fs;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use hpmri_core::{
    config, frame_count, render_picture, store_acquisition, thresholded_spectrum,
    AcquisitionConfig, MagnetType, ProcessingParams,
};

#[derive(Parser)]
#[command(name = "hpmri")]
#[command(version, about = "HP-MRI acquisition processing", long_about = None)]
struct Cli {
    /// Acquisition store configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one acquisition frame as a PNG
    Render {
        /// Frame index
        #[arg(value_name = "INDEX")]
        index: usize,

        /// Magnet type: "HUPC", "Clinical", or "MR Solutions"
        #[arg(short, long, value_name = "MAGNET", default_value = "HUPC")]
        magnet: String,

        /// CLAHE contrast strength (non-positive disables enhancement)
        #[arg(long, value_name = "FLOAT", default_value = "1.0")]
        contrast: f32,

        /// Output PNG path
        #[arg(short, long, value_name = "FILE")]
        out: PathBuf,
    },

    /// Count available frames for a magnet
    Count {
        /// Magnet type: "HUPC", "Clinical", or "MR Solutions"
        #[arg(short, long, value_name = "MAGNET", default_value = "HUPC")]
        magnet: String,
    },

    /// Print a thresholded EPSI series as JSON
    Spectrum {
        /// Dataset index
        #[arg(value_name = "INDEX")]
        index: usize,

        /// Magnet type: "HUPC", "Clinical", or "MR Solutions"
        #[arg(short, long, value_name = "MAGNET", default_value = "HUPC")]
        magnet: String,

        /// Suppression threshold
        #[arg(long, value_name = "FLOAT", default_value = "0.2")]
        threshold: f32,
    },

    /// Store a raw acquisition file in the upload directory
    Store {
        /// Source file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Target name (defaults to the source file name)
        #[arg(long, value_name = "NAME")]
        name: Option<String>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let handle = config::load_config(cli.config.as_deref());
    for warning in &handle.warnings {
        log::warn!("{}", warning);
    }
    if let Some(source) = &handle.source {
        log::debug!("using acquisition config {}", source.display());
    }

    if let Err(err) = run(cli.command, &handle.config) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(command: Commands, config: &AcquisitionConfig) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Render {
            index,
            magnet,
            contrast,
            out,
        } => {
            let magnet = MagnetType::from_str(&magnet)?;
            let params = ProcessingParams {
                contrast,
                ..ProcessingParams::default()
            };
            let png = render_picture(config, magnet, index, &params)?;
            fs::write(&out, png)?;
            println!("Wrote {}", out.display());
        }

        Commands::Count { magnet } => {
            let magnet = MagnetType::from_str(&magnet)?;
            println!("{}", frame_count(config, magnet));
        }

        Commands::Spectrum {
            index,
            magnet,
            threshold,
        } => {
            let magnet = MagnetType::from_str(&magnet)?;
            let params = ProcessingParams {
                threshold,
                ..ProcessingParams::default()
            };
            let series = thresholded_spectrum(config, magnet, index, &params)?;
            println!("{}", serde_json::to_string(&series)?);
        }

        Commands::Store { file, name } => {
            let contents = fs::read(&file)?;
            let name = match name {
                Some(name) => name,
                None => file
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            };
            let path = store_acquisition(config, &name, &contents)?;
            println!("Stored {}", path.display());
        }
    }

    Ok(())
}
