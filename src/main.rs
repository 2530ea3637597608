use clap::{Parser, Subcommand};
use doomfire::config::{FireConfig, PrintConfig, RunConfig};
use doomfire::display;
use doomfire::settings::Settings;
use std::io;

/// Frame delay when neither the CLI nor the settings file picks one
const DEFAULT_TIME_STEP: f32 = 0.016;

#[derive(Parser)]
#[command(name = "doomfire")]
#[command(author = "Terminal Art Generator")]
#[command(version)]
#[command(about = "The classic Doom fire effect, rendered in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the fire live (q or Esc to quit, space to pause, 0-9 for speed)
    Run {
        /// Animation speed (seconds per frame)
        #[arg(short, long)]
        time: Option<f32>,

        /// Random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Simulate a number of frames and print the last one to stdout
    Print {
        /// Number of ticks to simulate before printing
        #[arg(short, long, default_value = "120")]
        frames: u32,

        /// Output width in terminal columns
        #[arg(short, long, default_value = "80")]
        cols: u16,

        /// Output height in terminal rows
        #[arg(short, long, default_value = "24")]
        rows: u16,

        /// Random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let cli = Cli::parse();
    let settings = Settings::load();

    match cli.command {
        Commands::Run { time, seed } => {
            let config = RunConfig {
                time_step: time
                    .or(settings.display.time_step)
                    .unwrap_or(DEFAULT_TIME_STEP)
                    .max(0.0)
                    .min(1.0),
                seed: seed.or(settings.display.seed),
            };
            display::run(FireConfig::default(), config)?;
        }
        Commands::Print { frames, cols, rows, seed } => {
            let config = PrintConfig {
                frames,
                cols,
                rows,
                seed: seed.or(settings.display.seed),
            };
            display::print(FireConfig::default(), config, &mut io::stdout().lock())?;
        }
    }

    Ok(())
}
