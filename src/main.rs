mod config;
mod grid;
mod help;
mod settings;
mod sim;
mod terminal;
mod ui;

use clap::Parser;
use config::LifeConfig;
use settings::Settings;
use sim::Simulation;
use std::io;
use terminal::Terminal;

#[derive(Parser)]
#[command(name = "termlife")]
#[command(author = "Terminal Art Generator")]
#[command(version = "0.1.0")]
#[command(about = "Interactive Conway's Game of Life on a toroidal grid", long_about = None)]
struct Cli {
    /// Board width in cells
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Board height in cells
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Frames between generations while running
    #[arg(short, long)]
    update_rate: Option<u32>,

    /// Render loop frames per second
    #[arg(short, long)]
    fps: Option<u32>,

    /// Random seed for reproducible randomization
    #[arg(short, long)]
    seed: Option<u64>,
}

/// CLI flags override the settings file, which overrides built-in defaults
fn resolve_config(cli: &Cli, settings: &Settings) -> LifeConfig {
    let defaults = LifeConfig::default();
    LifeConfig {
        width: cli.width.or(settings.board.width).unwrap_or(defaults.width),
        height: cli.height.or(settings.board.height).unwrap_or(defaults.height),
        update_rate: cli
            .update_rate
            .or(settings.board.update_rate)
            .unwrap_or(defaults.update_rate),
        fps: cli.fps.or(settings.ui.fps).unwrap_or(defaults.fps),
        seed: cli.seed,
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load();
    let config = resolve_config(&cli, &settings);

    let mut sim = match Simulation::new(&config) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("termlife: {}", err);
            std::process::exit(1);
        }
    };

    let mut term = Terminal::new()?;
    ui::run(&mut term, &mut sim, &config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_settings_and_defaults() {
        let cli = Cli {
            width: Some(10),
            height: None,
            update_rate: None,
            fps: Some(60),
            seed: Some(5),
        };
        let settings: Settings =
            toml::from_str("[board]\nwidth = 50\nheight = 40\n").unwrap();
        let config = resolve_config(&cli, &settings);
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 40);
        assert_eq!(config.update_rate, config::DEFAULT_UPDATE_RATE);
        assert_eq!(config.fps, 60);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn defaults_match_the_original_board() {
        let cli = Cli {
            width: None,
            height: None,
            update_rate: None,
            fps: None,
            seed: None,
        };
        let config = resolve_config(&cli, &Settings::default());
        assert_eq!(config.width, 17);
        assert_eq!(config.height, 29);
        assert_eq!(config.update_rate, 4);
    }
}
