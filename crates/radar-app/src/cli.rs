use clap::Parser;

use radar_config::validation::MAX_ROTATION_SPEED;
use radar_config::RadarConfig;

/// Radar Scope: a rotating 3D radar widget in a window.
#[derive(Parser, Debug)]
#[command(name = "radar-scope", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter directive override (e.g. `radar=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Seed for reproducible blip placement.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Rotation speed in degrees per second.
    #[arg(long, value_parser = parse_rotation_speed)]
    pub rotation_speed: Option<f64>,

    /// Disable the pulse animation.
    #[arg(long)]
    pub no_pulse: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut RadarConfig) {
        if let Some(seed) = self.seed {
            config.blips.seed = Some(seed);
        }
        if let Some(speed) = self.rotation_speed {
            config.radar.rotation_speed = speed;
        }
        if self.no_pulse {
            config.radar.pulse_enabled = false;
        }
    }
}

fn parse_rotation_speed(s: &str) -> Result<f64, String> {
    let speed: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !speed.is_finite() || !(0.0..=MAX_ROTATION_SPEED).contains(&speed) {
        return Err(format!("must be between 0 and {MAX_ROTATION_SPEED}"));
    }
    Ok(speed)
}

pub fn parse() -> Args {
    Args::parse()
}
