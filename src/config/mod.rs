use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::utils::error::{DrillError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-drills")]
#[command(about = "Runs a set of small standalone coding drills")]
pub struct CliConfig {
    /// Input for the delayed-square drill.
    #[arg(long, default_value = "4", allow_hyphen_values = true)]
    pub square: f64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.square.is_finite() {
            return Err(DrillError::ConfigError {
                message: format!("--square must be a finite number, got {}", self.square),
            });
        }
        Ok(())
    }
}
