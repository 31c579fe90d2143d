pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::calendar::{day_type, DayType};
pub use core::catalog::{filter_by_rating, most_expensive, MIN_RATING};
pub use core::collections::concatenate;
pub use core::delay::{delayed_square, SQUARE_DELAY};
pub use core::dispatch::process_value;
pub use core::text::format_string;
pub use domain::model::{Day, Product, RatedItem, Value};
pub use domain::vehicle::{Car, Vehicle};
pub use utils::error::{DrillError, Result};
