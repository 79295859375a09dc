pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};
pub use config::SourceSettings;

pub use adapters::HttpShipmentSource;
pub use crate::core::delivery::{next_delivery_day, validate_delivery_date, Rejection};
pub use crate::core::picker::{Picker, Submission};
pub use crate::core::render::{render_sorted, render_unsorted, render_views, ShipmentViews};
pub use domain::ports::{FixedClock, SystemClock};
pub use utils::error::{PickerError, Result};
