pub mod clock;
pub mod delivery;
pub mod picker;
pub mod render;

pub use crate::domain::model::{Good, GoodType, Pallet, Snapshot};
pub use crate::domain::ports::{Clock, ConfigProvider, ShipmentSource};
pub use crate::utils::error::Result;
