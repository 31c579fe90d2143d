pub mod calendar;
pub mod catalog;
pub mod collections;
pub mod delay;
pub mod dispatch;
pub mod text;

pub use crate::domain::model::{Day, Product, RatedItem, Value};
pub use crate::utils::error::Result;
