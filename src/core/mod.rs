pub mod adapter;
pub mod decorator;
pub mod demo;
pub mod facade;
pub mod notifiers;
pub mod proxy;

pub use crate::domain::ports::{Notifier, OutputSink, SharedSink};
pub use crate::utils::error::Result;
