use smartstring::{LazyCompact, SmartString};

pub mod case_convention;
pub mod command;
pub mod config;
pub mod document;
pub mod history;
pub mod selection;
pub mod transaction;

pub type Tendril = SmartString<LazyCompact>;
