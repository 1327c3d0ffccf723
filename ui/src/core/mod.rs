//! Platform-agnostic helpers shared by the components.

pub mod calendar;
