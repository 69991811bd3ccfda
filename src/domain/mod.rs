//! Domain - Pure Data Structures and Protocol Types
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod config;
pub mod prediction;
pub mod snapshot;
