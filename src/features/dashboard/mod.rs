//! Dashboard Feature
//!
//! The single page of the app: overview gauge, stat cards, graph card,
//! and the prediction panel.

pub mod controller;
pub mod page;
