//! # Reusable UI Widgets
//!
//! Common widgets used across screens.

pub mod charts;
pub mod forms;
pub mod nav_bar;
pub mod tables;
