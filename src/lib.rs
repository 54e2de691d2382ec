//! # Survey Planner
//!
//! A terminal-based planner for regulatory building surveys: describe a
//! building's structure (sections, floors, spaces, rooms) and mark rooms
//! for inclusion in measurement reports (radiation, microclimate, noise,
//! ventilation).
//!
//! ## Features
//!
//! - Hierarchical building model with positional room identity
//! - Per-subsystem selection stores with explicit commit
//! - Structural-key snapshots that survive reloads and copies
//! - Copy/split operators and rule-based default selections
//! - Export selections to CSV and the structure to JSON
//!
//! ## Example
//!
//! ```no_run
//! use survey_planner::storage::load_project;
//!
//! let building = load_project("project.json").expect("Failed to load");
//! println!("Building: {}", building.name);
//! println!("Rooms: {}", building.total_rooms());
//! ```

pub mod error;
pub mod export;
pub mod model;
pub mod ops;
pub mod select;
pub mod storage;
pub mod ui;
