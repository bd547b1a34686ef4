//! Core logic
//!
//! - `knowledge`: static disease catalog
//! - `detection`: simulated classifier over the catalog
//! - `severity`: badge colors
//! - `upload`: pre-detection checks
//! - `history`: recent detections
//! - `irrigation`: irrigation dashboard simulation

// Allow unused - test doubles and index lookups are only reached from tests
#![allow(unused)]

pub mod knowledge;
pub mod detection;
pub mod severity;
pub mod upload;
pub mod history;
pub mod irrigation;
