//! HTTP handlers

pub mod health;
pub mod detection;
pub mod history;
pub mod diseases;
pub mod irrigation;
