//! Data models

pub mod disease;
pub mod detection;
pub mod irrigation;

pub use disease::*;
pub use detection::*;
pub use irrigation::*;
