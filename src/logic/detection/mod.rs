//! Detection Module
//!
//! Mocked disease classifier. No image is ever inspected: a uniform draw is
//! mapped through fixed probability bands onto the knowledge base.
//!
//! ## Structure
//! - `random`: injectable uniform random sources
//! - `delay`: injectable simulated latency
//! - `bands`: selection bands and confidence constants
//! - `selector`: `DiseaseDetector`, which assembles the result
//!
//! ## Usage
//! ```ignore
//! use crate::logic::detection::{DiseaseDetector, ThreadRandom, TokioDelay, DEFAULT_DETECTION_DELAY};
//!
//! let detector = DiseaseDetector::with_parts(ThreadRandom, TokioDelay, DEFAULT_DETECTION_DELAY);
//! let result = detector.detect("blob:http://localhost/abc").await;
//! println!("{} ({:.0}%)", result.disease, result.confidence * 100.0);
//! ```

pub mod random;
pub mod delay;
pub mod bands;
pub mod selector;

pub use random::{RandomSource, ThreadRandom, SequenceRandom};
pub use delay::{Delay, TokioDelay, NoDelay};
pub use bands::{select_index, SELECTION_BANDS, FALLBACK_INDEX};
pub use selector::{DiseaseDetector, DEFAULT_DETECTION_DELAY};
