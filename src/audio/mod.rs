//! Audio Module
//!
//! Padding arithmetic over file sizes, plus WAV header inspection.

pub mod padding;
pub mod wav;

pub use padding::{PaddingPlan, byte_rate, padding_seconds, plan, target_size};
pub use wav::WavHeader;
