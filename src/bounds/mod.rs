//! Bounding envelopes and envelope-based candidate search.

mod envelope;
mod sweep;

pub use envelope::Envelope;
pub(crate) use sweep::overlapping_pairs;
