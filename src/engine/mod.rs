//! Compounding engine: equivalent values and per-month timelines

mod compounding;
mod request;
mod sweep;
mod timeline;

pub use compounding::{compute_equivalent_value, CompoundingResult};
pub use request::{CompoundingRequest, RequestDraft};
pub use sweep::sweep;
pub use timeline::{compute_timeline, Timeline, TimelineStep};

/// Growth factor for one month at `rate_percent` (6.5 -> 1.065)
#[inline]
pub(crate) fn monthly_factor(rate_percent: f64) -> f64 {
    1.0 + rate_percent / 100.0
}
