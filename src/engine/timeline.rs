//! Per-month timeline used to drive charts

use super::{monthly_factor, CompoundingRequest};
use crate::calendar::DateCursor;
use crate::error::Result;
use crate::rates::RateTable;
use serde::Serialize;

/// Snapshot of the running amount at one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimelineStep {
    pub cursor: DateCursor,
    /// Running amount after every month before `cursor` was applied
    pub amount: f64,
    /// Rate applied on the way into this step; 0 for the first step and for gaps
    pub step_rate_percent: f64,
    /// Change relative to the starting amount, in percent
    pub cumulative_change_percent: f64,
}

/// Ordered month-by-month snapshots, one step per calendar month
///
/// Step 0 is the starting month with the original amount. Each following step
/// is exactly one month after the previous one. Months without an observed
/// rate still produce a step that carries the previous amount forward, so a
/// chart shows a flat segment across the gap rather than compressing it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    steps: Vec<TimelineStep>,
}

impl Timeline {
    pub fn steps(&self) -> &[TimelineStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// A line needs at least two points
    pub fn is_plottable(&self) -> bool {
        self.steps.len() > 1
    }

    pub fn first(&self) -> Option<&TimelineStep> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&TimelineStep> {
        self.steps.last()
    }

    /// Steps carrying a monthly rate (everything after the starting point)
    pub fn rate_bars(&self) -> &[TimelineStep] {
        self.steps.get(1..).unwrap_or(&[])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimelineStep> {
        self.steps.iter()
    }
}

impl IntoIterator for Timeline {
    type Item = TimelineStep;
    type IntoIter = std::vec::IntoIter<TimelineStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineStep;
    type IntoIter = std::slice::Iter<'a, TimelineStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl CompoundingRequest {
    /// Walk the range like `compound`, recording a step per calendar month
    ///
    /// Degenerate ranges produce an empty timeline.
    pub fn timeline(&self, table: &RateTable) -> Timeline {
        if self.is_degenerate() {
            return Timeline::default();
        }

        let start = self.amount();
        let mut steps = Vec::with_capacity(self.span_months() as usize + 1);
        steps.push(TimelineStep {
            cursor: self.from(),
            amount: start,
            step_rate_percent: 0.0,
            cumulative_change_percent: 0.0,
        });

        // Same accumulation order as `compound`, so the last step matches its final amount
        let mut cumulative = 1.0;
        let mut cursor = self.from();

        while cursor < self.to() {
            let rate = table.rate_at(cursor);
            if let Some(rate) = rate {
                cumulative *= monthly_factor(rate);
            }
            cursor = cursor.next();

            let amount = start * cumulative;
            steps.push(TimelineStep {
                cursor,
                amount,
                step_rate_percent: rate.unwrap_or(0.0),
                cumulative_change_percent: (amount / start - 1.0) * 100.0,
            });
        }

        Timeline { steps }
    }
}

/// Month-by-month timeline of `amount` from (from_year, from_month) to (to_year, to_month)
pub fn compute_timeline(
    table: &RateTable,
    amount: f64,
    from_year: i32,
    from_month: u32,
    to_year: i32,
    to_month: u32,
) -> Result<Timeline> {
    let request = CompoundingRequest::from_parts(amount, from_year, from_month, to_year, to_month)?;
    Ok(request.timeline(table))
}
