use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::nice_number::{NiceMode, nice_number};
use crate::error::{ChartError, ChartResult};

/// Number of ticks the step selection aims for.
pub const DEFAULT_TICK_COUNT: usize = 5;

/// Largest accepted target tick count.
pub const MAX_TICK_COUNT: usize = 256;

/// Hard cap on emitted grid values. A nice step never falls below two thirds
/// of `range / (tick_count - 1)`, so any count up to [`MAX_TICK_COUNT`] fits.
const MAX_GRID_STEPS: u32 = 1024;

/// Interior tight ticks closer than `step * tolerance` to an end are dropped.
const COINCIDENT_TICK_TOLERANCE: f64 = 1e-9;

pub type TickValues = SmallVec<[f64; 16]>;

/// Tick value generator with a fixed target count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickGenerator {
    tick_count: usize,
}

impl Default for TickGenerator {
    fn default() -> Self {
        Self {
            tick_count: DEFAULT_TICK_COUNT,
        }
    }
}

impl TickGenerator {
    pub fn new(tick_count: usize) -> ChartResult<Self> {
        if !(2..=MAX_TICK_COUNT).contains(&tick_count) {
            return Err(ChartError::InvalidArgument(format!(
                "tick count must be in 2..={MAX_TICK_COUNT}, got {tick_count}"
            )));
        }
        Ok(Self { tick_count })
    }

    #[must_use]
    pub fn tick_count(self) -> usize {
        self.tick_count
    }

    /// Loose labeling: every multiple of a nice step from
    /// `floor(min / step) * step` to `ceil(max / step) * step`.
    ///
    /// The result may extend past `[min, max]`; callers widen the displayed
    /// axis range to cover it.
    pub fn loose(self, min: f64, max: f64) -> ChartResult<TickValues> {
        let span = validated_span(min, max)?;
        let range = nice_number(span, NiceMode::Ceil);
        let step = self.step_for(range)?;

        let grid_min = (min / step).floor() * step;
        let grid_max = (max / step).ceil() * step;

        let mut ticks = TickValues::new();
        for value in grid_values(grid_min, grid_max, step)? {
            push_increasing(&mut ticks, value);
        }

        debug!(min, max, step, ticks = ?ticks.as_slice(), "generated loose ticks");
        Ok(ticks)
    }

    /// Tight labeling: the literal `min`, nice interior ticks, the literal `max`.
    pub fn tight(self, min: f64, max: f64) -> ChartResult<TickValues> {
        let span = validated_span(min, max)?;
        let range = nice_number(span, NiceMode::Round);
        let step = self.step_for(range)?;

        let grid_min = (min / step).ceil() * step;
        let grid_max = (max / step).floor() * step;
        let tolerance = step * COINCIDENT_TICK_TOLERANCE;

        let mut ticks = TickValues::new();
        ticks.push(min);
        for value in grid_values(grid_min, grid_max, step)? {
            if value > min + tolerance && value < max - tolerance {
                push_increasing(&mut ticks, value);
            }
        }
        ticks.push(max);

        debug!(min, max, step, ticks = ?ticks.as_slice(), "generated tight ticks");
        Ok(ticks)
    }

    fn step_for(self, range: f64) -> ChartResult<f64> {
        let step = nice_number(range / (self.tick_count - 1) as f64, NiceMode::Round);
        if !step.is_finite() || step <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "tick step is not representable for range {range}"
            )));
        }
        Ok(step)
    }
}

/// Loose ticks with [`DEFAULT_TICK_COUNT`].
pub fn loose_label(min: f64, max: f64) -> ChartResult<TickValues> {
    TickGenerator::default().loose(min, max)
}

/// Tight ticks with [`DEFAULT_TICK_COUNT`].
pub fn tight_label(min: f64, max: f64) -> ChartResult<TickValues> {
    TickGenerator::default().tight(min, max)
}

fn validated_span(min: f64, max: f64) -> ChartResult<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ChartError::InvalidData(
            "tick bounds must be finite".to_owned(),
        ));
    }
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "tick bounds must satisfy min < max, got [{min}, {max}]"
        )));
    }
    Ok(span)
}

/// Multiples of `step` from `start` while `value <= end + step / 2`.
///
/// Fails instead of truncating when the grid would exceed [`MAX_GRID_STEPS`].
fn grid_values(start: f64, end: f64, step: f64) -> ChartResult<impl Iterator<Item = f64>> {
    let limit = end + 0.5 * step;
    let steps = ((limit - start) / step).floor();
    if steps >= f64::from(MAX_GRID_STEPS) {
        return Err(ChartError::InvalidData(format!(
            "tick grid [{start}, {end}] with step {step} exceeds {MAX_GRID_STEPS} values"
        )));
    }
    Ok((0..MAX_GRID_STEPS)
        .map(move |index| start + f64::from(index) * step)
        .take_while(move |value| *value <= limit))
}

fn push_increasing(ticks: &mut TickValues, value: f64) {
    if ticks.last().is_none_or(|last| value > *last) {
        ticks.push(value);
    }
}

/// One labeled tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Ordered ticks of one axis, strictly increasing by value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickSet {
    ticks: Vec<Tick>,
}

impl TickSet {
    #[must_use]
    pub fn new(ticks: Vec<Tick>) -> Self {
        Self { ticks }
    }

    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.ticks.iter().map(|tick| tick.value)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.ticks.iter().map(|tick| tick.label.as_str())
    }

    #[must_use]
    pub fn first(&self) -> Option<&Tick> {
        self.ticks.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Tick> {
        self.ticks.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{TickValues, grid_values, push_increasing};

    #[test]
    fn grid_includes_end_within_half_step() {
        let values: Vec<f64> = grid_values(0.0, 1.0, 0.25).expect("grid").collect();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn oversized_grid_is_an_error_not_a_prefix() {
        assert!(grid_values(0.0, 10.0, 0.001).is_err());
    }

    #[test]
    fn push_increasing_skips_values_that_do_not_advance() {
        let mut ticks = TickValues::new();
        push_increasing(&mut ticks, 1.0);
        push_increasing(&mut ticks, 1.0);
        push_increasing(&mut ticks, 0.5);
        push_increasing(&mut ticks, 2.0);
        assert_eq!(ticks.as_slice(), &[1.0, 2.0]);
    }
}
