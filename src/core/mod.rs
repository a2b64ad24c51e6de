pub mod nice_number;
pub mod scale;
pub mod significant_digits;
pub mod ticks;
pub mod types;

pub use nice_number::{NiceMode, nice_number};
pub use scale::Scale;
pub use significant_digits::{NAN_LABEL, format_significant_digits};
pub use ticks::{
    DEFAULT_TICK_COUNT, MAX_TICK_COUNT, Tick, TickGenerator, TickSet, TickValues, loose_label,
    tight_label,
};
pub use types::{AXIS_RANGE_EPSILON, AxisRange, DataPoint, Margins, Viewport};
