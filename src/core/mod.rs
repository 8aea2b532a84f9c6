//! Building blocks shared by every part of the engine.

pub mod indicator_type;
pub mod numeric;
pub mod period;

pub use indicator_type::IndicatorType;
pub use period::{to_monthly, Frequency, FrequencyPeriod, Period, Volume, VolumePeriod};
