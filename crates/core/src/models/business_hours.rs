use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::errors::{SchedulingError, SchedulingResult};

/// Daily booking window `[start, end)` in whole hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBusinessHours")]
pub struct BusinessHours {
    start: u32,
    end: u32,
}

#[derive(Deserialize)]
struct RawBusinessHours {
    start: u32,
    end: u32,
}

impl BusinessHours {
    /// # Errors
    ///
    /// [`SchedulingError::InvalidBusinessHours`] unless `start < end <= 23`.
    pub fn new(start: u32, end: u32) -> SchedulingResult<Self> {
        if start >= end || end > 23 {
            return Err(SchedulingError::InvalidBusinessHours { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn contains_hour(&self, hour: u32) -> bool {
        (self.start..self.end).contains(&hour)
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self { start: 9, end: 17 }
    }
}

impl TryFrom<RawBusinessHours> for BusinessHours {
    type Error = SchedulingError;

    fn try_from(raw: RawBusinessHours) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

/// Step between listed slots, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SlotInterval(u32);

impl SlotInterval {
    const MINUTES_PER_DAY: u32 = 24 * 60;

    /// # Errors
    ///
    /// [`SchedulingError::InvalidSlotInterval`] for zero or more than a day.
    pub fn new(minutes: u32) -> SchedulingResult<Self> {
        if minutes == 0 || minutes > Self::MINUTES_PER_DAY {
            return Err(SchedulingError::InvalidSlotInterval { minutes });
        }
        Ok(Self(minutes))
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.0))
    }
}

impl Default for SlotInterval {
    fn default() -> Self {
        Self(30)
    }
}

impl TryFrom<u32> for SlotInterval {
    type Error = SchedulingError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl From<SlotInterval> for u32 {
    fn from(interval: SlotInterval) -> Self {
        interval.0
    }
}
