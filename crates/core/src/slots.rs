use std::collections::BTreeSet;
use std::iter::FusedIterator;

use chrono::{NaiveDate, NaiveTime};
use serde::{Serialize, Serializer};

use crate::{
    datetime::parse_date,
    errors::SchedulingResult,
    models::{
        appointment::Appointment,
        business_hours::{BusinessHours, SlotInterval},
        slot::AvailableSlot,
    },
};

/// Bookable times for one day, from opening up to (not including) closing.
///
/// The sequence can be walked any number of times; each walk yields the same
/// slots in time order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableSlots {
    date: NaiveDate,
    opening_minute: u32,
    closing_minute: u32,
    step_minutes: u32,
    booked: BTreeSet<NaiveTime>,
}

impl AvailableSlots {
    pub fn new(
        date: NaiveDate,
        existing: &[Appointment],
        business_hours: &BusinessHours,
        interval: SlotInterval,
    ) -> Self {
        let booked = existing
            .iter()
            .filter(|appointment| appointment.date == date)
            .map(|appointment| appointment.time)
            .collect();

        Self {
            date,
            opening_minute: business_hours.start() * 60,
            closing_minute: business_hours.end() * 60,
            step_minutes: interval.minutes(),
            booked,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn iter(&self) -> AvailableSlotsIter<'_> {
        AvailableSlotsIter {
            slots: self,
            next_minute: self.opening_minute,
        }
    }

    /// Slots nobody has booked yet.
    pub fn open(&self) -> impl Iterator<Item = AvailableSlot> + '_ {
        self.iter().filter(|slot| !slot.is_booked)
    }

    pub fn len(&self) -> usize {
        self.iter().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> IntoIterator for &'a AvailableSlots {
    type Item = AvailableSlot;
    type IntoIter = AvailableSlotsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for AvailableSlots {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[derive(Debug, Clone)]
pub struct AvailableSlotsIter<'a> {
    slots: &'a AvailableSlots,
    next_minute: u32,
}

impl Iterator for AvailableSlotsIter<'_> {
    type Item = AvailableSlot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_minute >= self.slots.closing_minute {
            return None;
        }
        let time = NaiveTime::from_num_seconds_from_midnight_opt(self.next_minute * 60, 0)?;
        self.next_minute += self.slots.step_minutes;

        Some(AvailableSlot {
            time,
            is_booked: self.slots.booked.contains(&time),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .slots
            .closing_minute
            .saturating_sub(self.next_minute)
            .div_ceil(self.slots.step_minutes) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AvailableSlotsIter<'_> {}

impl FusedIterator for AvailableSlotsIter<'_> {}

/// Lists the day's slots between business hours, flagging booked ones.
///
/// # Errors
///
/// [`crate::errors::SchedulingError::UnparseableDate`] if `date` does not
/// parse.
pub fn list_available_slots(
    date: &str,
    existing: &[Appointment],
    business_hours: &BusinessHours,
    interval: SlotInterval,
) -> SchedulingResult<AvailableSlots> {
    let date = parse_date(date)?;
    Ok(AvailableSlots::new(date, existing, business_hours, interval))
}
