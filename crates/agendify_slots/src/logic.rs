// --- File: crates/agendify_slots/src/logic.rs ---
use agendify_common::{ScheduleRecord, ServiceRecord};
use agendify_config::{EmptyWorkDaysPolicy, SlotsConfig, UnknownWorkDayPolicy};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::error::SlotError;
use crate::weekday::WorkDays;

/// Minutes since midnight.
pub type Minute = i32;

pub const MINUTES_PER_DAY: Minute = 24 * 60;

/// Policies applied when turning a remote service record into a schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotPolicy {
    pub empty_work_days: EmptyWorkDaysPolicy,
    pub unknown_work_day: UnknownWorkDayPolicy,
}

impl From<&SlotsConfig> for SlotPolicy {
    fn from(config: &SlotsConfig) -> Self {
        Self {
            empty_work_days: config.empty_work_days,
            unknown_work_day: config.unknown_work_day,
        }
    }
}

/// Scheduling configuration of one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSchedule {
    pub work_days: WorkDays,
    /// Opening time, minute of day.
    pub start_time: Minute,
    /// Closing time, minute of day. Appointments must end by then.
    pub end_time: Minute,
    /// Minutes per appointment.
    pub duration: Minute,
    /// Minutes between candidate start times.
    pub interval: Minute,
    pub empty_work_days: EmptyWorkDaysPolicy,
}

impl ServiceSchedule {
    /// Builds a schedule from the remote service record and validates it.
    pub fn from_record(record: &ServiceRecord, policy: SlotPolicy) -> Result<Self, SlotError> {
        let schedule = Self {
            work_days: WorkDays::from_tokens(&record.days_of_week, policy.unknown_work_day)?,
            start_time: parse_time_of_day(&record.start_time)?,
            end_time: parse_time_of_day(&record.end_time)?,
            duration: record.duration,
            interval: record.interval,
            empty_work_days: policy.empty_work_days,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Rejects configurations that would yield a meaningless or endless slot sequence.
    pub fn validate(&self) -> Result<(), SlotError> {
        for (name, value) in [("duration", self.duration), ("interval", self.interval)] {
            if !(1..=MINUTES_PER_DAY).contains(&value) {
                return Err(SlotError::InvalidConfig(format!(
                    "{} must be between 1 and {} minutes, got {}",
                    name, MINUTES_PER_DAY, value
                )));
            }
        }
        for (name, value) in [("startTime", self.start_time), ("endTime", self.end_time)] {
            if !(0..=MINUTES_PER_DAY).contains(&value) {
                return Err(SlotError::InvalidConfig(format!(
                    "{} must lie within the day, got minute {}",
                    name, value
                )));
            }
        }
        if self.end_time <= self.start_time {
            return Err(SlotError::InvalidConfig(format!(
                "endTime ({}) must be after startTime ({})",
                format_time_of_day(self.end_time),
                format_time_of_day(self.start_time)
            )));
        }
        Ok(())
    }
}

/// Every start time the configuration allows, ignoring bookings.
///
/// Starts at `start_time` and steps by `interval` while the appointment
/// still ends by `end_time`. Strictly increasing; empty when even the first
/// appointment does not fit.
pub fn generate_candidate_slots(config: &ServiceSchedule) -> Result<Vec<Minute>, SlotError> {
    config.validate()?;

    // validate() bounds every operand by one day, so these adds cannot overflow
    let mut slots = Vec::new();
    let mut current = config.start_time;
    while current + config.duration <= config.end_time {
        slots.push(current);
        current += config.interval;
    }
    Ok(slots)
}

/// Whether the service operates on `date` at all.
///
/// Looks only at the calendar: bookings and the time of day play no part.
/// An empty work-day set is resolved by the schedule's `empty_work_days` policy.
pub fn is_day_offerable(config: &ServiceSchedule, date: NaiveDate) -> bool {
    if config.work_days.is_empty() {
        return match config.empty_work_days {
            EmptyWorkDaysPolicy::AlwaysOfferable => true,
            EmptyWorkDaysPolicy::NeverOfferable => false,
        };
    }
    config.work_days.contains(date.weekday())
}

/// Candidate slots on `date` that are neither booked nor already past.
///
/// `booked` holds start minutes of confirmed appointments on `date`. `now` is
/// the current wall-clock time in the service's time zone; it only filters
/// when `date` is today, keeping slots that start strictly after the current
/// minute.
pub fn available_slots(
    config: &ServiceSchedule,
    date: NaiveDate,
    booked: &BTreeSet<Minute>,
    now: NaiveDateTime,
) -> Result<Vec<Minute>, SlotError> {
    let candidates = generate_candidate_slots(config)?;
    let cutoff = (date == now.date()).then(|| minute_of_day(now.time()));

    let slots: Vec<Minute> = candidates
        .into_iter()
        .filter(|slot| !booked.contains(slot))
        .filter(|slot| cutoff.map_or(true, |minute| *slot > minute))
        .collect();

    debug!(
        "Available slots for {}: {} (booked: {}, cutoff: {:?})",
        date,
        slots.len(),
        booked.len(),
        cutoff
    );
    Ok(slots)
}

/// Start minutes held by confirmed appointments.
///
/// A schedule record counts when any of its appointments is confirmed;
/// pending and cancelled ones leave the slot open.
pub fn booked_minutes(records: &[ScheduleRecord]) -> Result<BTreeSet<Minute>, SlotError> {
    let mut booked = BTreeSet::new();
    for record in records {
        if record
            .appointments
            .iter()
            .any(|appointment| appointment.status.occupies_slot())
        {
            booked.insert(parse_time_of_day(&record.start_time)?);
        }
    }
    Ok(booked)
}

/// Availability of one service on one date, as served to clients.
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAvailability {
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "2025-05-05"))]
    pub date: NaiveDate,
    pub offerable: bool,
    /// "HH:MM" start times, ascending.
    pub slots: Vec<String>,
}

/// Combines the day check, booking filter and clock filter for one date.
///
/// Dates before today and non-working days yield no slots. The schedule is
/// validated in every case so a broken service is reported, not hidden.
pub fn day_availability(
    config: &ServiceSchedule,
    date: NaiveDate,
    records: &[ScheduleRecord],
    now: NaiveDateTime,
) -> Result<DayAvailability, SlotError> {
    config.validate()?;
    let offerable = is_day_offerable(config, date);

    let slots = if !offerable || date < now.date() {
        Vec::new()
    } else {
        let booked = booked_minutes(records)?;
        available_slots(config, date, &booked, now)?
            .into_iter()
            .map(format_time_of_day)
            .collect()
    };

    Ok(DayAvailability {
        date,
        offerable,
        slots,
    })
}

pub fn minute_of_day(time: NaiveTime) -> Minute {
    (time.hour() * 60 + time.minute()) as Minute
}

/// Parses "HH:MM", "HH:MM:SS" or an ISO-8601 date-time into a minute of day.
///
/// Date-times contribute their wall-clock time as written. "24:00" is
/// accepted as the end of the day.
pub fn parse_time_of_day(value: &str) -> Result<Minute, SlotError> {
    let value = value.trim();
    if value == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }
    if let Ok(time) = NaiveTime::parse_from_str(value, "%H:%M") {
        return Ok(minute_of_day(time));
    }
    if let Ok(time) = NaiveTime::parse_from_str(value, "%H:%M:%S") {
        return Ok(minute_of_day(time));
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Ok(minute_of_day(date_time.time()));
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(minute_of_day(date_time.time()));
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Ok(minute_of_day(date_time.time()));
    }
    Err(SlotError::InvalidTimeOfDay(value.to_string()))
}

/// Renders a minute of day as "HH:MM".
pub fn format_time_of_day(minute: Minute) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}
