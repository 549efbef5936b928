// --- File: crates/agendify_slots/src/lib.rs ---
pub mod error;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod weekday;

pub use error::SlotError;
pub use logic::{
    available_slots, booked_minutes, day_availability, format_time_of_day,
    generate_candidate_slots, is_day_offerable, minute_of_day, parse_time_of_day, DayAvailability,
    Minute, ServiceSchedule, SlotPolicy,
};
pub use weekday::{parse_work_day, WorkDays};
