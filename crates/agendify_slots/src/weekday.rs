//! Work-day tokens and the weekday set of a service.
//!
//! Services arrive with work days spelled in several ways: weekday indices
//! (`0` = Sunday, as browsers count them), English names, and Portuguese names
//! with or without diacritics and the `-feira` suffix. [`parse_work_day`] is
//! the one place that maps a token onto a [`chrono::Weekday`].

use agendify_common::DayToken;
use agendify_config::UnknownWorkDayPolicy;
use chrono::Weekday;
use std::fmt;
use tracing::warn;

use crate::error::SlotError;

const ALL_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Parses a single work-day token.
///
/// Case and surrounding whitespace are ignored. Unrecognised tokens are an
/// error; callers decide whether to skip them.
pub fn parse_work_day(token: &str) -> Result<Weekday, SlotError> {
    let normalized = normalize(token);
    let day = match normalized.as_str() {
        "0" | "7" => Weekday::Sun,
        "1" => Weekday::Mon,
        "2" => Weekday::Tue,
        "3" => Weekday::Wed,
        "4" => Weekday::Thu,
        "5" => Weekday::Fri,
        "6" => Weekday::Sat,
        "monday" | "mon" | "segunda" | "seg" => Weekday::Mon,
        "tuesday" | "tue" | "terca" | "ter" => Weekday::Tue,
        "wednesday" | "wed" | "quarta" | "qua" => Weekday::Wed,
        "thursday" | "thu" | "quinta" | "qui" => Weekday::Thu,
        "friday" | "fri" | "sexta" | "sex" => Weekday::Fri,
        "saturday" | "sat" | "sabado" | "sab" => Weekday::Sat,
        "sunday" | "sun" | "domingo" | "dom" => Weekday::Sun,
        _ => return Err(SlotError::UnknownWorkDay(token.to_string())),
    };
    Ok(day)
}

fn parse_day_token(token: &DayToken) -> Result<Weekday, SlotError> {
    match token {
        DayToken::Index(index) => parse_work_day(&index.to_string()),
        DayToken::Name(name) => parse_work_day(name),
    }
}

/// Lowercases, folds Portuguese diacritics and drops the "-feira" suffix.
fn normalize(token: &str) -> String {
    let folded: String = token
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect();

    folded
        .strip_suffix("-feira")
        .or_else(|| folded.strip_suffix(" feira"))
        .unwrap_or(folded.as_str())
        .trim()
        .to_string()
}

/// The set of weekdays on which a service operates.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WorkDays(u8);

impl WorkDays {
    pub fn new() -> Self {
        Self(0)
    }

    /// All seven days.
    pub fn every_day() -> Self {
        ALL_DAYS.iter().copied().collect()
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= 1 << day.num_days_from_monday();
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & (1 << day.num_days_from_monday()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Days in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        ALL_DAYS.iter().copied().filter(move |day| self.contains(*day))
    }

    /// Builds the set from raw tokens, applying `policy` to unrecognised ones.
    pub fn from_tokens<'a, I>(tokens: I, policy: UnknownWorkDayPolicy) -> Result<Self, SlotError>
    where
        I: IntoIterator<Item = &'a DayToken>,
    {
        let mut days = WorkDays::new();
        for token in tokens {
            match parse_day_token(token) {
                Ok(day) => days.insert(day),
                Err(err) => match policy {
                    UnknownWorkDayPolicy::Reject => return Err(err),
                    UnknownWorkDayPolicy::Ignore => {
                        warn!("Skipping unrecognised work day token: {}", token)
                    }
                },
            }
        }
        Ok(days)
    }
}

impl FromIterator<Weekday> for WorkDays {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        let mut days = WorkDays::new();
        for day in iter {
            days.insert(day);
        }
        days
    }
}

impl fmt::Debug for WorkDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
