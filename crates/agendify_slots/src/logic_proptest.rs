#[cfg(test)]
mod tests {
    use crate::logic::{available_slots, generate_candidate_slots, Minute, ServiceSchedule};
    use crate::weekday::WorkDays;
    use agendify_config::EmptyWorkDaysPolicy;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn create_schedule(start: Minute, end: Minute, duration: Minute, interval: Minute) -> ServiceSchedule {
        ServiceSchedule {
            work_days: WorkDays::every_day(),
            start_time: start,
            end_time: end,
            duration,
            interval,
            empty_work_days: EmptyWorkDaysPolicy::AlwaysOfferable,
        }
    }

    fn a_monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 5).unwrap()
    }

    proptest! {
        // Slots are strictly increasing, start no earlier than opening, end no later than closing
        #[test]
        fn test_candidates_within_working_hours(
            start in 0..720i32,
            span in 1..720i32,
            duration in 1..240i32,
            interval in 1..120i32,
        ) {
            let end = start + span;
            let config = create_schedule(start, end, duration, interval);
            let slots = generate_candidate_slots(&config).unwrap();

            for pair in slots.windows(2) {
                prop_assert!(pair[0] < pair[1], "Slots not increasing: {:?}", pair);
                prop_assert_eq!(pair[1] - pair[0], interval);
            }
            for slot in &slots {
                prop_assert!(*slot >= start, "Slot {} starts before opening {}", slot, start);
                prop_assert!(slot + duration <= end, "Slot {} runs past closing {}", slot, end);
            }
            // The next step would not fit anymore
            if let Some(last) = slots.last() {
                prop_assert!(last + interval + duration > end);
            } else {
                prop_assert!(start + duration > end);
            }
        }

        // Away from today, availability is exactly the candidates minus the booked minutes
        #[test]
        fn test_available_is_candidates_minus_booked(
            start in 0..600i32,
            span in 60..600i32,
            duration in 5..90i32,
            interval in 5..60i32,
            booked in proptest::collection::btree_set(0..1440i32, 0..20),
            days_ahead in 1..30i64,
        ) {
            let config = create_schedule(start, start + span, duration, interval);
            let date = a_monday();
            let now = (date - chrono::Duration::days(days_ahead)).and_hms_opt(12, 0, 0).unwrap();

            let candidates = generate_candidate_slots(&config).unwrap();
            let available = available_slots(&config, date, &booked, now).unwrap();

            let expected: Vec<Minute> = candidates
                .into_iter()
                .filter(|slot| !booked.contains(slot))
                .collect();
            prop_assert_eq!(available, expected);
        }

        // On today every remaining slot starts after the current minute
        #[test]
        fn test_today_slots_start_after_now(
            hour in 0..24u32,
            minute in 0..60u32,
            interval in 5..60i32,
        ) {
            let config = create_schedule(6 * 60, 22 * 60, 30, interval);
            let date = a_monday();
            let now = date.and_hms_opt(hour, minute, 0).unwrap();
            let current = (hour * 60 + minute) as Minute;

            let available = available_slots(&config, date, &BTreeSet::new(), now).unwrap();
            for slot in &available {
                prop_assert!(*slot > current, "Slot {} offered at minute {}", slot, current);
            }
            let candidates = generate_candidate_slots(&config).unwrap();
            let later = candidates.iter().filter(|slot| **slot > current).count();
            prop_assert_eq!(available.len(), later);
        }

        // Any remote duration or interval either errors or yields a bounded list
        #[test]
        fn test_any_duration_and_interval_terminates(
            duration in any::<i32>(),
            interval in any::<i32>(),
        ) {
            let config = create_schedule(0, 24 * 60, duration, interval);
            match generate_candidate_slots(&config) {
                Ok(slots) => {
                    prop_assert!((1..=24 * 60).contains(&duration));
                    prop_assert!((1..=24 * 60).contains(&interval));
                    prop_assert!(slots.len() <= (24 * 60) as usize);
                }
                Err(_) => prop_assert!(!(1..=24 * 60).contains(&duration) || !(1..=24 * 60).contains(&interval)),
            }
        }
    }
}
