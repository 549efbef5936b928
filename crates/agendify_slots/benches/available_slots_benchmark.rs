use agendify_config::EmptyWorkDaysPolicy;
use agendify_slots::{available_slots, booked_minutes, ServiceSchedule, WorkDays};
use agendify_common::{AppointmentRecord, AppointmentStatus, ScheduleRecord};
use chrono::{NaiveDate, Weekday};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::BTreeSet;

fn create_schedule(duration: i32, interval: i32) -> ServiceSchedule {
    ServiceSchedule {
        work_days: [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ]
        .into_iter()
        .collect::<WorkDays>(),
        start_time: 8 * 60,
        end_time: 20 * 60,
        duration,
        interval,
        empty_work_days: EmptyWorkDaysPolicy::AlwaysOfferable,
    }
}

// Confirmed schedule records every `step` minutes from opening
fn create_records(count: usize, step: i32) -> Vec<ScheduleRecord> {
    (0..count as i32)
        .map(|i| {
            let minute = 8 * 60 + i * step;
            ScheduleRecord {
                id: None,
                service_id: None,
                date: Some("2025-05-05".to_string()),
                start_time: format!("{:02}:{:02}", minute / 60, minute % 60),
                end_time: None,
                is_available: None,
                appointments: vec![AppointmentRecord {
                    id: None,
                    status: AppointmentStatus::Confirmed,
                }],
            }
        })
        .collect()
}

fn benchmark_available_slots(c: &mut Criterion) {
    let mut group = c.benchmark_group("available_slots");
    let date = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
    let earlier = NaiveDate::from_ymd_opt(2025, 5, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    group.bench_function("no_bookings", |b| {
        let config = create_schedule(30, 30);
        let booked = BTreeSet::new();
        b.iter(|| {
            available_slots(
                black_box(&config),
                black_box(date),
                black_box(&booked),
                black_box(earlier),
            )
        })
    });

    group.bench_function("fine_interval_many_bookings", |b| {
        let config = create_schedule(15, 5);
        let booked = booked_minutes(&create_records(40, 15)).unwrap();
        b.iter(|| {
            available_slots(
                black_box(&config),
                black_box(date),
                black_box(&booked),
                black_box(earlier),
            )
        })
    });

    group.bench_function("today_afternoon", |b| {
        let config = create_schedule(30, 15);
        let booked = booked_minutes(&create_records(10, 30)).unwrap();
        let now = date.and_hms_opt(14, 20, 0).unwrap();
        b.iter(|| {
            available_slots(
                black_box(&config),
                black_box(date),
                black_box(&booked),
                black_box(now),
            )
        })
    });

    group.bench_function("collect_booked_minutes", |b| {
        let records = create_records(40, 15);
        b.iter(|| booked_minutes(black_box(&records)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_available_slots);
criterion_main!(benches);
