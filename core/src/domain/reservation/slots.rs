use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::reservation::value_objects::{ReservationPolicy, TimeSlot};

/// Bookable slots of a day. `booked` holds the start times of the day's non-cancelled
/// reservations. On `now`'s own date, slots at or before `now` are left out.
pub fn compute_time_slots(
    policy: &ReservationPolicy,
    date: NaiveDate,
    now: NaiveDateTime,
    booked: &[NaiveDateTime],
) -> Vec<TimeSlot> {
    let Some(opening) = NaiveTime::from_hms_opt(policy.opening_hour, 0, 0) else {
        return Vec::new();
    };
    let opening = date.and_time(opening);
    let closing = date.and_time(NaiveTime::MIN) + Duration::hours(i64::from(policy.closing_hour));
    let step = Duration::minutes(i64::from(policy.slot_minutes.max(1)));
    let window = policy.dining_window_minutes;

    let mut slots = Vec::new();
    let mut slot = opening;
    while slot < closing {
        if date == now.date() && slot <= now {
            slot += step;
            continue;
        }

        let existing = booked
            .iter()
            .filter(|start| (**start - slot).num_minutes().abs() < window)
            .count();

        slots.push(TimeSlot {
            date_time: slot,
            is_available: existing < policy.capacity,
            existing_reservations: existing,
        });
        slot += step;
    }

    slots
}
