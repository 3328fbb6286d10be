use time::{Date, Month};

use litterless_database::Event;
use litterless_models::v0::{CalendarDay, CalendarFragment, CalendarMonth, MonthRef};
use litterless_result::{create_error, Result};

/// Month shown before the given one
fn previous(year: i32, month: Month) -> MonthRef {
    match month {
        Month::January => MonthRef {
            year: year - 1,
            month: Month::December as u8,
        },
        _ => MonthRef {
            year,
            month: month.previous() as u8,
        },
    }
}

/// Month shown after the given one
fn next(year: i32, month: Month) -> MonthRef {
    match month {
        Month::December => MonthRef {
            year: year + 1,
            month: Month::January as u8,
        },
        _ => MonthRef {
            year,
            month: month.next() as u8,
        },
    }
}

/// Build the month grid for the given events
///
/// Events arrive ascending by start time and keep that order inside
/// each day cell. Fragments are classified against `today` as the
/// grid is built.
pub fn build_month(events: &[Event], year: i32, month: u8, today: Date) -> Result<CalendarMonth> {
    let month = Month::try_from(month).map_err(|_| {
        create_error!(FailedValidation {
            error: "invalid month".to_string()
        })
    })?;

    let length = time::util::days_in_year_month(year, month);
    let mut days: Vec<CalendarDay> = (1..=length)
        .map(|day| CalendarDay { day, events: vec![] })
        .collect();

    for event in events {
        let date = event.date.date();

        if date.year() == year && date.month() == month {
            days[date.day() as usize - 1].events.push(CalendarFragment {
                event_id: event.id.clone(),
                title: event.title.clone(),
                past: event.is_past(today),
            });
        }
    }

    Ok(CalendarMonth {
        year,
        month: month as u8,
        days,
        previous: previous(year, month),
        next: next(year, month),
    })
}

#[cfg(test)]
mod tests {
    use iso8601_timestamp::Timestamp;
    use time::macros::date;

    use litterless_database::Event;

    use super::build_month;

    fn event(id: &str, date: &str) -> Event {
        let midnight = Timestamp::parse(&format!("{date}T00:00:00Z")).unwrap();

        Event {
            id: id.to_string(),
            title: format!("Event {id}"),
            description: String::new(),
            date: midnight,
            start_time: Timestamp::parse(&format!("{date}T09:00:00Z")).unwrap(),
            end_time: None,
            location: "Portland, ME".to_string(),
            coordinate: None,
            owner: "01USER0000000000000000000000".to_string(),
            rsvps: vec![],
            attendance: 0,
            time_created: Timestamp::now_utc(),
        }
    }

    #[test]
    fn buckets_events_into_day_cells() {
        let events = vec![
            event("A", "2026-08-01"),
            event("B", "2026-08-15"),
            event("C", "2026-08-15"),
            event("D", "2026-09-01"),
        ];

        let grid = build_month(&events, 2026, 8, date!(2026 - 08 - 10)).unwrap();
        assert_eq!(grid.days.len(), 31);
        assert_eq!(grid.days[0].events.len(), 1);
        assert_eq!(grid.days[14].events.len(), 2);
        assert_eq!(grid.days[14].events[0].event_id, "B");

        // September's event stays off this grid.
        let total: usize = grid.days.iter().map(|day| day.events.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn classifies_past_against_today() {
        let events = vec![event("A", "2026-08-01"), event("B", "2026-08-20")];

        let grid = build_month(&events, 2026, 8, date!(2026 - 08 - 10)).unwrap();
        assert!(grid.days[0].events[0].past);
        assert!(!grid.days[19].events[0].past);

        // An event on the current day is not yet past.
        let grid = build_month(&events, 2026, 8, date!(2026 - 08 - 01)).unwrap();
        assert!(!grid.days[0].events[0].past);
    }

    #[test]
    fn navigation_wraps_the_year() {
        let grid = build_month(&[], 2026, 1, date!(2026 - 01 - 01)).unwrap();
        assert_eq!(grid.previous.year, 2025);
        assert_eq!(grid.previous.month, 12);
        assert_eq!(grid.next.month, 2);

        let grid = build_month(&[], 2026, 12, date!(2026 - 12 - 01)).unwrap();
        assert_eq!(grid.next.year, 2027);
        assert_eq!(grid.next.month, 1);
        assert_eq!(grid.previous.month, 11);
    }

    #[test]
    fn rejects_invalid_months() {
        assert!(build_month(&[], 2026, 13, date!(2026 - 01 - 01)).is_err());
        assert!(build_month(&[], 2026, 0, date!(2026 - 01 - 01)).is_err());
    }
}
