auto_derived!(
    /// Month reference used by the prev/next navigation
    pub struct MonthRef {
        pub year: i32,
        /// 1-indexed month
        pub month: u8,
    }

    /// Event fragment rendered inside a day cell
    pub struct CalendarFragment {
        /// Id of the event
        pub event_id: String,
        /// Event title
        pub title: String,
        /// Whether the event lies before today
        pub past: bool,
    }

    /// One day cell of the month grid
    pub struct CalendarDay {
        /// Day of month, 1-indexed
        pub day: u8,
        /// Events taking place this day, ascending by start time
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        pub events: Vec<CalendarFragment>,
    }

    /// Month grid of events
    pub struct CalendarMonth {
        pub year: i32,
        /// 1-indexed month
        pub month: u8,
        /// Day cells covering the whole month
        pub days: Vec<CalendarDay>,
        /// Previous month
        pub previous: MonthRef,
        /// Next month
        pub next: MonthRef,
    }
);
