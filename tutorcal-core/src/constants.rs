/// Number of calendar years (current, next) that birthdays are generated for.
pub const BIRTHDAY_WINDOW_YEARS: i32 = 2;

/// Months scanned for a recurring session that has no end date.
pub const OPEN_ENDED_FALLBACK_MONTHS: u32 = 12;

/// Duration of a session whose end time is missing.
pub const DEFAULT_SESSION_MINUTES: i64 = 60;

/// Label used for sessions without a name.
pub const DEFAULT_SESSION_TITLE: &str = "Session";

/// Days shown by the agenda when no `to` date is given.
pub const DEFAULT_AGENDA_DAYS: i64 = 30;
