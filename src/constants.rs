/// Every menu page quotes prices in euro.
pub const CURRENCY: &str = "€";

/// Weekday indices published per slot, Monday = 1 .. Friday = 5.
pub const WEEKDAYS: std::ops::RangeInclusive<u8> = 1..=5;

/// Pages are fetched with this timeout unless overridden on the command line.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const CANTEEN_NOT_AVAILABLE_MSG: &str = "Canteen not available.";
