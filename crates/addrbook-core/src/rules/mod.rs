pub mod upcoming;

pub use upcoming::{
    birthday_in_window, validate_window_days, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
