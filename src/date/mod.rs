mod format;
pub mod formatting;
mod relative;

pub use crate::config::DateStyle;
pub use format::{format_date, DEFAULT_DATE_FORMAT};
pub use formatting::{
    DateFormatting, DateFormattingState, PULL_REQUEST_DATE_FORMATTING, TAG_DATE_FORMATTING,
};
pub use relative::{from_now, from_now_at};
