pub(crate) mod date;
pub(crate) mod timezone;

pub(crate) use date::{days_in_range, format_date, parse_date, relative_range};
pub(crate) use timezone::Timezone;
