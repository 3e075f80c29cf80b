pub(crate) mod numeral;
pub(crate) mod time;
