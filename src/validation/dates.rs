use chrono::{Datelike, NaiveDate};

pub const CARD_DATE_FORMAT: &str = "%d/%m/%Y";
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date as printed on the card, `DD/MM/YYYY`.
/// Impossible calendar dates such as `31/02/1990` give `None`, and so do
/// years before 1.
pub fn parse_card_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), CARD_DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
}

/// Rewrite a card date as ISO `YYYY-MM-DD`, or `None` if it does not parse.
pub fn normalize_card_date(date_str: &str) -> Option<String> {
    parse_card_date(date_str).map(|date| date.format(ISO_DATE_FORMAT).to_string())
}

pub fn parse_iso_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, ISO_DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
}
