use chrono::{NaiveDate, NaiveTime};
use crate::shoes::ShoeList;

/// The in-progress booking, mutated field by field as the user types.
///
/// Raw input that is empty or does not parse leaves the field unset, the same
/// way a browser date or number input reports an empty value.
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub people: Option<u32>,
    pub lanes: Option<u32>,
    pub shoes: ShoeList,
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// `YYYY-MM-DD`
    pub fn set_date(&mut self, raw: &str) {
        self.date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok();
    }

    /// `HH:MM`. The booking time carries no seconds, so input with seconds
    /// is rejected rather than truncated.
    pub fn set_time(&mut self, raw: &str) {
        self.time = NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok();
    }

    pub fn set_people(&mut self, raw: &str) {
        self.people = parse_count(raw);
    }

    pub fn set_lanes(&mut self, raw: &str) {
        self.lanes = parse_count(raw);
    }
}

// Zero counts as not filled in.
fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_parse_form_input() {
        let mut draft = BookingDraft::new();
        draft.set_date("2024-12-25");
        draft.set_time("18:00");
        draft.set_people("3");
        draft.set_lanes(" 2 ");

        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 12, 25));
        assert_eq!(draft.time, NaiveTime::from_hms_opt(18, 0, 0));
        assert_eq!(draft.people, Some(3));
        assert_eq!(draft.lanes, Some(2));
    }

    #[test]
    fn test_time_with_seconds_is_rejected() {
        let mut draft = BookingDraft::new();
        draft.set_time("18:30");
        assert_eq!(draft.time, NaiveTime::from_hms_opt(18, 30, 0));

        draft.set_time("18:30:45");
        assert_eq!(draft.time, None);
    }

    #[test]
    fn test_invalid_or_empty_input_clears_field() {
        let mut draft = BookingDraft::new();
        draft.set_people("4");
        draft.set_people("");
        assert_eq!(draft.people, None);

        draft.set_lanes("0");
        assert_eq!(draft.lanes, None);

        draft.set_date("25/12/2024");
        assert_eq!(draft.date, None);

        draft.set_time("six");
        assert_eq!(draft.time, None);
    }
}
