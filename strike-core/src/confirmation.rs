use std::fmt;
use strike_shared::ConfirmationRecord;
use strike_store::{SessionStore, SessionStoreExt, CONFIRMATION_KEY};
use tracing::warn;

use crate::fields::FieldId;

pub const NO_BOOKING_MESSAGE: &str = "Inga bokning gjord!";

/// Navigation hand-off first, then the session slot.
///
/// A stored record that cannot be read counts as no booking.
pub fn resolve_confirmation(
    nav_state: Option<ConfirmationRecord>,
    store: &dyn SessionStore,
) -> Option<ConfirmationRecord> {
    if nav_state.is_some() {
        return nav_state;
    }

    match store.get_json::<ConfirmationRecord>(CONFIRMATION_KEY) {
        Ok(record) => record,
        Err(e) => {
            warn!("Ignoring unreadable confirmation in session storage: {}", e);
            None
        }
    }
}

/// Read-only field values shown for a booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationDetails {
    pub when: String,
    pub people: String,
    pub lanes: String,
    pub booking_number: String,
    pub total_price: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationView {
    Booked(ConfirmationDetails),
    NoBooking,
}

impl ConfirmationView {
    pub fn render(record: Option<&ConfirmationRecord>) -> Self {
        match record {
            Some(record) => ConfirmationView::Booked(ConfirmationDetails {
                when: record.display_when(),
                people: record.people.to_string(),
                lanes: record.lanes.to_string(),
                booking_number: record.booking_id.clone(),
                total_price: format!("{} sek", record.price),
            }),
            None => ConfirmationView::NoBooking,
        }
    }

    pub fn resolve(nav_state: Option<ConfirmationRecord>, store: &dyn SessionStore) -> Self {
        Self::render(resolve_confirmation(nav_state, store).as_ref())
    }

    pub fn is_booked(&self) -> bool {
        matches!(self, ConfirmationView::Booked(_))
    }

    /// Value of a display field; `None` if this view does not show it.
    pub fn field(&self, id: FieldId) -> Option<&str> {
        match (self, id) {
            (ConfirmationView::Booked(d), FieldId::When) => Some(&d.when),
            (ConfirmationView::Booked(d), FieldId::People) => Some(&d.people),
            (ConfirmationView::Booked(d), FieldId::Lanes) => Some(&d.lanes),
            (ConfirmationView::Booked(d), FieldId::BookingNumber) => Some(&d.booking_number),
            (ConfirmationView::Booked(d), FieldId::TotalPrice) => Some(&d.total_price),
            (ConfirmationView::NoBooking, FieldId::NoBookingMessage) => Some(NO_BOOKING_MESSAGE),
            _ => None,
        }
    }
}

impl fmt::Display for ConfirmationView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfirmationView::Booked(d) => {
                writeln!(f, "See you soon!")?;
                writeln!(f, "When: {}", d.when)?;
                writeln!(f, "Who: {}", d.people)?;
                writeln!(f, "Lanes: {}", d.lanes)?;
                writeln!(f, "Booking number: {}", d.booking_number)?;
                write!(f, "Total: {}", d.total_price)
            }
            ConfirmationView::NoBooking => f.write_str(NO_BOOKING_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strike_store::MemorySessionStore;

    fn record(id: &str, price: u32) -> ConfirmationRecord {
        ConfirmationRecord {
            booking_id: id.to_string(),
            when: "2024-12-25T18:00".to_string(),
            people: 3,
            lanes: 2,
            shoes: vec!["42".into(), "43".into(), "44".into()],
            price,
        }
    }

    #[test]
    fn test_renders_stored_record() {
        let store = MemorySessionStore::new();
        store.set_json(CONFIRMATION_KEY, &record("BK123456", 560)).unwrap();

        let view = ConfirmationView::resolve(None, &store);
        assert!(view.is_booked());
        assert_eq!(view.field(FieldId::BookingNumber), Some("BK123456"));
        assert_eq!(view.field(FieldId::TotalPrice), Some("560 sek"));
        assert_eq!(view.field(FieldId::When), Some("2024-12-25 18:00"));
        assert_eq!(view.field(FieldId::People), Some("3"));
        assert_eq!(view.field(FieldId::Lanes), Some("2"));
        assert_eq!(view.field(FieldId::NoBookingMessage), None);
    }

    #[test]
    fn test_navigation_state_wins_over_storage() {
        let store = MemorySessionStore::new();
        store.set_json(CONFIRMATION_KEY, &record("BK-STORED", 340)).unwrap();

        let resolved = resolve_confirmation(Some(record("BK-NAV", 560)), &store).unwrap();
        assert_eq!(resolved.booking_id, "BK-NAV");
    }

    #[test]
    fn test_no_booking_state() {
        let store = MemorySessionStore::new();
        let view = ConfirmationView::resolve(None, &store);

        assert_eq!(view, ConfirmationView::NoBooking);
        assert_eq!(view.field(FieldId::NoBookingMessage), Some("Inga bokning gjord!"));
        for id in [
            FieldId::When,
            FieldId::People,
            FieldId::Lanes,
            FieldId::BookingNumber,
            FieldId::TotalPrice,
        ] {
            assert_eq!(view.field(id), None);
        }
        assert_eq!(view.to_string(), "Inga bokning gjord!");
    }

    #[test]
    fn test_unreadable_record_is_no_booking() {
        let store = MemorySessionStore::new();
        store.set(CONFIRMATION_KEY, "null-ish").unwrap();

        assert_eq!(ConfirmationView::resolve(None, &store), ConfirmationView::NoBooking);
    }

    #[test]
    fn test_display_lists_fields() {
        let view = ConfirmationView::render(Some(&record("BK1", 560)));
        let text = view.to_string();

        assert!(text.contains("When: 2024-12-25 18:00"));
        assert!(text.contains("Booking number: BK1"));
        assert!(text.ends_with("Total: 560 sek"));
    }
}
