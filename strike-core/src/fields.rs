use std::fmt;
use strike_shared::ShoeId;

/// Stable identifiers of the form controls and confirmation displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    When,
    Time,
    People,
    Lanes,
    AddShoe,
    RemoveShoe(ShoeId),
    CompleteBooking,
    BookingNumber,
    TotalPrice,
    NoBookingMessage,
    NavBooking,
    NavConfirmation,
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::When => f.write_str("when"),
            FieldId::Time => f.write_str("time"),
            FieldId::People => f.write_str("people"),
            FieldId::Lanes => f.write_str("lanes"),
            FieldId::AddShoe => f.write_str("add-shoe-button"),
            FieldId::RemoveShoe(id) => write!(f, "remove-shoe-{}", id),
            FieldId::CompleteBooking => f.write_str("complete-booking-button"),
            FieldId::BookingNumber => f.write_str("booking-number"),
            FieldId::TotalPrice => f.write_str("total-price"),
            FieldId::NoBookingMessage => f.write_str("no-booking-message"),
            FieldId::NavBooking => f.write_str("nav-booking"),
            FieldId::NavConfirmation => f.write_str("nav-confirmation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        assert_eq!(FieldId::When.to_string(), "when");
        assert_eq!(FieldId::CompleteBooking.to_string(), "complete-booking-button");
        assert_eq!(FieldId::NoBookingMessage.to_string(), "no-booking-message");

        let id = ShoeId::new();
        assert_eq!(FieldId::RemoveShoe(id).to_string(), format!("remove-shoe-{}", id));
    }
}
