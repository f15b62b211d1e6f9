use chrono::NaiveDateTime;
use uuid::Uuid;

const DATE_FORMAT: &str = "%A, %B %-d, %Y";
const TIME_FORMAT: &str = "%H:%M";

/// What a customer is told about one of their reservations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationNotice {
    pub reservation_id: Uuid,
    pub to: String,
    pub customer_name: String,
    pub restaurant_name: String,
    pub date_time: NaiveDateTime,
    pub guests: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl ReservationNotice {
    pub fn confirmation(&self, from: &str) -> EmailMessage {
        EmailMessage {
            from: from.to_string(),
            to: self.to.clone(),
            subject: format!("Reservation Confirmation - {}", self.restaurant_name),
            body: format!(
                "Dear {},\n\n\
                 Your reservation at {} has been received.\n\n\
                 Reservation number: {}\n\
                 Date: {}\n\
                 Time: {}\n\
                 Guests: {}\n\n\
                 We look forward to seeing you.\n\
                 DineSure",
                self.customer_name,
                self.restaurant_name,
                self.reservation_id,
                self.date_time.format(DATE_FORMAT),
                self.date_time.format(TIME_FORMAT),
                self.guests,
            ),
        }
    }

    pub fn cancellation(&self, from: &str) -> EmailMessage {
        EmailMessage {
            from: from.to_string(),
            to: self.to.clone(),
            subject: format!("Reservation Cancelled - {}", self.restaurant_name),
            body: format!(
                "Dear {},\n\n\
                 Your reservation at {} on {} at {} has been cancelled.\n\n\
                 We hope to welcome you another time.\n\
                 DineSure",
                self.customer_name,
                self.restaurant_name,
                self.date_time.format(DATE_FORMAT),
                self.date_time.format(TIME_FORMAT),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn notice() -> ReservationNotice {
        ReservationNotice {
            reservation_id: Uuid::nil(),
            to: "ana@example.com".to_string(),
            customer_name: "Ana".to_string(),
            restaurant_name: "Trattoria".to_string(),
            date_time: NaiveDate::from_ymd_opt(2026, 6, 12)
                .and_then(|d| d.and_hms_opt(19, 30, 0))
                .expect("valid date"),
            guests: 2,
        }
    }

    #[test]
    fn test_confirmation_message() {
        let message = notice().confirmation("reservations@dinesure.ro");

        assert_eq!(message.subject, "Reservation Confirmation - Trattoria");
        assert_eq!(message.to, "ana@example.com");
        assert_eq!(message.from, "reservations@dinesure.ro");
        assert!(message.body.contains("Friday, June 12, 2026"));
        assert!(message.body.contains("Time: 19:30"));
        assert!(message.body.contains("Guests: 2"));
    }

    #[test]
    fn test_cancellation_message() {
        let message = notice().cancellation("reservations@dinesure.ro");

        assert_eq!(message.subject, "Reservation Cancelled - Trattoria");
        assert!(message.body.contains("has been cancelled"));
    }
}
