use chrono::NaiveDateTime;
use dinesure_core::domain::reservation::value_objects::ReservationStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReservationValidator {
    pub user_id: Uuid,

    pub restaurant_id: Uuid,

    /// Local date and time of the booking.
    pub date_time: NaiveDateTime,

    #[validate(range(min = 1, max = 20, message = "number of guests must be between 1 and 20"))]
    pub guests: i32,

    #[serde(default)]
    #[validate(length(max = 500, message = "special requests cannot exceed 500 characters"))]
    pub special_requests: Option<String>,

    #[validate(length(min = 1, max = 100, message = "customer name is required"))]
    pub customer_name: String,

    #[validate(length(min = 1, message = "customer phone is required"))]
    pub customer_phone: String,

    #[serde(default)]
    #[validate(email(message = "customer email is not valid"))]
    pub customer_email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateReservationStatusValidator {
    pub status: ReservationStatus,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CancelReservationValidator {
    pub user_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation() -> CreateReservationValidator {
        serde_json::from_value(serde_json::json!({
            "user_id": Uuid::new_v4(),
            "restaurant_id": Uuid::new_v4(),
            "date_time": "2026-11-02T19:30:00",
            "guests": 4,
            "customer_name": "Ana Popescu",
            "customer_phone": "+40 721 000 000"
        }))
        .expect("payload")
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let payload = reservation();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.special_requests, None);
        assert_eq!(payload.customer_email, None);
    }

    #[test]
    fn test_guest_and_email_rules() {
        let mut crowd = reservation();
        crowd.guests = 21;
        assert!(crowd.validate().is_err());

        let mut email = reservation();
        email.customer_email = Some("not-an-email".to_string());
        assert!(email.validate().is_err());
    }

    #[test]
    fn test_status_uses_variant_names() {
        let payload: UpdateReservationStatusValidator =
            serde_json::from_str(r#"{"status": "Confirmed"}"#).expect("payload");
        assert_eq!(payload.status, ReservationStatus::Confirmed);
    }
}
