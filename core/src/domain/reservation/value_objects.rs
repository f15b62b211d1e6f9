use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, labels::labelled_enum};

pub const MAX_GUESTS: i32 = 20;
pub const MAX_SPECIAL_REQUESTS_LENGTH: usize = 500;
pub const MAX_CUSTOMER_NAME_LENGTH: usize = 100;

/// Opening hours and capacity used to compute bookable slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReservationPolicy {
    pub opening_hour: u32,
    pub closing_hour: u32,
    pub slot_minutes: u32,
    pub dining_window_minutes: i64,
    pub capacity: usize,
}

impl Default for ReservationPolicy {
    fn default() -> Self {
        Self {
            opening_hour: 11,
            closing_hour: 22,
            slot_minutes: 30,
            dining_window_minutes: 120,
            capacity: 10,
        }
    }
}

impl ReservationPolicy {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.opening_hour >= self.closing_hour || self.closing_hour > 24 {
            return Err(CoreError::Invalid(format!(
                "opening hour {} must precede closing hour {}",
                self.opening_hour, self.closing_hour
            )));
        }
        if self.slot_minutes == 0 {
            return Err(CoreError::Invalid(
                "slot length must be positive".to_string(),
            ));
        }
        if self.dining_window_minutes <= 0 {
            return Err(CoreError::Invalid(
                "dining window must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

labelled_enum! {
    ReservationStatus, "reservation status" {
        Pending, Confirmed, Cancelled, Completed, NoShow,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimeSlot {
    pub date_time: NaiveDateTime,
    pub is_available: bool,
    pub existing_reservations: usize,
}

#[derive(Debug, Clone)]
pub struct CreateReservationInput {
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub date_time: NaiveDateTime,
    pub guests: i32,
    pub special_requests: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
}

impl CreateReservationInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(1..=MAX_GUESTS).contains(&self.guests) {
            return Err(CoreError::Invalid(format!(
                "number of guests must be between 1 and {}",
                MAX_GUESTS
            )));
        }

        if self.special_requests.chars().count() > MAX_SPECIAL_REQUESTS_LENGTH {
            return Err(CoreError::Invalid(format!(
                "special requests cannot exceed {} characters",
                MAX_SPECIAL_REQUESTS_LENGTH
            )));
        }

        let name_length = self.customer_name.trim().chars().count();
        if name_length == 0 || name_length > MAX_CUSTOMER_NAME_LENGTH {
            return Err(CoreError::Invalid(format!(
                "customer name is required and cannot exceed {} characters",
                MAX_CUSTOMER_NAME_LENGTH
            )));
        }

        if self.customer_phone.trim().is_empty() {
            return Err(CoreError::Invalid("customer phone is required".to_string()));
        }

        if !self.customer_email.is_empty() && !self.customer_email.contains('@') {
            return Err(CoreError::Invalid("customer email is not valid".to_string()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct UpdateReservationStatusInput {
    pub reservation_id: Uuid,
    pub status: ReservationStatus,
}

#[derive(Debug, Clone)]
pub struct CancelReservationInput {
    pub reservation_id: Uuid,
    pub user_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct GetTimeSlotsInput {
    pub restaurant_id: Uuid,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> CreateReservationInput {
        CreateReservationInput {
            user_id: Uuid::new_v4(),
            restaurant_id: Uuid::new_v4(),
            date_time: NaiveDate::from_ymd_opt(2026, 5, 1)
                .and_then(|d| d.and_hms_opt(19, 0, 0))
                .expect("valid date"),
            guests: 4,
            special_requests: String::new(),
            customer_name: "Ana Popescu".to_string(),
            customer_phone: "+40 721 000 000".to_string(),
            customer_email: "ana@example.com".to_string(),
        }
    }

    #[test]
    fn test_reservation_input_bounds() {
        assert!(input().validate().is_ok());

        let mut too_many = input();
        too_many.guests = 21;
        assert!(too_many.validate().is_err());

        let mut nobody = input();
        nobody.guests = 0;
        assert!(nobody.validate().is_err());

        let mut chatty = input();
        chatty.special_requests = "x".repeat(501);
        assert!(chatty.validate().is_err());

        let mut anonymous = input();
        anonymous.customer_name = "  ".to_string();
        assert!(anonymous.validate().is_err());

        let mut no_email = input();
        no_email.customer_email = String::new();
        assert!(no_email.validate().is_ok());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!("NoShow".parse::<ReservationStatus>(), Ok(ReservationStatus::NoShow));
        assert_eq!(ReservationStatus::Cancelled.to_string(), "Cancelled");
        assert_eq!(
            "Lost".parse::<ReservationStatus>(),
            Err(CoreError::Invalid(
                "unknown reservation status: Lost".to_string()
            ))
        );
        for status in ReservationStatus::ALL {
            assert_eq!(status.as_str().parse::<ReservationStatus>(), Ok(*status));
        }
    }

    #[test]
    fn test_default_policy_is_valid() {
        assert!(ReservationPolicy::default().validate().is_ok());
        let inverted = ReservationPolicy {
            opening_hour: 22,
            closing_hour: 11,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());
    }
}
