use serde::{Deserialize, Deserializer, Serialize};
use sqlx::{FromRow, Type};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

time::serde::format_description!(calendar_date, Date, "[year]-[month]-[day]");
time::serde::format_description!(time_of_day, Time, "[hour]:[minute]");
time::serde::format_description!(
    date_time,
    PrimitiveDateTime,
    "[year]-[month]-[day] [hour]:[minute]"
);

#[derive(Debug, Type, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Cancelled,
}

#[derive(Serialize, Debug, Clone, PartialEq, FromRow)]
pub struct Booking {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub participants: Vec<String>,
    #[serde(with = "calendar_date")]
    pub booking_date: Date,
    #[serde(with = "date_time")]
    pub start_time: PrimitiveDateTime,
    #[serde(with = "date_time")]
    pub end_time: PrimitiveDateTime,
    pub status: BookingStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Body of `POST /bookings`. Any `status` sent by the caller is dropped here.
#[derive(Deserialize, Debug)]
pub struct CreateBookingReq {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(with = "calendar_date")]
    pub booking_date: Date,
    #[serde(with = "time_of_day")]
    pub start_time: Time,
    #[serde(with = "time_of_day")]
    pub end_time: Time,
}

// present-but-null becomes `Some(None)`, absent stays `None`
fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Body of `PUT/PATCH /bookings/{id}`. Only these fields are mutable.
/// `"description": null` clears the description.
#[derive(Deserialize, Debug, Default)]
pub struct UpdateBookingReq {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub participants: Option<Vec<String>>,
    #[serde(default, with = "calendar_date::option")]
    pub booking_date: Option<Date>,
    #[serde(default, with = "time_of_day::option")]
    pub start_time: Option<Time>,
    #[serde(default, with = "time_of_day::option")]
    pub end_time: Option<Time>,
}

impl UpdateBookingReq {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.participants.is_none()
            && !self.touches_schedule()
    }

    pub fn touches_schedule(&self) -> bool {
        self.booking_date.is_some() || self.start_time.is_some() || self.end_time.is_some()
    }
}

/// Row handed to the store on insert, timestamps already composed.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub title: String,
    pub description: Option<String>,
    pub participants: Vec<String>,
    pub booking_date: Date,
    pub start_time: PrimitiveDateTime,
    pub end_time: PrimitiveDateTime,
    pub status: BookingStatus,
}

/// Fully resolved mutable fields written back by an update.
#[derive(Debug, Clone)]
pub struct BookingChanges {
    pub title: String,
    pub description: Option<String>,
    pub participants: Vec<String>,
    pub booking_date: Date,
    pub start_time: PrimitiveDateTime,
    pub end_time: PrimitiveDateTime,
}
