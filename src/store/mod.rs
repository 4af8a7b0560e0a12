mod memory;
mod postgres;

use async_trait::async_trait;

use crate::{
    models::booking::{Booking, BookingChanges, BookingStatus, NewBooking},
    utils::errorhandler::AppError,
};

pub use memory::InMemoryBookingStore;
pub use postgres::PgBookingStore;

pub type BookingId = i64;

/// Persistence seam for bookings. Lookups that miss return `None`/`false`
/// and leave the not-found decision to the caller.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// every booking, ordered by id
    async fn list(&self) -> Result<Vec<Booking>, AppError>;
    /// persist a new booking and return it with its assigned id
    async fn insert(&self, booking: NewBooking) -> Result<Booking, AppError>;
    async fn find(&self, id: BookingId) -> Result<Option<Booking>, AppError>;
    /// overwrite the mutable fields of an existing booking
    async fn save(&self, id: BookingId, changes: BookingChanges) -> Result<Option<Booking>, AppError>;
    async fn set_status(&self, id: BookingId, status: BookingStatus) -> Result<Option<Booking>, AppError>;
    /// `true` when a row was deleted
    async fn remove(&self, id: BookingId) -> Result<bool, AppError>;
}
