use std::collections::BTreeMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use super::{BookingId, BookingStore};
use crate::{
    models::booking::{Booking, BookingChanges, BookingStatus, NewBooking},
    utils::errorhandler::AppError,
};

#[derive(Debug, Default)]
struct Table {
    next_id: BookingId,
    rows: BTreeMap<BookingId, Booking>,
}

/// Process-local store, used by tests and `STORE_BACKEND=memory`.
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    table: RwLock<Table>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn insert(&self, booking: NewBooking) -> Result<Booking, AppError> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let now = OffsetDateTime::now_utc();
        let row = Booking {
            id: table.next_id,
            title: booking.title,
            description: booking.description,
            participants: booking.participants,
            booking_date: booking.booking_date,
            start_time: booking.start_time,
            end_time: booking.end_time,
            status: booking.status,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn find(&self, id: BookingId) -> Result<Option<Booking>, AppError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, id: BookingId, changes: BookingChanges) -> Result<Option<Booking>, AppError> {
        let mut table = self.table.write().await;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        row.title = changes.title;
        row.description = changes.description;
        row.participants = changes.participants;
        row.booking_date = changes.booking_date;
        row.start_time = changes.start_time;
        row.end_time = changes.end_time;
        row.updated_at = OffsetDateTime::now_utc();
        Ok(Some(row.clone()))
    }

    async fn set_status(&self, id: BookingId, status: BookingStatus) -> Result<Option<Booking>, AppError> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id).map(|row| {
            row.status = status;
            row.updated_at = OffsetDateTime::now_utc();
            row.clone()
        }))
    }

    async fn remove(&self, id: BookingId) -> Result<bool, AppError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}
