use async_trait::async_trait;
use sqlx::PgPool;

use super::{BookingId, BookingStore};
use crate::{
    models::booking::{Booking, BookingChanges, BookingStatus, NewBooking},
    utils::errorhandler::AppError,
};

#[derive(Debug, Clone)]
pub struct PgBookingStore {
    pool: PgPool,
}

impl PgBookingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn insert(&self, booking: NewBooking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings
                (title, description, participants, booking_date, start_time, end_time, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(booking.title)
        .bind(booking.description)
        .bind(booking.participants)
        .bind(booking.booking_date)
        .bind(booking.start_time)
        .bind(booking.end_time)
        .bind(booking.status)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn find(&self, id: BookingId) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn save(&self, id: BookingId, changes: BookingChanges) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET title = $1,
                description = $2,
                participants = $3,
                booking_date = $4,
                start_time = $5,
                end_time = $6,
                updated_at = now()
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(changes.title)
        .bind(changes.description)
        .bind(changes.participants)
        .bind(changes.booking_date)
        .bind(changes.start_time)
        .bind(changes.end_time)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn set_status(&self, id: BookingId, status: BookingStatus) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $1, updated_at = now() WHERE id = $2 RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn remove(&self, id: BookingId) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
