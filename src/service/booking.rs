use std::sync::Arc;

use time::{Date, PrimitiveDateTime, Time};
use tracing::{debug, info};

use crate::{
    models::booking::{
        Booking, BookingChanges, BookingStatus, CreateBookingReq, NewBooking, UpdateBookingReq,
    },
    store::{BookingId, BookingStore},
    utils::errorhandler::AppError,
};

const NOT_FOUND: &str = "Booking not found.";

/// Places both times of day on `date` and checks that the meeting ends after it starts.
pub fn compose_schedule(
    date: Date,
    start: Time,
    end: Time,
) -> Result<(PrimitiveDateTime, PrimitiveDateTime), AppError> {
    let start_time = PrimitiveDateTime::new(date, start);
    let end_time = PrimitiveDateTime::new(date, end);
    if end_time <= start_time {
        return Err(AppError::validation("end_time must be after start_time"));
    }
    Ok((start_time, end_time))
}

fn check_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::validation("title is required"));
    }
    Ok(())
}

#[derive(Clone)]
pub struct BookingService {
    store: Arc<dyn BookingStore>,
}

impl BookingService {
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Booking>, AppError> {
        self.store.list().await
    }

    pub async fn create(&self, req: CreateBookingReq) -> Result<Booking, AppError> {
        check_title(&req.title)?;
        let (start_time, end_time) = compose_schedule(req.booking_date, req.start_time, req.end_time)?;

        let booking = self
            .store
            .insert(NewBooking {
                title: req.title,
                description: req.description,
                participants: req.participants,
                booking_date: req.booking_date,
                start_time,
                end_time,
                status: BookingStatus::Pending,
            })
            .await?;

        info!(id = booking.id, "booking created");
        Ok(booking)
    }

    pub async fn get(&self, id: BookingId) -> Result<Booking, AppError> {
        self.store
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))
    }

    pub async fn update(&self, id: BookingId, req: UpdateBookingReq) -> Result<Booking, AppError> {
        if req.is_empty() {
            return Err(AppError::validation("no parameters provided"));
        }
        let current = self.get(id).await?;

        let (booking_date, start_time, end_time) = if req.touches_schedule() {
            let date = req.booking_date.unwrap_or(current.booking_date);
            let start = req.start_time.unwrap_or(current.start_time.time());
            let end = req.end_time.unwrap_or(current.end_time.time());
            let (start_time, end_time) = compose_schedule(date, start, end)?;
            (date, start_time, end_time)
        } else {
            (current.booking_date, current.start_time, current.end_time)
        };

        let title = req.title.unwrap_or(current.title);
        check_title(&title)?;

        let changes = BookingChanges {
            title,
            description: req.description.unwrap_or(current.description),
            participants: req.participants.unwrap_or(current.participants),
            booking_date,
            start_time,
            end_time,
        };

        let booking = self
            .store
            .save(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

        debug!(id, "booking updated");
        Ok(booking)
    }

    pub async fn delete(&self, id: BookingId) -> Result<(), AppError> {
        if !self.store.remove(id).await? {
            return Err(AppError::not_found(NOT_FOUND));
        }
        info!(id, "booking deleted");
        Ok(())
    }

    /// Re-cancelling is allowed and leaves the booking cancelled.
    pub async fn cancel(&self, id: BookingId) -> Result<Booking, AppError> {
        let booking = self
            .store
            .set_status(id, BookingStatus::Cancelled)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

        info!(id, "booking cancelled");
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryBookingStore;
    use time::macros::{date, datetime, time};

    fn service() -> BookingService {
        BookingService::new(Arc::new(InMemoryBookingStore::new()))
    }

    fn sync_req() -> CreateBookingReq {
        CreateBookingReq {
            title: "weekly sync".into(),
            description: Some("roadmap".into()),
            participants: vec!["ana".into(), "bo".into()],
            booking_date: date!(2024 - 05 - 01),
            start_time: time!(09:00),
            end_time: time!(10:00),
        }
    }

    #[tokio::test]
    async fn create_composes_timestamps_and_starts_pending() {
        let svc = service();
        let booking = svc.create(sync_req()).await.unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.start_time, datetime!(2024-05-01 09:00));
        assert_eq!(booking.end_time, datetime!(2024-05-01 10:00));
        assert_eq!(booking.participants, vec!["ana".to_string(), "bo".to_string()]);
    }

    #[tokio::test]
    async fn create_rejects_end_not_after_start() {
        let svc = service();
        let mut req = sync_req();
        req.end_time = time!(09:00);

        let err = svc.create(req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_blank_title() {
        let svc = service();
        let mut req = sync_req();
        req.title = "   ".into();
        assert!(matches!(svc.create(req).await, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn get_returns_what_create_stored() {
        let svc = service();
        let created = svc.create(sync_req()).await.unwrap();
        let fetched = svc.get(created.id).await.unwrap();
        assert_eq!(created, fetched);
    }

    #[tokio::test]
    async fn cancel_twice_stays_cancelled() {
        let svc = service();
        let booking = svc.create(sync_req()).await.unwrap();

        let once = svc.cancel(booking.id).await.unwrap();
        assert_eq!(once.status, BookingStatus::Cancelled);
        let twice = svc.cancel(booking.id).await.unwrap();
        assert_eq!(twice.status, BookingStatus::Cancelled);
    }

    #[tokio::test]
    async fn missing_id_is_not_found_everywhere() {
        let svc = service();
        let existing = svc.create(sync_req()).await.unwrap();
        let update = UpdateBookingReq {
            title: Some("renamed".into()),
            ..Default::default()
        };

        assert!(matches!(svc.get(99).await, Err(AppError::NotFound(_))));
        assert!(matches!(svc.update(99, update).await, Err(AppError::NotFound(_))));
        assert!(matches!(svc.delete(99).await, Err(AppError::NotFound(_))));
        assert!(matches!(svc.cancel(99).await, Err(AppError::NotFound(_))));

        assert_eq!(svc.list().await.unwrap(), vec![existing]);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = service();
        let booking = svc.create(sync_req()).await.unwrap();
        svc.delete(booking.id).await.unwrap();
        assert!(matches!(svc.get(booking.id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_moving_the_date_keeps_times_of_day() {
        let svc = service();
        let booking = svc.create(sync_req()).await.unwrap();

        let moved = svc
            .update(
                booking.id,
                UpdateBookingReq {
                    booking_date: Some(date!(2024 - 05 - 03)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(moved.booking_date, date!(2024 - 05 - 03));
        assert_eq!(moved.start_time, datetime!(2024-05-03 09:00));
        assert_eq!(moved.end_time, datetime!(2024-05-03 10:00));
        assert_eq!(moved.title, "weekly sync");
    }

    #[tokio::test]
    async fn update_never_touches_status() {
        let svc = service();
        let booking = svc.create(sync_req()).await.unwrap();
        svc.cancel(booking.id).await.unwrap();

        let renamed = svc
            .update(
                booking.id,
                UpdateBookingReq {
                    title: Some("retro".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(renamed.title, "retro");
        assert_eq!(renamed.status, BookingStatus::Cancelled);
        assert_eq!(renamed.start_time, booking.start_time);
    }

    #[tokio::test]
    async fn update_can_clear_the_description() {
        let svc = service();
        let booking = svc.create(sync_req()).await.unwrap();
        assert_eq!(booking.description.as_deref(), Some("roadmap"));

        let cleared = svc
            .update(
                booking.id,
                UpdateBookingReq {
                    description: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(cleared.description, None);
        assert_eq!(cleared.title, booking.title);
    }

    #[tokio::test]
    async fn update_rejects_inverted_times_and_empty_bodies() {
        let svc = service();
        let booking = svc.create(sync_req()).await.unwrap();

        let inverted = UpdateBookingReq {
            end_time: Some(time!(08:30)),
            ..Default::default()
        };
        assert!(matches!(svc.update(booking.id, inverted).await, Err(AppError::Validation(_))));
        assert!(matches!(
            svc.update(booking.id, UpdateBookingReq::default()).await,
            Err(AppError::Validation(_))
        ));

        assert_eq!(svc.get(booking.id).await.unwrap(), booking);
    }
}
