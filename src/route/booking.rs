use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde_json::Value;
use tracing::warn;

use crate::{
    models::booking::{Booking, CreateBookingReq, UpdateBookingReq},
    service::booking::BookingService,
    store::BookingId,
    utils::{errorhandler::AppError, response::Envelope},
};

type Reply<T> = Result<Json<Envelope<T>>, AppError>;

fn booking_id(path: Result<Path<BookingId>, PathRejection>) -> Result<BookingId, AppError> {
    let Path(id) = path.map_err(|e| {
        warn!("Rejected booking id: {}", e.body_text());
        AppError::validation("booking id must be an integer")
    })?;
    Ok(id)
}

pub async fn list_bookings(State(service): State<BookingService>) -> Reply<Vec<Booking>> {
    let bookings = service.list().await?;
    Ok(Envelope::success("Booking fetched successfully.", bookings))
}

pub async fn create_booking(
    State(service): State<BookingService>,
    payload: Result<Json<CreateBookingReq>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<Booking>>), AppError> {
    let Json(payload) = payload?;
    let booking = service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Envelope::success("Booking created successfully.", booking),
    ))
}

pub async fn get_booking(
    State(service): State<BookingService>,
    path: Result<Path<BookingId>, PathRejection>,
) -> Reply<Booking> {
    let booking = service.get(booking_id(path)?).await?;
    Ok(Envelope::success("Booking fetched successfully.", booking))
}

pub async fn update_booking(
    State(service): State<BookingService>,
    path: Result<Path<BookingId>, PathRejection>,
    payload: Result<Json<UpdateBookingReq>, JsonRejection>,
) -> Reply<Booking> {
    let id = booking_id(path)?;
    let Json(payload) = payload?;
    let booking = service.update(id, payload).await?;
    Ok(Envelope::success("Booking updated successfully.", booking))
}

pub async fn delete_booking(
    State(service): State<BookingService>,
    path: Result<Path<BookingId>, PathRejection>,
) -> Reply<Value> {
    service.delete(booking_id(path)?).await?;
    Ok(Envelope::empty("Booking deleted successfully."))
}

pub async fn cancel_booking(
    State(service): State<BookingService>,
    path: Result<Path<BookingId>, PathRejection>,
) -> Reply<Booking> {
    let booking = service.cancel(booking_id(path)?).await?;
    Ok(Envelope::success("Booking cancelled successfully.", booking))
}
