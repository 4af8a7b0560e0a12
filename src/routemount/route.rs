use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    route::booking::{
        cancel_booking, create_booking, delete_booking, get_booking, list_bookings, update_booking,
    },
    service::booking::BookingService,
};

pub fn create_router(service: BookingService) -> Router {
    Router::new()
    .route("/bookings", get(list_bookings).post(create_booking))     //list all bookings, make a booking
    .route("/bookings/{id}", get(get_booking)                         //get booking by id
        .put(update_booking)                                          //update whitelisted fields
        .patch(update_booking)
        .delete(delete_booking))                                      //remove booking
    .route("/bookings/{id}/cancel", post(cancel_booking))             //mark booking cancelled
    .layer(TraceLayer::new_for_http())
    .with_state(service)
}
