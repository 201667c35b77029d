//! Room reservation client (`/room-reservation/`)

use crate::{
    api::validate_payload,
    error::ApiResult,
    http::HttpClient,
    models::room::{RoomReservation, RoomReservationCreate},
};

#[derive(Clone)]
pub struct ReservationsApi {
    http: HttpClient,
}

impl ReservationsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ApiResult<Vec<RoomReservation>> {
        self.http.get("/room-reservation/").await
    }

    pub async fn get(&self, reservation_id: i64) -> ApiResult<RoomReservation> {
        self.http
            .get(&format!("/room-reservation/{}", reservation_id))
            .await
    }

    pub async fn by_room(&self, room_id: i64) -> ApiResult<Vec<RoomReservation>> {
        self.http
            .get(&format!("/room-reservation/room/{}", room_id))
            .await
    }

    pub async fn create(&self, reservation: &RoomReservationCreate) -> ApiResult<RoomReservation> {
        validate_payload(reservation)?;
        self.http.post("/room-reservation/", reservation).await
    }

    pub async fn update(
        &self,
        reservation_id: i64,
        reservation: &RoomReservationCreate,
    ) -> ApiResult<RoomReservation> {
        validate_payload(reservation)?;
        self.http
            .put(&format!("/room-reservation/{}", reservation_id), reservation)
            .await
    }

    pub async fn delete(&self, reservation_id: i64) -> ApiResult<()> {
        self.http
            .delete(&format!("/room-reservation/{}", reservation_id))
            .await
    }
}
