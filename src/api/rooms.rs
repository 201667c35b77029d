//! Study room client (`/room/`)

use crate::{
    api::validate_payload,
    error::ApiResult,
    http::HttpClient,
    models::room::{Room, RoomCreate},
};

#[derive(Clone)]
pub struct RoomsApi {
    http: HttpClient,
}

impl RoomsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ApiResult<Vec<Room>> {
        self.http.get("/room/").await
    }

    pub async fn get(&self, room_id: i64) -> ApiResult<Room> {
        self.http.get(&format!("/room/{}", room_id)).await
    }

    pub async fn create(&self, room: &RoomCreate) -> ApiResult<Room> {
        validate_payload(room)?;
        self.http.post("/room/", room).await
    }

    pub async fn update(&self, room_id: i64, room: &RoomCreate) -> ApiResult<Room> {
        validate_payload(room)?;
        self.http.put(&format!("/room/{}", room_id), room).await
    }

    pub async fn delete(&self, room_id: i64) -> ApiResult<()> {
        self.http.delete(&format!("/room/{}", room_id)).await
    }
}
