//! Study room and room reservation models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: i64,
    pub capacity: i32,
}

/// Create or update a room
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoomCreate {
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomReservation {
    pub reservation_id: i64,
    pub room_id: i64,
    pub topic_description: String,
    #[serde(with = "timestamp")]
    pub reserve_date: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub end_time: DateTime<Utc>,
    pub group_size: i32,
    pub l_name: String,
    pub f_name: String,
    #[serde(default)]
    pub customer_id: Option<i64>,
}

/// Create or replace a reservation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoomReservationCreate {
    pub room_id: i64,
    #[validate(length(min = 1, message = "Topic description is required"))]
    pub topic_description: String,
    #[serde(with = "timestamp")]
    pub reserve_date: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub end_time: DateTime<Utc>,
    #[validate(range(min = 1, message = "Group size must be at least 1"))]
    pub group_size: i32,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub l_name: String,
    #[validate(length(min = 1, message = "First name is required"))]
    pub f_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
}
