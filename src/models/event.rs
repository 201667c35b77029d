//! Event models: exhibitions, seminars, registrations and invitations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::timestamp;

/// Event kind as stored by the backend (`E` or `S`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "E")]
    Exhibition,
    #[serde(rename = "S")]
    Seminar,
}

/// Admin event creation through `/event/`.
///
/// `expense` applies to exhibitions, `descrip` to seminars.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EventCreate {
    #[validate(length(min = 1, message = "Event name is required"))]
    pub e_name: String,
    pub event_type: EventType,
    #[serde(with = "timestamp")]
    pub start_datetime: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub stop_datetime: DateTime<Utc>,
    #[validate(length(min = 1, message = "Topic is required"))]
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descrip: Option<String>,
}

/// Identifier returned by `POST /event/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCreated {
    pub event_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exhibition {
    pub event_id: i64,
    pub e_name: String,
    pub event_type: String,
    #[serde(with = "timestamp")]
    pub start_datetime: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub stop_datetime: DateTime<Utc>,
    pub topic: String,
    pub expense: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExhibitionCreate {
    #[validate(length(min = 1, message = "Event name is required"))]
    pub e_name: String,
    pub event_type: EventType,
    #[serde(with = "timestamp")]
    pub start_datetime: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub stop_datetime: DateTime<Utc>,
    #[validate(length(min = 1, message = "Topic is required"))]
    pub topic: String,
    #[validate(range(min = 0.0, message = "Expense cannot be negative"))]
    pub expense: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seminar {
    pub event_id: i64,
    pub e_name: String,
    pub event_type: String,
    #[serde(with = "timestamp")]
    pub start_datetime: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub stop_datetime: DateTime<Utc>,
    pub topic: String,
    pub descrip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SeminarCreate {
    #[validate(length(min = 1, message = "Event name is required"))]
    pub e_name: String,
    pub event_type: EventType,
    #[serde(with = "timestamp")]
    pub start_datetime: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub stop_datetime: DateTime<Utc>,
    #[validate(length(min = 1, message = "Topic is required"))]
    pub topic: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub descrip: String,
}

/// Exhibition registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub registration_id: i64,
    pub event_id: i64,
    pub registrant_name: String,
    pub registrant_email: String,
    #[serde(with = "timestamp")]
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegistrationCreate {
    #[validate(length(min = 1, message = "Name is required"))]
    pub registrant_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub registrant_email: String,
    #[serde(with = "timestamp")]
    pub registered_at: DateTime<Utc>,
}

/// Seminar invitation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub invitation_id: i64,
    pub event_id: i64,
    pub invitee_name: String,
    pub invitee_email: String,
    #[serde(with = "timestamp")]
    pub invited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InvitationCreate {
    #[validate(length(min = 1, message = "Name is required"))]
    pub invitee_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub invitee_email: String,
    #[serde(with = "timestamp")]
    pub invited_at: DateTime<Utc>,
}
