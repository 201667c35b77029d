//! Sponsor models (organizations and individuals)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SponsorType {
    #[serde(rename = "O")]
    Organization,
    #[serde(rename = "I")]
    Individual,
}

/// Entry of `GET /sponsors/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsorSummary {
    pub sponsor_id: i64,
    pub sponsor_type: SponsorType,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrganizationCreate {
    #[validate(length(min = 1, message = "Organization name is required"))]
    pub org_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub sponsor_id: i64,
    pub sponsor_type: SponsorType,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    pub org_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IndividualCreate {
    #[validate(length(min = 1, message = "First name is required"))]
    pub f_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub l_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    pub sponsor_id: i64,
    pub sponsor_type: SponsorType,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    pub f_name: String,
    pub l_name: String,
}

/// Sponsorship of a seminar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeminarSponsorCreate {
    pub sponsor_id: i64,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeminarSponsor {
    pub event_id: i64,
    pub sponsor_id: i64,
    pub amount: f64,
}
