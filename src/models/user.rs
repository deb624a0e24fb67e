use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::Region;
use super::{RegionId, UserId};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMINISTRATEUR")]
    Administrator,
    #[serde(rename = "VOLONTAIRE")]
    Volunteer,
    #[serde(rename = "CONSOMMATEUR")]
    Consumer,
}

/// A registered user. The backend's password hash is never deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(rename = "nom", default)]
    pub last_name: String,
    #[serde(rename = "prenom", default)]
    pub first_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "telephone", default)]
    pub phone: String,
    pub role: Role,
    pub region: Option<Region>,
    #[serde(
        rename = "dateInscription",
        with = "super::timestamp::option",
        default
    )]
    pub registered_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

// ---------------------------------------------------------------------------
// Authentication payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "nom")]
    pub last_name: String,
    #[serde(rename = "prenom")]
    pub first_name: String,
    pub email: String,
    #[serde(rename = "telephone")]
    pub phone: String,
    #[serde(rename = "motDePasse")]
    pub password: String,
    #[serde(rename = "regionId")]
    pub region_id: RegionId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}
