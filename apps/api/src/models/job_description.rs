use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a role is based. The dashboard offers a fixed set of hiring
/// locations, but any other label is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Location {
    Hyderabad,
    Bangalore,
    Pune,
    DelhiNcr,
    Remote,
    Other(String),
}

impl Location {
    /// Locations offered in the upload form, in display order.
    pub const PRESETS: [Location; 5] = [
        Location::Hyderabad,
        Location::Bangalore,
        Location::Pune,
        Location::DelhiNcr,
        Location::Remote,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Location::Hyderabad => "Hyderabad",
            Location::Bangalore => "Bangalore",
            Location::Pune => "Pune",
            Location::DelhiNcr => "Delhi NCR",
            Location::Remote => "Remote",
            Location::Other(label) => label,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl From<String> for Location {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Hyderabad" => Location::Hyderabad,
            "Bangalore" => Location::Bangalore,
            "Pune" => Location::Pune,
            "Delhi NCR" => Location::DelhiNcr,
            "Remote" => Location::Remote,
            _ => Location::Other(label),
        }
    }
}

impl From<&str> for Location {
    fn from(label: &str) -> Self {
        Location::from(label.to_string())
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        match location {
            Location::Other(label) => label,
            preset => preset.as_str().to_string(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An uploaded job description. Immutable once created; analyses copy the
/// fields they need instead of referencing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescription {
    pub id: Uuid,
    pub role: String,
    pub location: Location,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Upload payload for a job description, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct NewJobDescription {
    pub role: String,
    pub location: Location,
    pub text: String,
}
