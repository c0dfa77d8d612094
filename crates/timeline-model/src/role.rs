//! Semantic column roles.
//!
//! A host-side column may carry any subset of these roles. Roles locate the
//! relevant data without relying on column name or position.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimelineError;

/// A semantic tag a column may carry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Role {
    /// The value placed on the time axis and used as grouping key.
    Date,
    /// Short event label shown next to the marker and in tooltips.
    Event,
    /// Free-text description shown in tooltips.
    Description,
    /// Category label resolved through the color encoding scale.
    Color,
    /// Category label resolved through the symbol encoding scale.
    Symbol,
}

impl Role {
    /// All recognized roles, in resolution order.
    pub const ALL: [Role; 5] = [
        Role::Date,
        Role::Event,
        Role::Description,
        Role::Color,
        Role::Symbol,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Date => "date",
            Role::Event => "event",
            Role::Description => "description",
            Role::Color => "color",
            Role::Symbol => "symbol",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = TimelineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(Role::Date),
            "event" => Ok(Role::Event),
            "description" => Ok(Role::Description),
            "color" => Ok(Role::Color),
            "symbol" => Ok(Role::Symbol),
            other => Err(TimelineError::UnknownRole(other.to_string())),
        }
    }
}
