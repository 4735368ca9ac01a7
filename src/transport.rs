//! Transport modes and their display names.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Co2Error;

/// A transport mode the calculator knows an emission rate for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Car,
    Plane,
    Train,
    Bus,
}

impl TransportMode {
    /// All modes in their stable enumeration order.
    ///
    /// The comparison chart lists its bars in this order.
    pub const ALL: [Self; 4] = [Self::Car, Self::Plane, Self::Train, Self::Bus];

    /// Identifier used by selectors, config keys and the CLI.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Plane => "plane",
            Self::Train => "train",
            Self::Bus => "bus",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Plane => "Plane",
            Self::Train => "Train",
            Self::Bus => "Bus",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TransportMode {
    type Err = Co2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "plane" => Ok(Self::Plane),
            "train" => Ok(Self::Train),
            "bus" => Ok(Self::Bus),
            _ => Err(Co2Error::UnknownMode(s.to_string())),
        }
    }
}

/// Display name for a raw mode identifier.
///
/// Unrecognized identifiers are shown as-is rather than rejected.
#[must_use]
pub fn display_name_for(id: &str) -> Cow<'_, str> {
    id.parse::<TransportMode>()
        .map_or(Cow::Borrowed(id), |mode| Cow::Borrowed(mode.display_name()))
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
