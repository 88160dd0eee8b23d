use std::fmt;
use std::str::FromStr;

use crate::error::MsmError;

/// Which distribution an install pulls from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ServerKind {
    /// Official server jar published through the version manifest.
    #[default]
    Vanilla,
    /// Spigot, compiled locally with BuildTools.
    Spigot,
}

impl ServerKind {
    /// Label written in front of the version in a freshly staged marker.
    pub fn label(&self) -> &'static str {
        match self {
            ServerKind::Vanilla => "VANILLA",
            ServerKind::Spigot => "SPIGOT",
        }
    }
}

impl fmt::Display for ServerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServerKind {
    type Err = MsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "VANILLA" => Ok(ServerKind::Vanilla),
            "SPIGOT" => Ok(ServerKind::Spigot),
            _ => Err(MsmError::UnsupportedKind(s.to_string())),
        }
    }
}
