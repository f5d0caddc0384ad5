//! Participant activity mode, as recorded in the `currentMode` column of the
//! activity logs.

use std::fmt;
use std::str::FromStr;

use crate::CtError;

/// What a participant is doing at a logged instant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityMode {
    AtHome,
    /// Moving between locations.  The only mode that contributes trajectory
    /// and traffic points by default.
    Transport,
    AtWork,
    AtRecreation,
    AtRestaurant,
}

impl ActivityMode {
    /// Label as written in the logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityMode::AtHome       => "AtHome",
            ActivityMode::Transport    => "Transport",
            ActivityMode::AtWork       => "AtWork",
            ActivityMode::AtRecreation => "AtRecreation",
            ActivityMode::AtRestaurant => "AtRestaurant",
        }
    }
}

impl FromStr for ActivityMode {
    type Err = CtError;
    fn from_str(s: &str) -> Result<ActivityMode, CtError> {
        match s.trim() {
            "AtHome"       => Ok(ActivityMode::AtHome),
            "Transport"    => Ok(ActivityMode::Transport),
            "AtWork"       => Ok(ActivityMode::AtWork),
            "AtRecreation" => Ok(ActivityMode::AtRecreation),
            "AtRestaurant" => Ok(ActivityMode::AtRestaurant),
            other => Err(CtError::Parse(format!("unknown activity mode {other:?}"))),
        }
    }
}

impl fmt::Display for ActivityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
