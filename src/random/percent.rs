use serde::Deserialize;

use crate::error::ValidationError;

/// Whole-number probability in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u64")]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Self = Self(0);
    pub const HUNDRED: Self = Self(100);

    /// Builds a percentage, capping anything above 100.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u64> for Percent {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value > 100 {
            return Err(ValidationError::PercentOutOfRange { value });
        }
        u8::try_from(value)
            .map(Percent)
            .map_err(|_err| ValidationError::PercentOutOfRange { value })
    }
}

impl std::str::FromStr for Percent {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s
            .trim()
            .trim_end_matches('%')
            .parse()
            .map_err(|err| ValidationError::InvalidNumber { source: err })?;
        Percent::try_from(value)
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
