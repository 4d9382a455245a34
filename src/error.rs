use crate::consts::{MAX_YEAR, MIN_YEAR};
use crate::prelude::*;

/// The primitive date component that failed its coarse range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "year")]
    Year,
}

/// Which end of the supported domain an arithmetic result fell past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Bound {
    #[display(fmt = "lower")]
    Lower,
    #[display(fmt = "upper")]
    Upper,
}

/// Error type for date construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A single component is outside its numeric range, regardless of the others.
    #[error("{field} out of range: {value}")]
    OutOfRange { field: Field, value: u16 },

    /// Every component is in range, but together they do not name a real day.
    #[error("invalid date combination: {year}-{month:02}-{day:02} (month has {max_day} days)")]
    InvalidCombination {
        month: u8,
        day: u8,
        year: u16,
        max_day: u8,
    },

    /// The input was valid but the requested result lies outside the supported years.
    #[error(
        "result crosses the {bound} bound of the supported domain ({min}..={max})",
        min = MIN_YEAR,
        max = MAX_YEAR
    )]
    DomainExceeded { bound: Bound },
}

impl DateError {
    pub(crate) const fn out_of_range(field: Field, value: u16) -> Self {
        Self::OutOfRange { field, value }
    }

    /// Returns true for [`DateError::OutOfRange`]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Returns true for [`DateError::InvalidCombination`]
    pub const fn is_invalid_combination(&self) -> bool {
        matches!(self, Self::InvalidCombination { .. })
    }

    /// Returns true for [`DateError::DomainExceeded`]
    pub const fn is_domain_exceeded(&self) -> bool {
        matches!(self, Self::DomainExceeded { .. })
    }

    /// The offending field, if this is an [`DateError::OutOfRange`]
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::OutOfRange { field, .. } => Some(*field),
            Self::InvalidCombination { .. } | Self::DomainExceeded { .. } => None,
        }
    }
}
