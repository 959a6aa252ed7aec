//! Geographic region codes recognized by the CLI.
//!
//! The dataset mixes ISO-3166-1-alpha-2 country codes with Eurostat
//! aggregate codes (EU28, EFTA). The transformation core never inspects this
//! enum — it filters on an opaque string — but the CLI validates user input
//! against it and can list the supported codes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Whether a code names a single country or a statistical aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Country,
    Aggregate,
}

/// A recognized region code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Pt,
    Es,
    Eu28,
    Efta,
}

impl Region {
    /// All recognized regions, countries first.
    pub const ALL: [Region; 4] = [Region::Pt, Region::Es, Region::Eu28, Region::Efta];

    /// The code as it appears in the dataset.
    pub fn code(self) -> &'static str {
        match self {
            Region::Pt => "PT",
            Region::Es => "ES",
            Region::Eu28 => "EU28",
            Region::Efta => "EFTA",
        }
    }

    pub fn kind(self) -> RegionKind {
        match self {
            Region::Pt | Region::Es => RegionKind::Country,
            Region::Eu28 | Region::Efta => RegionKind::Aggregate,
        }
    }

    /// Only the codes that name actual countries.
    pub fn countries() -> impl Iterator<Item = Region> {
        Self::ALL
            .into_iter()
            .filter(|region| region.kind() == RegionKind::Country)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a code is not in the recognized set.
#[derive(Debug, Clone, Error)]
#[error("unknown region code {code:?} (expected one of PT, ES, EU28, EFTA)")]
pub struct UnknownRegion {
    pub code: String,
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|region| region.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownRegion {
                code: code.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("pt".parse::<Region>().unwrap(), Region::Pt);
        assert_eq!("PT".parse::<Region>().unwrap(), Region::Pt);
        assert_eq!("eu28".parse::<Region>().unwrap(), Region::Eu28);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "XX".parse::<Region>().unwrap_err();
        assert_eq!(err.code, "XX");
    }

    #[test]
    fn test_countries_excludes_aggregates() {
        let countries: Vec<Region> = Region::countries().collect();
        assert_eq!(countries, vec![Region::Pt, Region::Es]);
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Region::Efta.to_string(), "EFTA");
    }
}
