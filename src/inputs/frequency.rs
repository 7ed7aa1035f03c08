//! Compounding frequency options

use serde::{Deserialize, Serialize};

/// How often interest is compounded each year
///
/// Serialises as its period count (`12` for monthly) so that form values
/// and JSON output use the same numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum CompoundingFrequency {
    Annually,
    SemiAnnually,
    Quarterly,
    #[default]
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    /// All options, in menu order
    pub const ALL: [CompoundingFrequency; 5] = [
        CompoundingFrequency::Annually,
        CompoundingFrequency::SemiAnnually,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Daily,
    ];

    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::SemiAnnually => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }

    /// Menu label (`Semi-annually`)
    pub fn label(&self) -> &'static str {
        match self {
            CompoundingFrequency::Annually => "Annually",
            CompoundingFrequency::SemiAnnually => "Semi-annually",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Daily => "Daily",
        }
    }

    /// Lower-case form for running text ("compounded quarterly")
    pub fn adverb(&self) -> &'static str {
        match self {
            CompoundingFrequency::Annually => "annually",
            CompoundingFrequency::SemiAnnually => "semi-annually",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Daily => "daily",
        }
    }

    pub fn from_periods(periods: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.periods_per_year() == periods)
    }
}

impl From<CompoundingFrequency> for u32 {
    fn from(frequency: CompoundingFrequency) -> Self {
        frequency.periods_per_year()
    }
}

impl TryFrom<u32> for CompoundingFrequency {
    type Error = String;

    fn try_from(periods: u32) -> Result<Self, Self::Error> {
        Self::from_periods(periods)
            .ok_or_else(|| format!("unsupported compounding frequency: {} periods per year", periods))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_round_trip_through_lookup() {
        for frequency in CompoundingFrequency::ALL {
            assert_eq!(CompoundingFrequency::from_periods(frequency.periods_per_year()), Some(frequency));
        }
        assert_eq!(CompoundingFrequency::from_periods(52), None);
    }

    #[test]
    fn test_serialises_as_period_count() {
        assert_eq!(serde_json::to_string(&CompoundingFrequency::Quarterly).unwrap(), "4");
        let parsed: CompoundingFrequency = serde_json::from_str("365").unwrap();
        assert_eq!(parsed, CompoundingFrequency::Daily);
        assert!(serde_json::from_str::<CompoundingFrequency>("7").is_err());
    }
}
