//! Body systems, receptor classes, and efficiency bands for HealthCore.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Banding enums expose a `for_efficiency()` constructor that tests thresholds
//! top-down with inclusive lower bounds.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// BodySystem
// ---------------------------------------------------------------------------

/// Physiological stage a nutrient passes through.
///
/// ```text
/// intestinal → hepatic → circulatory → cellular
/// ```
///
/// Variant order follows the pathway, so `Ord` and `BTreeMap` iteration do too.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum BodySystem {
    Intestinal,
    Hepatic,
    Circulatory,
    Cellular,
}

impl BodySystem {
    /// Every body system in pathway order.
    pub const ALL: [Self; 4] = [
        Self::Intestinal,
        Self::Hepatic,
        Self::Circulatory,
        Self::Cellular,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intestinal => "intestinal",
            Self::Hepatic => "hepatic",
            Self::Circulatory => "circulatory",
            Self::Cellular => "cellular",
        }
    }
}

impl fmt::Display for BodySystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodySystem {
    type Err = CoreError;

    /// Case-insensitive parse of the `snake_case` name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|system| system.as_str() == folded)
            .ok_or_else(|| CoreError::not_found("body_system", s))
    }
}

// ---------------------------------------------------------------------------
// ReceptorClass
// ---------------------------------------------------------------------------

/// Coarse classification attached to each efficiency result.
///
/// Only two outcomes exist: a receptor whose primary label mentions iron is
/// `IronAbsorption`, everything else is `VitaminD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReceptorClass {
    IronAbsorption,
    VitaminD,
}

impl ReceptorClass {
    /// Classify a receptor by its primary receptor label.
    #[must_use]
    pub fn from_primary_receptor(label: &str) -> Self {
        if label.to_lowercase().contains("iron") {
            Self::IronAbsorption
        } else {
            Self::VitaminD
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IronAbsorption => "iron_absorption",
            Self::VitaminD => "vitamin_d",
        }
    }
}

impl fmt::Display for ReceptorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SystemNote
// ---------------------------------------------------------------------------

/// Four-tier note attached to a body system's mean efficiency.
///
/// ```text
/// >= 120  enhanced
/// >= 90   optimal
/// >= 70   adequate
/// else    compromised
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SystemNote {
    Enhanced,
    Optimal,
    Adequate,
    Compromised,
}

impl SystemNote {
    #[must_use]
    pub fn for_efficiency(efficiency: f64) -> Self {
        if efficiency >= 120.0 {
            Self::Enhanced
        } else if efficiency >= 90.0 {
            Self::Optimal
        } else if efficiency >= 70.0 {
            Self::Adequate
        } else {
            Self::Compromised
        }
    }

    /// Human-readable note text.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Enhanced => "System operating at enhanced efficiency",
            Self::Optimal => "System functioning optimally",
            Self::Adequate => "System functioning adequately with room for improvement",
            Self::Compromised => "System efficiency compromised - check limiting factors",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enhanced => "enhanced",
            Self::Optimal => "optimal",
            Self::Adequate => "adequate",
            Self::Compromised => "compromised",
        }
    }
}

impl fmt::Display for SystemNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CommentaryBand
// ---------------------------------------------------------------------------

/// Three-way band used to pick a commentary template.
///
/// Coarser than [`SystemNote`]: anything at or above 90 is `Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CommentaryBand {
    Strong,
    Moderate,
    Weak,
}

impl CommentaryBand {
    #[must_use]
    pub fn for_efficiency(efficiency: f64) -> Self {
        if efficiency >= 90.0 {
            Self::Strong
        } else if efficiency >= 70.0 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    /// Adjective interpolated into commentary prose.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "excellent",
            Self::Moderate => "moderate",
            Self::Weak => "reduced",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

impl fmt::Display for CommentaryBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ClusterStatus
// ---------------------------------------------------------------------------

/// Display status of a single receptor cluster.
///
/// ```text
/// >= 90   optimal
/// >= 70   good
/// >= 50   attention
/// else    concern
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClusterStatus {
    Optimal,
    Good,
    Attention,
    Concern,
}

impl ClusterStatus {
    #[must_use]
    pub fn for_efficiency(efficiency: f64) -> Self {
        if efficiency >= 90.0 {
            Self::Optimal
        } else if efficiency >= 70.0 {
            Self::Good
        } else if efficiency >= 50.0 {
            Self::Attention
        } else {
            Self::Concern
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Good => "good",
            Self::Attention => "attention",
            Self::Concern => "concern",
        }
    }
}

impl fmt::Display for ClusterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // --- Serde roundtrip tests ---

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(
        system_intestinal,
        BodySystem,
        BodySystem::Intestinal,
        "intestinal"
    );
    test_serde_roundtrip!(
        class_iron,
        ReceptorClass,
        ReceptorClass::IronAbsorption,
        "iron_absorption"
    );
    test_serde_roundtrip!(
        class_vitamin_d,
        ReceptorClass,
        ReceptorClass::VitaminD,
        "vitamin_d"
    );
    test_serde_roundtrip!(
        note_compromised,
        SystemNote,
        SystemNote::Compromised,
        "compromised"
    );
    test_serde_roundtrip!(
        cluster_attention,
        ClusterStatus,
        ClusterStatus::Attention,
        "attention"
    );

    // --- Display matches serde ---

    #[test]
    fn display_matches_serde() {
        for system in BodySystem::ALL {
            let json = serde_json::to_string(&system).unwrap();
            assert_eq!(json, format!("\"{system}\""));
        }
    }

    // --- Parsing ---

    #[test]
    fn body_system_parses_case_insensitively() {
        assert_eq!("Hepatic".parse::<BodySystem>().unwrap(), BodySystem::Hepatic);
        assert_eq!(
            " CELLULAR ".parse::<BodySystem>().unwrap(),
            BodySystem::Cellular
        );
    }

    #[test]
    fn unknown_body_system_is_not_found() {
        let err = "skeletal".parse::<BodySystem>().unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn body_systems_order_along_pathway() {
        let mut shuffled = vec![
            BodySystem::Cellular,
            BodySystem::Intestinal,
            BodySystem::Circulatory,
            BodySystem::Hepatic,
        ];
        shuffled.sort();
        assert_eq!(shuffled, BodySystem::ALL.to_vec());
    }

    // --- Classification ---

    #[rstest]
    #[case("Iron transporter", ReceptorClass::IronAbsorption)]
    #[case("heme IRON carrier", ReceptorClass::IronAbsorption)]
    #[case("DMT1", ReceptorClass::VitaminD)]
    #[case("TRPV6", ReceptorClass::VitaminD)]
    #[case("", ReceptorClass::VitaminD)]
    fn classification_has_two_outcomes(#[case] label: &str, #[case] expected: ReceptorClass) {
        assert_eq!(ReceptorClass::from_primary_receptor(label), expected);
    }

    // --- Banding ---

    #[rstest]
    #[case(150.0, SystemNote::Enhanced)]
    #[case(120.0, SystemNote::Enhanced)]
    #[case(119.99, SystemNote::Optimal)]
    #[case(90.0, SystemNote::Optimal)]
    #[case(89.99, SystemNote::Adequate)]
    #[case(70.0, SystemNote::Adequate)]
    #[case(69.99, SystemNote::Compromised)]
    #[case(20.0, SystemNote::Compromised)]
    fn system_note_bands_are_lower_inclusive(#[case] efficiency: f64, #[case] expected: SystemNote) {
        assert_eq!(SystemNote::for_efficiency(efficiency), expected);
    }

    #[rstest]
    #[case(130.0, CommentaryBand::Strong)]
    #[case(90.0, CommentaryBand::Strong)]
    #[case(89.5, CommentaryBand::Moderate)]
    #[case(70.0, CommentaryBand::Moderate)]
    #[case(69.0, CommentaryBand::Weak)]
    fn commentary_band_is_three_way(#[case] efficiency: f64, #[case] expected: CommentaryBand) {
        assert_eq!(CommentaryBand::for_efficiency(efficiency), expected);
    }

    #[rstest]
    #[case(90.0, ClusterStatus::Optimal)]
    #[case(70.0, ClusterStatus::Good)]
    #[case(50.0, ClusterStatus::Attention)]
    #[case(49.9, ClusterStatus::Concern)]
    fn cluster_status_bands(#[case] efficiency: f64, #[case] expected: ClusterStatus) {
        assert_eq!(ClusterStatus::for_efficiency(efficiency), expected);
    }

    #[test]
    fn note_messages_are_distinct() {
        let messages = [
            SystemNote::Enhanced.message(),
            SystemNote::Optimal.message(),
            SystemNote::Adequate.message(),
            SystemNote::Compromised.message(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
