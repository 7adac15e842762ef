//! Pod tiers ordered by size desirability.

use serde::{Deserialize, Serialize};

use crate::sizing::STANDARD_POD_SIZE;

/// The three pod classes used for standing fairness, ordered worst to best.
///
/// A player with strictly more match points must never sit in a strictly
/// lower tier than a player with fewer match points.
///
/// # Examples
///
/// ```
/// use podforge_core::PodTier;
///
/// assert_eq!(PodTier::of_size(8), PodTier::Standard);
/// assert_eq!(PodTier::of_size(6), PodTier::EvenNonStandard);
/// assert_eq!(PodTier::of_size(9), PodTier::OddNonStandard);
/// assert!(PodTier::OddNonStandard < PodTier::EvenNonStandard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PodTier {
    /// Non-standard pod with an odd player count.
    OddNonStandard,

    /// Non-standard pod with an even player count.
    EvenNonStandard,

    /// Pod of the standard size.
    Standard,
}

impl PodTier {
    /// Classifies a pod by its size.
    pub fn of_size(size: usize) -> Self {
        if size == STANDARD_POD_SIZE {
            PodTier::Standard
        } else if size % 2 == 0 {
            PodTier::EvenNonStandard
        } else {
            PodTier::OddNonStandard
        }
    }
}
