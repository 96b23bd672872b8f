//! Stat-ratio scaling and mitigation math.
//!
//! Magnitudes follow one shape everywhere: a base value plus the caster's stat
//! times a multiplier, optionally widened by a jitter roll. Mitigation is a
//! flat subtraction in damage units derived from the target's stats, floored
//! at 0. All math is f64; rounding belongs to display layers.

use crate::participant::ParticipantSnapshot;
use crate::stats::StatId;

/// Additive contribution from the caster's stats: `stat value * multiplier`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StatScaling {
    /// Caster stat the magnitude scales with.
    pub stat: StatId,

    /// Multiplier applied to the caster's stat value.
    pub multiplier: f64,
}

impl StatScaling {
    /// Contribution of this scaling rule for the given caster.
    ///
    /// A stat missing from the caster's stat map contributes 0.
    pub fn contribution(&self, caster: &ParticipantSnapshot) -> f64 {
        caster.stat(&self.stat) * self.multiplier
    }
}

/// Flat damage reduction from the target's stats: `stat value * multiplier`.
///
/// The reduction is in the same units as damage - this is not a percentage.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Mitigation {
    /// Target stat the reduction is derived from.
    pub stat: StatId,

    /// Multiplier applied to the target's stat value.
    pub multiplier: f64,
}

impl Mitigation {
    /// Reduction in damage units for the given target.
    pub fn reduction(&self, target: &ParticipantSnapshot) -> f64 {
        target.stat(&self.stat) * self.multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_multiplies_the_caster_stat() {
        let caster = ParticipantSnapshot::new("caster", "red", 100.0, 100.0)
            .with_stat("stat.attackPower", 30.0);
        let scaling = StatScaling {
            stat: StatId::from("stat.attackPower"),
            multiplier: 1.1,
        };

        assert!((scaling.contribution(&caster) - 33.0).abs() < 1e-12);
    }

    #[test]
    fn missing_caster_stat_contributes_zero() {
        let caster = ParticipantSnapshot::new("caster", "red", 100.0, 100.0);
        let scaling = StatScaling {
            stat: StatId::from("stat.magic"),
            multiplier: 2.0,
        };

        assert_eq!(scaling.contribution(&caster), 0.0);
    }

    #[test]
    fn mitigation_is_flat_target_stat_times_multiplier() {
        let target =
            ParticipantSnapshot::new("target", "blue", 80.0, 80.0).with_stat("stat.defense", 10.0);
        let mitigation = Mitigation {
            stat: StatId::from("stat.defense"),
            multiplier: 0.4,
        };

        assert!((mitigation.reduction(&target) - 4.0).abs() < 1e-12);
    }
}
