//! Target selection for ability execution.
//!
//! A `selectTargets` node resolves one [`TargetSelector`] against the
//! participant snapshot list and the caster's team. The resolved id list
//! becomes working state consumed by subsequent effect nodes in the same
//! traversal; its order is part of the execution contract (snapshot order for
//! team selectors, supplied order for explicit targets).

use crate::participant::{ParticipantId, ParticipantSnapshot, TeamId};

/// How a `selectTargets` node picks its targets.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum TargetSelector {
    /// The context's primary target if it is on another team, else the first
    /// participant on another team in snapshot order.
    PrimaryEnemy,

    /// Every participant sharing the caster's team, in snapshot order.
    /// Excludes the caster unless `includeCaster` is set.
    AllAllies,

    /// Every participant on a team different from the caster's, in snapshot
    /// order.
    AllEnemies,

    /// The caster alone.
    Caster,

    /// The context's explicit target id list, in the order supplied. Ids
    /// absent from the snapshot are dropped.
    Explicit,
}

/// Resolves a selector to an ordered target id list.
///
/// No liveness filtering happens here - a participant at or below 0 health is
/// still a valid target; death handling belongs to the caller.
pub(crate) fn resolve_targets(
    selector: TargetSelector,
    include_caster: bool,
    caster: &ParticipantId,
    caster_team: &TeamId,
    primary_target: Option<&ParticipantId>,
    explicit_targets: &[ParticipantId],
    participants: &[ParticipantSnapshot],
) -> Vec<ParticipantId> {
    let mut targets = match selector {
        TargetSelector::PrimaryEnemy => {
            let primary = primary_target
                .and_then(|id| participants.iter().find(|p| p.id == *id))
                .filter(|p| p.team != *caster_team);
            let chosen = primary.or_else(|| participants.iter().find(|p| p.team != *caster_team));
            chosen.map(|p| vec![p.id.clone()]).unwrap_or_default()
        }

        TargetSelector::AllAllies => participants
            .iter()
            .filter(|p| p.team == *caster_team && (include_caster || p.id != *caster))
            .map(|p| p.id.clone())
            .collect(),

        TargetSelector::AllEnemies => participants
            .iter()
            .filter(|p| p.team != *caster_team)
            .map(|p| p.id.clone())
            .collect(),

        TargetSelector::Caster => vec![caster.clone()],

        TargetSelector::Explicit => explicit_targets
            .iter()
            .filter(|id| participants.iter().any(|p| p.id == **id))
            .cloned()
            .collect(),
    };

    // For selectors that cannot produce the caster on their own, includeCaster
    // appends it; allAllies already placed it in snapshot-order position.
    if include_caster && !targets.contains(caster) {
        targets.push(caster.clone());
    }

    targets
}
