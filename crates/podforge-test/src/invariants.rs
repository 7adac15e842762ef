//! Result invariant checks.

use std::collections::{HashMap, HashSet};

use podforge_core::{PodTier, RoundOutcome, RoundRequest};

/// Checks placement, cardinality, cube uniqueness, capacity and tier
/// fairness of `outcome` against `request`.
pub fn check_round_invariants(request: &RoundRequest, outcome: &RoundOutcome) -> Result<(), String> {
    let active: HashMap<&str, i64> = request
        .players
        .iter()
        .filter(|p| p.is_active())
        .map(|p| (p.id.as_str(), p.match_points))
        .collect();

    let mut seen = HashSet::new();
    for pod in &outcome.pods {
        if pod.player_ids.len() != pod.size {
            return Err(format!(
                "pod {} has {} players, expected {}",
                pod.index,
                pod.player_ids.len(),
                pod.size
            ));
        }
        for id in &pod.player_ids {
            if !active.contains_key(id.as_str()) {
                return Err(format!("pod {} holds unknown or dropped player {}", pod.index, id));
            }
            if !seen.insert(id.as_str()) {
                return Err(format!("player {} placed twice", id));
            }
        }
    }
    if seen.len() != active.len() {
        return Err(format!("{} of {} players placed", seen.len(), active.len()));
    }

    let mut used = HashSet::new();
    for pod in &outcome.pods {
        let Some(cube_id) = &pod.cube_id else { continue };
        if !used.insert(cube_id.as_str()) {
            return Err(format!("cube {} used twice", cube_id));
        }
        let cube = request
            .cubes
            .iter()
            .find(|c| &c.id == cube_id)
            .ok_or_else(|| format!("unknown cube {}", cube_id))?;
        if !cube.fits(pod.size) {
            return Err(format!("cube {} over capacity in pod {}", cube_id, pod.index));
        }
    }

    let placed: Vec<(i64, PodTier)> = outcome
        .pods
        .iter()
        .flat_map(|pod| {
            let tier = PodTier::of_size(pod.size);
            pod.player_ids.iter().map(move |id| (id, tier))
        })
        .map(|(id, tier)| (active[id.as_str()], tier))
        .collect();
    for &(mp_a, tier_a) in &placed {
        for &(mp_b, tier_b) in &placed {
            if mp_a > mp_b && tier_a < tier_b {
                return Err(format!(
                    "player with {} points in {:?} below player with {} points in {:?}",
                    mp_a, tier_a, mp_b, tier_b
                ));
            }
        }
    }

    Ok(())
}

/// Panics with the first invariant violation.
pub fn assert_round_invariants(request: &RoundRequest, outcome: &RoundOutcome) {
    if let Err(msg) = check_round_invariants(request, outcome) {
        panic!("round invariant violated: {}", msg);
    }
}
