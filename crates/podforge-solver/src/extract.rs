//! Decoding of solved models.

use podforge_core::{PodAssignment, PodForgeError, Result, RoundInstance};
use podforge_model::{Assignment, VarIndex};

/// Decodes an assignment into pods and cubes.
///
/// Extraction is a pure function of the instance, the variable index and
/// the assignment. Any broken result invariant is reported as
/// `PodForgeError::Internal`.
#[derive(Debug, Clone, Copy)]
pub struct ResultExtractor<'a> {
    instance: &'a RoundInstance,
    index: &'a VarIndex,
}

impl<'a> ResultExtractor<'a> {
    pub fn new(instance: &'a RoundInstance, index: &'a VarIndex) -> Self {
        Self { instance, index }
    }

    /// Returns one pod per prescribed size, players in input order.
    pub fn extract(&self, assignment: &Assignment) -> Result<Vec<PodAssignment>> {
        let instance = self.instance;
        let index = self.index;
        let mut placements = vec![0usize; instance.player_count()];
        let mut cube_used = vec![false; index.columns.cube_count()];
        let mut pods = Vec::with_capacity(instance.pod_count());

        for (k, &size) in instance.pod_sizes.iter().enumerate() {
            let mut player_ids = Vec::with_capacity(size);
            for (p, player) in instance.players.iter().enumerate() {
                if assignment.is_set(index.x[p][k]) {
                    placements[p] += 1;
                    player_ids.push(player.id.clone());
                }
            }
            if player_ids.len() != size {
                return Err(internal(format!(
                    "pod {} has {} players, expected {}",
                    k,
                    player_ids.len(),
                    size
                )));
            }

            let columns: Vec<usize> = index
                .columns
                .all()
                .filter(|&c| assignment.is_set(index.y[k][c]))
                .collect();
            let &[column] = columns.as_slice() else {
                return Err(internal(format!(
                    "pod {} is on {} columns",
                    k,
                    columns.len()
                )));
            };

            let cube_id = match index.columns.cube(column) {
                Some(c) => {
                    if std::mem::replace(&mut cube_used[c], true) {
                        return Err(internal(format!(
                            "cube '{}' assigned to more than one pod",
                            instance.cubes[c].id
                        )));
                    }
                    if !instance.cubes[c].fits(size) {
                        return Err(internal(format!(
                            "cube '{}' exceeds its capacity in pod {}",
                            instance.cubes[c].id, k
                        )));
                    }
                    Some(instance.cubes[c].id.clone())
                }
                None => None,
            };

            pods.push(PodAssignment {
                index: k,
                size,
                cube_id,
                player_ids,
            });
        }

        if let Some(p) = placements.iter().position(|&n| n != 1) {
            return Err(internal(format!(
                "player '{}' placed {} times",
                instance.players[p].id, placements[p]
            )));
        }

        Ok(pods)
    }

    /// Pods with their sizes but no players and no cube.
    pub fn empty_pods(&self) -> Vec<PodAssignment> {
        empty_pods(&self.instance.pod_sizes)
    }
}

pub(crate) fn empty_pods(sizes: &[usize]) -> Vec<PodAssignment> {
    sizes
        .iter()
        .enumerate()
        .map(|(k, &size)| PodAssignment::empty(k, size))
        .collect()
}

fn internal(message: String) -> PodForgeError {
    PodForgeError::Internal(message)
}
