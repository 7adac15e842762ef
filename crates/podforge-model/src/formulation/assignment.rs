//! Decision variables and hard constraints of a round.

use std::collections::HashMap;

use podforge_core::{PodTier, RoundInstance};

use super::ColumnSpace;
use crate::error::ModelError;
use crate::linear::{Assignment, Constraint, LinearExpr, Model, VarId};

/// Maps domain indices to model variables.
///
/// Players and pods are indexed as in the `RoundInstance`; columns as in
/// the `ColumnSpace`.
#[derive(Debug, Clone)]
pub struct VarIndex {
    pub columns: ColumnSpace,
    pub pod_sizes: Vec<usize>,
    /// `x[p][k]`: player `p` sits in pod `k`.
    pub x: Vec<Vec<VarId>>,
    /// `y[k][c]`: pod `k` plays column `c`.
    pub y: Vec<Vec<VarId>>,
    /// `z[(p, k, c)]`: both of the above. Only present for scored triples.
    pub z: HashMap<(usize, usize, usize), VarId>,
    /// Highest match points in pod `k`.
    pub max_mp: Vec<VarId>,
    /// Lowest match points in pod `k`.
    pub min_mp: Vec<VarId>,
}

impl VarIndex {
    pub fn player_count(&self) -> usize {
        self.x.len()
    }

    pub fn pod_count(&self) -> usize {
        self.pod_sizes.len()
    }

    /// Encodes a plan as a full assignment of `model`.
    ///
    /// `pod_of[p]` is the pod of player `p` and `column_of[k]` the column of
    /// pod `k`. Spread variables take the actual pod extremes.
    pub fn encode(
        &self,
        model: &Model,
        pod_of: &[usize],
        column_of: &[usize],
        match_points: &[i64],
    ) -> Assignment {
        let mut assignment = Assignment::zeros(model.variable_count());
        for (p, &k) in pod_of.iter().enumerate() {
            assignment.set(self.x[p][k], 1);
        }
        for (k, &c) in column_of.iter().enumerate() {
            assignment.set(self.y[k][c], 1);
        }
        for (&(p, k, c), &z) in &self.z {
            if pod_of[p] == k && column_of[k] == c {
                assignment.set(z, 1);
            }
        }
        for k in 0..self.max_mp.len() {
            let points = pod_of
                .iter()
                .enumerate()
                .filter(|&(_, &pod)| pod == k)
                .map(|(p, _)| match_points[p]);
            let (min, max) = points.fold((i64::MAX, i64::MIN), |(lo, hi), mp| {
                (lo.min(mp), hi.max(mp))
            });
            if min <= max {
                assignment.set(self.max_mp[k], max);
                assignment.set(self.min_mp[k], min);
            } else {
                let v = model.variable(self.min_mp[k]);
                assignment.set(self.max_mp[k], v.lower);
                assignment.set(self.min_mp[k], v.lower);
            }
        }
        assignment
    }
}

/// Placement and cube-column variables with the hard constraints.
#[derive(Debug, Clone)]
pub struct AssignmentModel {
    pub model: Model,
    pub index: VarIndex,
}

impl AssignmentModel {
    /// Declares `x` and `y` and adds:
    /// - one pod per player
    /// - exact pod cardinalities
    /// - one column per pod, real cubes used at most once
    /// - cube capacities
    /// - tier fairness between pods of different tiers
    pub fn build(instance: &RoundInstance) -> Result<Self, ModelError> {
        let players = instance.player_count();
        let pods = instance.pod_count();
        let columns = ColumnSpace::new(instance.cube_count(), pods);
        let mut model = Model::new();

        let mut x = Vec::with_capacity(players);
        for p in 0..players {
            let row = (0..pods)
                .map(|k| model.add_binary(format!("x_{}_{}", p, k)))
                .collect::<Result<Vec<_>, _>>()?;
            x.push(row);
        }

        let mut y = Vec::with_capacity(pods);
        for k in 0..pods {
            let row = columns
                .all()
                .map(|c| model.add_binary(format!("y_{}_{}", k, c)))
                .collect::<Result<Vec<_>, _>>()?;
            y.push(row);
        }

        for (p, row) in x.iter().enumerate() {
            model.add_constraint(Constraint::equal(
                format!("one_pod_{}", p),
                LinearExpr::sum(row.iter().copied()),
                1.0,
            ));
        }

        for (k, &size) in instance.pod_sizes.iter().enumerate() {
            model.add_constraint(Constraint::equal(
                format!("pod_size_{}", k),
                LinearExpr::sum(x.iter().map(|row| row[k])),
                size as f64,
            ));
            model.add_constraint(Constraint::equal(
                format!("one_column_{}", k),
                LinearExpr::sum(y[k].iter().copied()),
                1.0,
            ));
        }

        for c in columns.real() {
            model.add_constraint(Constraint::less_eq(
                format!("cube_once_{}", c),
                LinearExpr::sum(y.iter().map(|row| row[c])),
                1.0,
            ));

            let cube = &instance.cubes[c];
            for (k, &size) in instance.pod_sizes.iter().enumerate() {
                if !cube.fits(size) {
                    model.add_constraint(Constraint::equal(
                        format!("capacity_{}_{}", k, c),
                        LinearExpr::sum([y[k][c]]),
                        0.0,
                    ));
                }
            }
        }

        add_tier_fairness(&mut model, instance, &x);

        Ok(Self {
            model,
            index: VarIndex {
                columns,
                pod_sizes: instance.pod_sizes.clone(),
                x,
                y,
                z: HashMap::new(),
                max_mp: Vec::new(),
                min_mp: Vec::new(),
            },
        })
    }
}

/// For `mp[a] > mp[b]`, forbids `a` in a lower-tier pod while `b` is in a
/// higher-tier one.
fn add_tier_fairness(model: &mut Model, instance: &RoundInstance, x: &[Vec<VarId>]) {
    let tiers: Vec<PodTier> = instance
        .pod_sizes
        .iter()
        .map(|&s| PodTier::of_size(s))
        .collect();
    let mut pod_pairs = Vec::new();
    for (low, low_tier) in tiers.iter().enumerate() {
        for (high, high_tier) in tiers.iter().enumerate() {
            if low_tier < high_tier {
                pod_pairs.push((low, high));
            }
        }
    }
    if pod_pairs.is_empty() {
        return;
    }

    let mp = instance.match_points();
    for a in 0..mp.len() {
        for b in 0..mp.len() {
            if mp[a] <= mp[b] {
                continue;
            }
            for &(low, high) in &pod_pairs {
                model.add_constraint(Constraint::less_eq(
                    format!("tier_{}_{}_{}_{}", a, b, low, high),
                    LinearExpr::sum([x[a][low], x[b][high]]),
                    1.0,
                ));
            }
        }
    }
}
