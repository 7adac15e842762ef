//! The maximized round objective.

use podforge_core::{RoundInstance, ScoringWeights, StandingRanks, Vote};

use super::{ColumnSpace, VarIndex};
use crate::error::ModelError;
use crate::linear::{Constraint, LinearExpr, Model};

/// Coefficient tables of the objective.
///
/// Shared by the model builder and by native search, so both score a plan
/// with the same numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveCoefficients {
    /// `preference[p][c]`, zero for virtual columns.
    preference: Vec<Vec<f64>>,
    /// Early-round bonus per column, zero unless positive and real.
    cube_bonus: Vec<f64>,
    spread_weight: f64,
}

impl ObjectiveCoefficients {
    #[inline]
    pub fn preference(&self, player: usize, column: usize) -> f64 {
        self.preference[player][column]
    }

    #[inline]
    pub fn cube_bonus(&self, column: usize) -> f64 {
        self.cube_bonus[column]
    }

    pub fn spread_weight(&self) -> f64 {
        self.spread_weight
    }

    /// Objective contribution of one pod holding `members` on `column`.
    pub fn pod_score(&self, members: &[usize], column: usize, match_points: &[i64]) -> f64 {
        let preference: f64 = members
            .iter()
            .map(|&p| self.preference[p][column])
            .sum();
        let spread = members
            .iter()
            .map(|&p| match_points[p])
            .max()
            .zip(members.iter().map(|&p| match_points[p]).min())
            .map_or(0, |(max, min)| max - min);
        preference + self.cube_bonus[column] - self.spread_weight * spread as f64
    }
}

/// Builds the preference, early-round and spread terms.
pub struct ObjectiveComposer<'a> {
    instance: &'a RoundInstance,
    coefficients: ObjectiveCoefficients,
}

impl<'a> ObjectiveComposer<'a> {
    pub fn new(instance: &'a RoundInstance, columns: &ColumnSpace) -> Self {
        let weights = &instance.weights;
        let ranks = StandingRanks::new(&instance.match_points());

        let preference = instance
            .players
            .iter()
            .enumerate()
            .map(|(p, player)| {
                columns
                    .all()
                    .map(|c| match columns.cube(c) {
                        Some(cube) => vote_score(
                            weights,
                            player.vote_for(&instance.cubes[cube].id),
                            ranks.relative(p),
                            player.prior_avoid_count,
                        ),
                        None => 0.0,
                    })
                    .collect()
            })
            .collect();

        let cube_bonus = columns
            .all()
            .map(|c| match columns.cube(c) {
                Some(cube) if instance.round_number == 1 => {
                    early_round_bonus(instance, cube).max(0.0)
                }
                _ => 0.0,
            })
            .collect();

        Self {
            instance,
            coefficients: ObjectiveCoefficients {
                preference,
                cube_bonus,
                spread_weight: weights.match_point_penalty_weight,
            },
        }
    }

    pub fn coefficients(&self) -> &ObjectiveCoefficients {
        &self.coefficients
    }

    /// Declares `z`, spread variables and their rows, and sets the objective.
    pub fn compose(&self, model: &mut Model, index: &mut VarIndex) -> Result<(), ModelError> {
        let instance = self.instance;
        let coefs = &self.coefficients;
        let mut objective = LinearExpr::new();

        for p in 0..instance.player_count() {
            for (k, &size) in instance.pod_sizes.iter().enumerate() {
                for c in index.columns.real() {
                    let coef = coefs.preference(p, c);
                    if coef == 0.0 || !instance.cubes[c].fits(size) {
                        continue;
                    }
                    let (x, y) = (index.x[p][k], index.y[k][c]);
                    let z = model.add_binary(format!("z_{}_{}_{}", p, k, c))?;
                    model.add_constraint(Constraint::less_eq(
                        format!("z_{}_{}_{}_x", p, k, c),
                        LinearExpr::new().with_term(z, 1.0).with_term(x, -1.0),
                        0.0,
                    ));
                    model.add_constraint(Constraint::less_eq(
                        format!("z_{}_{}_{}_y", p, k, c),
                        LinearExpr::new().with_term(z, 1.0).with_term(y, -1.0),
                        0.0,
                    ));
                    model.add_constraint(Constraint::greater_eq(
                        format!("z_{}_{}_{}_xy", p, k, c),
                        LinearExpr::new()
                            .with_term(z, 1.0)
                            .with_term(x, -1.0)
                            .with_term(y, -1.0),
                        -1.0,
                    ));
                    objective.add_term(z, coef);
                    index.z.insert((p, k, c), z);
                }
            }
        }

        for c in index.columns.real() {
            let bonus = coefs.cube_bonus(c);
            if bonus != 0.0 {
                for row in &index.y {
                    objective.add_term(row[c], bonus);
                }
            }
        }

        if let Some((lo, hi)) = instance.match_point_range() {
            let mp = instance.match_points();
            for k in 0..instance.pod_count() {
                let max_mp = model.add_integer(format!("maxmp_{}", k), lo, hi)?;
                let min_mp = model.add_integer(format!("minmp_{}", k), lo, hi)?;
                for (p, &points) in mp.iter().enumerate() {
                    model.add_constraint(
                        Constraint::greater_eq(
                            format!("spread_max_{}_{}", k, p),
                            LinearExpr::new().with_term(max_mp, 1.0),
                            points as f64,
                        )
                        .only_if(index.x[p][k]),
                    );
                    model.add_constraint(
                        Constraint::less_eq(
                            format!("spread_min_{}_{}", k, p),
                            LinearExpr::new().with_term(min_mp, 1.0),
                            points as f64,
                        )
                        .only_if(index.x[p][k]),
                    );
                }
                objective.add_term(min_mp, coefs.spread_weight);
                objective.add_term(max_mp, -coefs.spread_weight);
                index.max_mp.push(max_mp);
                index.min_mp.push(min_mp);
            }
        }

        model.set_objective(objective);
        Ok(())
    }
}

/// Largest magnitude a single objective coefficient may take.
///
/// Repeat-avoid penalties grow geometrically; past this bound they all rank
/// the same, and the objective stays finite.
pub const SCORE_LIMIT: f64 = 1e7;

fn bounded(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(-SCORE_LIMIT, SCORE_LIMIT)
    }
}

/// Score of placing a player on a cube they voted `vote` for.
///
/// `relative_rank` is the player's dense standing rank scaled to `[0, 1]`;
/// weaker standings get more of the DESIRED bonus.
pub fn vote_score(
    weights: &ScoringWeights,
    vote: Vote,
    relative_rank: f64,
    prior_avoid_count: u32,
) -> f64 {
    let score = match vote {
        Vote::Desired => {
            weights.score_want * (1.0 + weights.lower_standing_bonus * (1.0 - relative_rank))
        }
        Vote::Avoid => {
            weights.score_avoid
                * weights
                    .repeat_avoid_multiplier
                    .powi(prior_avoid_count.min(i32::MAX as u32) as i32)
        }
        Vote::Neutral => weights.score_neutral,
    };
    bounded(score)
}

fn early_round_bonus(instance: &RoundInstance, cube: usize) -> f64 {
    let cube = &instance.cubes[cube];
    let bonus = instance.weights.early_round_bonus;
    let avoiders = instance
        .players
        .iter()
        .filter(|p| p.vote_for(&cube.id) == Vote::Avoid)
        .count() as i64;
    let limited = if cube.is_limited() { bonus.saturating_mul(10) } else { 0 };
    bounded(avoiders.saturating_mul(bonus).saturating_add(limited) as f64)
}
