//! Request fixtures.

use podforge_core::{Cube, Player, RoundRequest, Vote};

/// Creates `n` players `p0..` with a spread of match points.
///
/// Match points cycle through `0, 3, 6, 9` so that every field larger than
/// four players has ties and distinct standings.
pub fn field(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| Player::new(format!("p{}", i), ((i % 4) * 3) as i64))
        .collect()
}

/// Creates `n` unlimited cubes `c0..`.
pub fn cubes(n: usize) -> Vec<Cube> {
    (0..n).map(|i| Cube::new(format!("c{}", i))).collect()
}

pub fn limited_cube(id: &str, max_players: u32) -> Cube {
    Cube::with_max_players(id, max_players)
}

/// Two players in one pod of two; `p1` wants `A` and avoids `B`, `p2` has
/// no opinion.
pub fn preference_scenario() -> RoundRequest {
    let players = vec![
        Player::new("p1", 0)
            .with_vote("A", Vote::Desired)
            .with_vote("B", Vote::Avoid),
        Player::new("p2", 0),
    ];
    RoundRequest::new(players, vec![Cube::new("A"), Cube::new("B")]).with_pod_sizes(vec![2])
}

/// Three pods of two players and a single cube.
pub fn shortfall_scenario() -> RoundRequest {
    RoundRequest::new(field(6), cubes(1)).with_pod_sizes(vec![2, 2, 2])
}

/// Twenty players split `[6, 6, 8]`, so two tiers are present.
pub fn tiered_scenario() -> RoundRequest {
    let players = (0..20)
        .map(|i| Player::new(format!("p{}", i), (i / 2) as i64))
        .collect();
    RoundRequest::new(players, cubes(3))
}
