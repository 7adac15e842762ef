//! Pod size partitioning.
//!
//! Splits the active player count into pods close to the standard size of
//! eight. Deviations are front-loaded onto the first two pods using a fixed
//! remainder table, which avoids single-player "bye" pods.

/// The standard (preferred) pod size.
pub const STANDARD_POD_SIZE: usize = 8;

/// Size adjustments `(first pod, second pod)` indexed by `player_count % 8`.
const REMAINDER_ADJUSTMENTS: [(i64, i64); 8] = [
    (0, 0),
    (1, 0),
    (2, 0),
    (1, 2),
    (-2, -2),
    (-1, -2),
    (-2, 0),
    (-1, 0),
];

/// Computes the ordered pod sizes for `player_count` active players.
///
/// The returned sizes are all positive and always sum to `player_count`.
///
/// # Examples
///
/// ```
/// use podforge_core::pod_sizes_for;
///
/// assert_eq!(pod_sizes_for(24), vec![8, 8, 8]);
/// assert_eq!(pod_sizes_for(17), vec![9, 8]);
/// assert_eq!(pod_sizes_for(4), vec![4]);
/// ```
pub fn pod_sizes_for(player_count: usize) -> Vec<usize> {
    if player_count == 0 {
        return Vec::new();
    }

    let pod_count = round_half_even(player_count, STANDARD_POD_SIZE);
    if pod_count == 0 {
        return vec![player_count];
    }

    let mut sizes = vec![STANDARD_POD_SIZE as i64; pod_count];
    let (first, second) = REMAINDER_ADJUSTMENTS[player_count % STANDARD_POD_SIZE];
    sizes[0] += first;
    if pod_count > 1 {
        sizes[1] += second;
    }

    reconcile(&mut sizes, player_count as i64);

    sizes.into_iter().map(|s| s as usize).collect()
}

// Rounds `numerator / denominator` to the nearest integer, ties to even.
fn round_half_even(numerator: usize, denominator: usize) -> usize {
    let quotient = numerator / denominator;
    let twice_remainder = 2 * (numerator % denominator);
    match twice_remainder.cmp(&denominator) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal if quotient % 2 == 0 => quotient,
        std::cmp::Ordering::Equal => quotient + 1,
    }
}

// The remainder table assumes the pod count was rounded up on remainder 4 and
// that a second pod exists for remainders 3 and 5. When either assumption
// fails, whole missing pods are appended at standard size and any other
// residual is folded into the first pod.
fn reconcile(sizes: &mut Vec<i64>, target: i64) {
    let standard = STANDARD_POD_SIZE as i64;
    let mut residual = target - sizes.iter().sum::<i64>();

    while residual >= standard && residual % standard == 0 {
        sizes.push(standard);
        residual -= standard;
    }

    if residual != 0 {
        sizes[0] += residual;
    }
}
