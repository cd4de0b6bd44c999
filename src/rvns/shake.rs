//! Randomized shaking: drawing a neighbor at a given distance.

use rand::Rng;

use crate::precedence::PrecedenceGraph;
use crate::schedule::Schedule;

/// Draws a random precedence-valid neighbor of `schedule` at the given
/// distance.
///
/// Applies exactly `distance` accepted random swaps in sequence. Each
/// attempt draws a position `x` and a position `y <= x` and would
/// exchange the jobs at `x` and `y`; the attempt is rejected and redrawn
/// (without consuming the distance budget) if any job at a position in
/// `y..=x` has a precedence relation with either endpoint that the swap
/// would invert. Drawing `x == y` is always valid, so the loop
/// terminates.
///
/// The result is a permutation of the input's jobs, and precedence-valid
/// whenever the input is.
pub fn shake_by_swap<R: Rng>(
    schedule: &Schedule,
    distance: usize,
    graph: &PrecedenceGraph,
    rng: &mut R,
) -> Schedule {
    let n = schedule.len();
    if n < 2 {
        return schedule.clone();
    }
    let mut jobs = schedule.jobs().to_vec();
    let mut applied = 0;
    while applied < distance {
        let x = rng.random_range(0..n);
        let y = rng.random_range(0..=x);
        let valid = (y..=x)
            .all(|j| !graph.precedes(jobs[y], jobs[j]) && !graph.precedes(jobs[j], jobs[x]));
        if !valid {
            continue;
        }
        jobs.swap(x, y);
        applied += 1;
    }
    Schedule::new(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_zero_distance_is_identity() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let schedule = Schedule::new(vec![3, 1, 2]);
        let shaken = shake_by_swap(&schedule, 0, &PrecedenceGraph::new(), &mut rng);
        assert_eq!(shaken, schedule);
    }

    #[test]
    fn test_short_schedules_returned_unchanged() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let one = Schedule::new(vec![1]);
        assert_eq!(shake_by_swap(&one, 5, &PrecedenceGraph::new(), &mut rng), one);
        let empty = Schedule::new(vec![]);
        assert_eq!(
            shake_by_swap(&empty, 5, &PrecedenceGraph::new(), &mut rng),
            empty
        );
    }

    #[test]
    fn test_fully_chained_schedule_cannot_move() {
        // Every cross-position swap inverts some required order, so only
        // the x == y draws are accepted and the schedule stays put.
        let graph = PrecedenceGraph::from_edges([(1, 2), (2, 3), (3, 4)]).unwrap();
        let schedule = Schedule::new(vec![1, 2, 3, 4]);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let shaken = shake_by_swap(&schedule, 8, &graph, &mut rng);
        assert_eq!(shaken, schedule);
    }

    proptest! {
        #[test]
        fn prop_shake_preserves_permutation(
            seed in any::<u64>(),
            n in 2usize..10,
            distance in 0usize..6,
        ) {
            let schedule = Schedule::new((1..=n).collect());
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let shaken = shake_by_swap(&schedule, distance, &PrecedenceGraph::new(), &mut rng);
            prop_assert_eq!(shaken.len(), n);
            prop_assert!(shaken.is_permutation());
        }

        #[test]
        fn prop_shake_preserves_validity(
            seed in any::<u64>(),
            n in 3usize..10,
            distance in 0usize..6,
        ) {
            // Chain over the first half of the jobs, rest unconstrained.
            let chained = n / 2;
            let graph = PrecedenceGraph::from_edges(
                (1..chained).map(|job| (job, job + 1)),
            ).unwrap();
            let schedule = Schedule::new((1..=n).collect());
            prop_assert!(schedule.respects(&graph));

            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let shaken = shake_by_swap(&schedule, distance, &graph, &mut rng);
            prop_assert!(shaken.is_permutation());
            prop_assert!(shaken.respects(&graph));
        }
    }
}
