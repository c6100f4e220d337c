// Properties every driver must hold across a spread of inputs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortreplay::engine::{Engine, RunOutcome};
use sortreplay::input::flatten;
use sortreplay::sorting::{is_sorted, Algorithm};

const COMPARISON_SORTS: [Algorithm; 5] = [
    Algorithm::Bubble,
    Algorithm::Selection,
    Algorithm::Insertion,
    Algorithm::Merge,
    Algorithm::Quick,
];

fn inputs() -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut inputs = vec![
        vec![0],
        vec![1, 1],
        vec![2, 1],
        vec![1, 2, 3, 4, 5, 6, 7, 8],
        vec![8, 7, 6, 5, 4, 3, 2, 1],
        vec![5, 5, 5, 1, 5],
        vec![0, 9, 0, 9, 0, 9],
    ];
    for len in 1..=12 {
        inputs.push((0..len).map(|_| rng.gen_range(0..10)).collect());
    }
    inputs
}

fn run(algorithm: Algorithm, values: &[u8]) -> RunOutcome {
    let mut rng = StdRng::seed_from_u64(11);
    Engine::default()
        .run_algorithm(algorithm, &flatten(values), &mut rng)
        .unwrap_or_else(|e| panic!("{} failed on {:?}: {}", algorithm, values, e))
}

fn sorted_copy(values: &[u8]) -> Vec<u8> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}

#[test]
fn test_comparison_sorts_produce_sorted_permutation() {
    for values in inputs() {
        for algorithm in COMPARISON_SORTS {
            let outcome = run(algorithm, &values);
            let last = outcome.last().unwrap();

            assert!(is_sorted(last.values()), "{} on {:?}", algorithm, values);
            assert_eq!(last.values(), sorted_copy(&values).as_slice());
            assert_eq!(outcome.final_values, sorted_copy(&values));
        }
    }
}

#[test]
fn test_comparison_sorts_bracket_with_idle_frames() {
    for values in inputs() {
        for algorithm in COMPARISON_SORTS {
            let outcome = run(algorithm, &values);
            assert_eq!(outcome.first().unwrap().values(), values.as_slice());
            assert!(outcome.first().unwrap().is_idle());
            assert!(outcome.last().unwrap().is_idle());
        }
    }
}

#[test]
fn test_frames_stay_in_bounds() {
    for values in inputs() {
        for algorithm in Algorithm::ALL {
            if algorithm == Algorithm::Bogo && values.len() > 6 {
                continue;
            }
            let outcome = run(algorithm, &values);
            for frame in &outcome.snapshots {
                let len = frame.values().len();
                assert_eq!(len, values.len());
                assert!(frame.active().iter().all(|&i| i < len));
                assert!(frame.eliminated().iter().all(|&i| i < len));
                if algorithm != Algorithm::Stalin {
                    assert!(frame.eliminated().is_empty());
                }
            }
        }
    }
}

#[test]
fn test_stalin_kept_values_never_decrease() {
    for values in inputs() {
        let outcome = run(Algorithm::Stalin, &values);
        let last = outcome.last().unwrap();

        assert_eq!(last.values(), values.as_slice());
        let kept: Vec<u8> = (0..values.len())
            .filter(|i| !last.is_eliminated(*i))
            .map(|i| values[i])
            .collect();

        assert!(is_sorted(&kept), "kept {:?} from {:?}", kept, values);
        // The first element can never be dropped
        assert_eq!(kept[0], values[0]);
        // Every dropped value is smaller than something kept before it
        for &i in last.eliminated() {
            assert!(values[..i].iter().any(|&v| v > values[i]));
        }
    }
}

#[test]
fn test_stalin_eliminated_set_only_grows() {
    for values in inputs() {
        let outcome = run(Algorithm::Stalin, &values);
        for pair in outcome.snapshots.windows(2) {
            let (before, after) = (pair[0].eliminated(), pair[1].eliminated());
            assert!(after.starts_with(before));
        }
    }
}

#[test]
fn test_wave_is_periodic() {
    for values in inputs() {
        let outcome = run(Algorithm::Wave, &values);
        let n = values.len();

        assert_eq!(outcome.snapshots.len(), 2 + 5 * n);
        // After k rotations the frame equals the input rotated k times
        for (k, frame) in outcome.snapshots[1..=5 * n].iter().enumerate() {
            let mut expected = values.clone();
            expected.rotate_left((k + 1) % n);
            assert_eq!(frame.values(), expected.as_slice());
        }
    }
}

#[test]
fn test_bogo_small_inputs() {
    for values in inputs().into_iter().filter(|v| v.len() <= 5) {
        let outcome = run(Algorithm::Bogo, &values);
        assert_eq!(outcome.final_values, sorted_copy(&values));

        let every: Vec<usize> = (0..values.len()).collect();
        let shuffles = &outcome.snapshots[1..outcome.snapshots.len() - 1];
        for frame in shuffles {
            assert_eq!(frame.active(), every.as_slice());
        }
        if is_sorted(&values) {
            assert!(shuffles.is_empty());
        }
    }
}

#[test]
fn test_snapshots_unaffected_by_later_steps() {
    // Each frame must still hold the array as it was when recorded, even
    // though the driver kept mutating the same buffer afterwards
    let outcome = run(Algorithm::Bubble, &[3, 1, 2]);
    let values: Vec<Vec<u8>> = outcome.snapshots.iter().map(|s| s.values().to_vec()).collect();
    assert_eq!(
        values,
        vec![
            vec![3, 1, 2],
            vec![3, 1, 2],
            vec![1, 3, 2],
            vec![1, 3, 2],
            vec![1, 2, 3],
            vec![1, 2, 3],
            vec![1, 2, 3],
        ]
    );
}
