extern crate bitsqueeze;
extern crate rand;

use bitsqueeze::{encode_big_endian, fold_once, fold_once_mt, reduce_bytes, Compressor, Stage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_inputs(seed: u64, count: usize, max_len: usize) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..=max_len);
            (0..len).map(|_| rng.gen::<u8>()).collect()
        })
        .collect()
}

#[test]
fn converged_value_is_a_stable_fixed_point() {
    for input in random_inputs(7, 200, 300) {
        let result = reduce_bytes(&input);

        assert_eq!(fold_once(&encode_big_endian(result)), result);
        assert!(result <= 1, "got {} for {:?}", result, input);
    }
}

#[test]
fn every_pass_after_the_first_is_bounded() {
    let compressor = Compressor::new();

    for input in random_inputs(11, 100, 1_000) {
        for pass in compressor.passes(&input).skip(1) {
            assert!(pass.value <= 64);
            assert_eq!(pass.input_len, 8);
        }
    }
}

#[test]
fn reduction_is_deterministic() {
    for input in random_inputs(23, 50, 500) {
        assert_eq!(reduce_bytes(&input), reduce_bytes(&input.clone()));
    }
}

#[test]
fn worker_count_does_not_change_result() {
    for input in random_inputs(31, 40, 5_000) {
        let expected = fold_once(&input);

        for workers in [1, 2, 3, 4, 7, 16] {
            assert_eq!(fold_once_mt(&input, workers), expected);
            assert_eq!(
                Compressor::with_workers(workers).reduce(&input),
                reduce_bytes(&input)
            );
        }
    }
}

#[test]
fn last_pass_matches_reduce() {
    let compressor = Compressor::new();

    for input in random_inputs(47, 100, 200) {
        let last = compressor.passes(&input).last().unwrap();

        assert_eq!(last.stage, Stage::Converged);
        assert_eq!(last.value, compressor.reduce(&input));
    }
}

#[test]
fn only_the_last_pass_is_converged() {
    let compressor = Compressor::new();
    let passes: Vec<_> = compressor.passes(&[0xFF; 64]).collect();
    let (last, rest) = passes.split_last().unwrap();

    assert_eq!(passes[0].value, 512);
    assert_eq!(last.stage, Stage::Converged);
    assert!(rest.iter().all(|p| p.stage == Stage::Folding));
    assert_eq!(
        passes.iter().map(|p| p.idx).collect::<Vec<_>>(),
        (0..passes.len()).collect::<Vec<_>>()
    );
}

#[test]
fn high_bytes_count_eight_bits() {
    assert_eq!(fold_once(&[0x80; 10]), 10);
    assert_eq!(fold_once(&[0xFE, 0xFF]), 15);
}
