//! Property-based tests for the codec, the genetic operators, and the
//! board simulator.
//!
//! Run with: cargo test --release prop_search

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use tourney::board::{Board, Square, decode_move, encode_move};
use tourney::ga::{Genome, crossover, mutate};

fn arb_square() -> impl Strategy<Value = Square> {
    (0u8..8, 0u8..8).prop_map(|(file, rank)| Square::new(file, rank).unwrap())
}

fn arb_genome(max_slots: usize) -> impl Strategy<Value = Genome> {
    prop::collection::vec(any::<bool>(), 0..=max_slots * 3)
        .prop_map(|mut bits| {
            bits.truncate(bits.len() - bits.len() % 3);
            Genome::from_bits(bits)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        max_global_rejects: 65536,
        ..ProptestConfig::with_cases(2000)
    })]

    /// encode then decode is the identity on 0..=7.
    #[test]
    fn prop_codec_round_trip(index in 0u8..8) {
        prop_assert_eq!(decode_move(encode_move(index).unwrap()), index);
    }

    /// Every move index above 7 is rejected by the codec.
    #[test]
    fn prop_codec_rejects_high_indices(index in 8u8..) {
        prop_assert!(encode_move(index).is_err());
    }

    /// Evaluation scores never exceed the slot count or the board size.
    #[test]
    fn prop_score_bounded(start in arb_square(), genome in arb_genome(80)) {
        let mut board = Board::new(start);
        let evaluation = board.evaluate(&genome).unwrap();
        let slots = genome.checked_slots().unwrap();
        prop_assert!(usize::try_from(evaluation.score).unwrap() <= slots);
        prop_assert!(evaluation.score <= 64);
    }

    /// Genomes with a ragged bit length fail fast.
    #[test]
    fn prop_ragged_genomes_rejected(start in arb_square(), len in 1usize..600) {
        prop_assume!(len % 3 != 0);
        let genome = Genome::from_bits(vec![false; len]);
        let mut board = Board::new(start);
        prop_assert!(board.evaluate(&genome).is_err());
        prop_assert!(board.render(&genome).is_err());
    }

    /// The knight never leaves the board, wherever it starts and whatever
    /// the genome says.
    #[test]
    fn prop_knight_stays_on_board(start in arb_square(), genome in arb_genome(64)) {
        let mut board = Board::new(start);
        let evaluation = board.evaluate(&genome).unwrap();
        let (rank, file) = board.position();
        prop_assert!(rank < 8 && file < 8);
        // Replay the repaired genome move by move and watch the position.
        board.reset();
        for slot in 0..evaluation.genome.checked_slots().unwrap() {
            if !board.try_move(evaluation.genome.slot(slot)) {
                break;
            }
            let (rank, file) = board.position();
            prop_assert!(rank < 8 && file < 8);
        }
    }

    /// Crossover children always have their parents' length and take the
    /// prefix from the first parent.
    #[test]
    fn prop_crossover_length_and_prefix(slots in 1usize..64, seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let p1 = Genome::random(&mut rng, slots);
        let p2 = Genome::random(&mut rng, slots);
        let child = crossover(&p1, &p2, &mut rng);
        prop_assert_eq!(child.len(), p1.len());
        // Bit 0 always comes from the first parent (cut point inclusive).
        prop_assert_eq!(child.as_bits()[0], p1.as_bits()[0]);
    }

    /// Mutation at rate 0 is the identity, at rate 1 flips everything, and
    /// out-of-range rates are treated as 0.
    #[test]
    fn prop_mutation_extremes(slots in 1usize..64, seed in any::<u64>(), bogus in any::<f64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let original = Genome::random(&mut rng, slots);

        let mut same = original.clone();
        mutate(&mut same, 0.0, &mut rng);
        prop_assert_eq!(&same, &original);

        let mut flipped = original.clone();
        mutate(&mut flipped, 1.0, &mut rng);
        for (a, b) in flipped.as_bits().iter().zip(original.as_bits()) {
            prop_assert_ne!(a, b);
        }

        prop_assume!(!(0.0..=1.0).contains(&bogus));
        let mut clamped = original.clone();
        mutate(&mut clamped, bogus, &mut rng);
        prop_assert_eq!(&clamped, &original);
    }
}
