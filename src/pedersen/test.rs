use std::collections::HashSet;

use ark_bn254::{Fr as Scalar, G1Projective as G1};
use ark_ff::{UniformRand, Zero};
use ark_std::rand::thread_rng;

use super::*;
use crate::algebra::marshal;

fn generators() -> (G1, G1) {
    let mut rng = thread_rng();
    (generate_point(&mut rng).unwrap(), generate_point(&mut rng).unwrap())
}

/// Share of set bits in the encodings, skipping the flag byte.
fn bit_balance(commitments: &[G1]) -> f64 {
    let mut ones = 0u32;
    let mut total = 0u32;
    for c in commitments {
        for byte in &marshal(c).unwrap()[1..] {
            ones += byte.count_ones();
            total += 8;
        }
    }
    f64::from(ones) / f64::from(total)
}

#[test]
fn test_commit_and_open() {
    let mut rng = thread_rng();
    let (g, h) = generators();
    let opening = Opening::random(Scalar::from(130u64), &mut rng).unwrap();
    let commitment = commit_opening(&g, &h, &opening);

    assert_eq!(commitment, g * opening.value + h * opening.blinding);
    assert!(verify_opening(&g, &h, &commitment, &opening));

    let wrong = Opening::new(Scalar::from(131u64), opening.blinding);
    assert!(!verify_opening(&g, &h, &commitment, &wrong));
}

#[test]
fn test_generated_points_are_distinct() {
    let mut rng = thread_rng();
    let points: Vec<G1> = generate_points(64, &mut rng).unwrap();
    let unique: HashSet<_> = points.iter().map(|p| p.into_affine()).collect();
    assert_eq!(unique.len(), 64);
    assert!(points.iter().all(|p| !p.is_zero()));
}

#[test]
fn test_commitments_are_binding_across_samples() {
    let mut rng = thread_rng();
    let (g, h) = generators();
    let mut seen = HashSet::new();
    for v in 0..256u64 {
        let commitment = commit_scalar(&g, &h, &Scalar::from(v), &Scalar::rand(&mut rng));
        assert!(seen.insert(commitment.into_affine()));
    }
}

#[test]
fn test_commitments_look_alike_for_fixed_and_random_values() {
    let mut rng = thread_rng();
    let (g, h) = generators();
    let fixed: Vec<G1> = (0..200)
        .map(|_| commit_scalar(&g, &h, &Scalar::from(7u64), &Scalar::rand(&mut rng)))
        .collect();
    let random: Vec<G1> = (0..200)
        .map(|_| commit_scalar(&g, &h, &Scalar::rand(&mut rng), &Scalar::rand(&mut rng)))
        .collect();

    let unique: HashSet<_> = fixed.iter().map(|c| c.into_affine()).collect();
    assert_eq!(unique.len(), fixed.len());
    for balance in [bit_balance(&fixed), bit_balance(&random)] {
        assert!((0.48..0.52).contains(&balance), "bit balance {}", balance);
    }
}

#[test]
fn test_vector_commitment() {
    let mut rng = thread_rng();
    let gs: Vec<G1> = generate_points(4, &mut rng).unwrap();
    let hs: Vec<G1> = generate_points(4, &mut rng).unwrap();
    let values: Vec<Scalar> = (0..4).map(|_| Scalar::rand(&mut rng)).collect();
    let blindings: Vec<Scalar> = (0..4).map(|_| Scalar::rand(&mut rng)).collect();

    let expected: G1 = (0..4).map(|i| gs[i] * values[i] + hs[i] * blindings[i]).sum();
    assert_eq!(commit_vector(&values, &blindings, &gs, &hs).unwrap(), expected);

    assert_eq!(
        commit_vector(&values[..3], &blindings, &gs, &hs),
        Err(Error::DimensionMismatch {
            expected: 4,
            found: 3
        })
    );
    assert_eq!(
        commit_vector(&values, &blindings, &gs, &hs[..2]),
        Err(Error::DimensionMismatch {
            expected: 2,
            found: 4
        })
    );
}
