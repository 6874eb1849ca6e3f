use ark_ec::CurveGroup;
use ark_ff::{Field, PrimeField};
use ark_poly::univariate::DensePolynomial;
use ark_poly::DenseUVPolynomial;

use super::InnerProductGenerators;
use crate::algebra::{inner_product, multi_scalar_mul, powers};
use crate::error::{Error, Result};

/// Little-endian bit vector of `value` truncated to `n` bits: `a_L`.
pub fn bit_vector<S: PrimeField>(value: u64, n: usize) -> Vec<S> {
    (0..n)
        .map(|i| if (value >> i) & 1 == 1 { S::one() } else { S::zero() })
        .collect()
}

/// `a_R = a_L - 1^n`
pub fn complement_vector<S: PrimeField>(a_l: &[S]) -> Vec<S> {
    a_l.iter().map(|bit| *bit - S::one()).collect()
}

pub fn add_scalar<S: PrimeField>(v: &[S], k: S) -> Vec<S> {
    v.iter().map(|vi| *vi + k).collect()
}

pub fn scale<S: PrimeField>(v: &[S], k: S) -> Vec<S> {
    v.iter().map(|vi| *vi * k).collect()
}

pub fn add_vectors<S: PrimeField>(a: &[S], b: &[S]) -> Result<Vec<S>> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| *ai + bi).collect())
}

/// `δ(y, z) = (z - z²)·<1^n, y^n> - z³·<1^n, 2^n>`
pub fn delta<S: PrimeField>(y: S, z: S, n: usize) -> S {
    let z2 = z.square();
    let z3 = z2 * z;
    let sum_y: S = powers(y, n).into_iter().sum();
    let sum_2: S = powers(S::from(2u64), n).into_iter().sum();
    (z - z2) * sum_y - z3 * sum_2
}

/// `H'_i = H_i · y^(-i)`, the generators under which `r(x)` is committed.
pub fn scaled_generators<G: CurveGroup>(hs: &[G], y: G::ScalarField) -> Result<Vec<G>> {
    let y_inv = y
        .inverse()
        .ok_or(Error::RangeProofInvalid("challenge y is zero"))?;
    Ok(hs
        .iter()
        .zip(powers(y_inv, hs.len()))
        .map(|(h, k)| *h * k)
        .collect())
}

/// A vector whose entries are degree-one polynomials: `c0 + c1·X`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VecPoly1<S: PrimeField> {
    pub c0: Vec<S>,
    pub c1: Vec<S>,
}

impl<S: PrimeField> VecPoly1<S> {
    pub fn new(c0: Vec<S>, c1: Vec<S>) -> Result<Self> {
        if c0.len() != c1.len() {
            return Err(Error::DimensionMismatch {
                expected: c0.len(),
                found: c1.len(),
            });
        }
        Ok(Self { c0, c1 })
    }

    pub fn len(&self) -> usize {
        self.c0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.c0.is_empty()
    }

    pub fn eval(&self, x: S) -> Vec<S> {
        self.c0
            .iter()
            .zip(self.c1.iter())
            .map(|(a, b)| *a + *b * x)
            .collect()
    }

    /// `t(X) = <self(X), other(X)>` as a degree-two polynomial.
    pub fn inner_product(&self, other: &Self) -> Result<DensePolynomial<S>> {
        let t0 = inner_product(&self.c0, &other.c0)?;
        let t1 = inner_product(&self.c0, &other.c1)? + inner_product(&self.c1, &other.c0)?;
        let t2 = inner_product(&self.c1, &other.c1)?;
        Ok(DensePolynomial::from_coefficients_vec(vec![t0, t1, t2]))
    }
}

/// Coefficient of `X^i`, zero past the degree. `DensePolynomial` trims
/// trailing zero coefficients, so direct indexing is not safe.
pub fn coefficient<S: PrimeField>(poly: &DensePolynomial<S>, i: usize) -> S {
    poly.coeffs().get(i).copied().unwrap_or_else(S::zero)
}

// Compute: u * <a, b> + <a, g> + <b, h>
pub fn intermediate_commitment<G: CurveGroup>(
    a: &[G::ScalarField],
    b: &[G::ScalarField],
    u: &G,
    g: &[G],
    h: &[G],
) -> Result<G> {
    let ab = inner_product(a, b)?;
    Ok(*u * ab + multi_scalar_mul(a, g)? + multi_scalar_mul(b, h)?)
}

fn inverse_challenge<S: PrimeField>(x: S) -> Result<S> {
    x.inverse()
        .ok_or(Error::RangeProofInvalid("folding challenge is zero"))
}

/// Halves the generators: `g' = g_L·x⁻¹ + g_R·x`, `h' = h_L·x + h_R·x⁻¹`.
pub fn fold_generators<G: CurveGroup>(
    generators: &InnerProductGenerators<G>,
    x: G::ScalarField,
) -> Result<InnerProductGenerators<G>> {
    let m = generators.g.len() / 2;
    let x_inv = inverse_challenge(x)?;

    let g = generators.g[..m]
        .iter()
        .zip(generators.g[m..].iter())
        .map(|(g_l, g_r)| *g_l * x_inv + *g_r * x)
        .collect();
    let h = generators.h[..m]
        .iter()
        .zip(generators.h[m..].iter())
        .map(|(h_l, h_r)| *h_l * x + *h_r * x_inv)
        .collect();

    Ok(InnerProductGenerators {
        g,
        h,
        u: generators.u,
    })
}

/// Halves the witness: `a' = a_L·x + a_R·x⁻¹`, `b' = b_L·x⁻¹ + b_R·x`.
pub fn fold_vectors<S: PrimeField>(a: &[S], b: &[S], x: S) -> Result<(Vec<S>, Vec<S>)> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    let m = a.len() / 2;
    let x_inv = inverse_challenge(x)?;

    let a_new = a[..m]
        .iter()
        .zip(a[m..].iter())
        .map(|(a_l, a_r)| *a_l * x + *a_r * x_inv)
        .collect();
    let b_new = b[..m]
        .iter()
        .zip(b[m..].iter())
        .map(|(b_l, b_r)| *b_l * x_inv + *b_r * x)
        .collect();
    Ok((a_new, b_new))
}
