//! Pedersen commitments.
//!
//! `commit(v, r) = v·g + r·h` hides `v` perfectly and binds it under the
//! discrete-log assumption. Vector commitments `Σ v_i·G_i + Σ r_i·H_i` carry
//! the bit vectors of range proofs.

#[cfg(test)]
mod test;

use ark_ec::CurveGroup;
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rand::{CryptoRng, RngCore};

use crate::algebra::{multi_scalar_mul, random_scalar, scalar_mul_base};
use crate::error::{self, Error};

/// Secret values behind a commitment.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Opening<S: PrimeField> {
    pub value: S,
    pub blinding: S,
}

impl<S: PrimeField> Opening<S> {
    pub fn new(value: S, blinding: S) -> Self {
        Self { value, blinding }
    }

    pub fn random<R: RngCore + CryptoRng>(value: S, rng: &mut R) -> error::Result<Self> {
        Ok(Self {
            value,
            blinding: random_scalar(rng)?,
        })
    }
}

/// A generator with unknown discrete log relative to the other generators:
/// the base point times a fresh uniform scalar that is dropped immediately.
pub fn generate_point<G: CurveGroup, R: RngCore + CryptoRng>(rng: &mut R) -> error::Result<G> {
    let k: G::ScalarField = random_scalar(rng)?;
    Ok(scalar_mul_base(&k))
}

pub fn generate_points<G: CurveGroup, R: RngCore + CryptoRng>(
    n: usize,
    rng: &mut R,
) -> error::Result<Vec<G>> {
    (0..n).map(|_| generate_point(rng)).collect()
}

pub fn commit_scalar<G: CurveGroup>(
    g: &G,
    h: &G,
    value: &G::ScalarField,
    blinding: &G::ScalarField,
) -> G {
    *g * value + *h * blinding
}

pub fn commit_opening<G: CurveGroup>(g: &G, h: &G, opening: &Opening<G::ScalarField>) -> G {
    commit_scalar(g, h, &opening.value, &opening.blinding)
}

/// `Σ values_i·gs_i + Σ blindings_i·hs_i`.
pub fn commit_vector<G: CurveGroup>(
    values: &[G::ScalarField],
    blindings: &[G::ScalarField],
    gs: &[G],
    hs: &[G],
) -> error::Result<G> {
    if values.len() != gs.len() {
        return Err(Error::DimensionMismatch {
            expected: gs.len(),
            found: values.len(),
        });
    }
    if blindings.len() != hs.len() {
        return Err(Error::DimensionMismatch {
            expected: hs.len(),
            found: blindings.len(),
        });
    }
    Ok(multi_scalar_mul(values, gs)? + multi_scalar_mul(blindings, hs)?)
}

/// `true` iff `commitment` opens to `opening` under `(g, h)`.
pub fn verify_opening<G: CurveGroup>(
    g: &G,
    h: &G,
    commitment: &G,
    opening: &Opening<G::ScalarField>,
) -> bool {
    commit_opening(g, h, opening) == *commitment
}
