//! Range proofs by bit decomposition.
//!
//! A prover shows that a Pedersen commitment `V = v·g + γ·h` opens to some
//! `v < 2^n` without revealing `v`. The bits of `v` are committed as vectors,
//! a quadratic polynomial `t(X) = <l(X), r(X)>` ties them together, and the
//! verifier checks both the polynomial commitment and the vector commitment
//! at a random point `x`.
//!
//! [`RangeProof`] sends `l(x)` and `r(x)` in the clear. [`CompactRangeProof`]
//! replaces them with a logarithmic inner-product argument.

pub mod helpers;
mod prover;
mod system;
mod verifier;
mod verifier_challenger;


use ark_ec::CurveGroup;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rand::{CryptoRng, RngCore};

use crate::error;

pub use prover::prover::{BitWitness, PolyWitness, RangeResponse};
pub use system::{CompactRangeProofSystemImpl, RangeProofSystemImpl};
pub use verifier_challenger::RangeChallenges;

/// `A = α·h + <a_L, G> + <a_R, H>` and `S = ρ·h + <s_L, G> + <s_R, H>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct BitCommitments<G: CurveGroup> {
    pub a: G,
    pub s: G,
}

/// Commitments to the `X` and `X²` coefficients of `t(X)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct PolyCommitments<G: CurveGroup> {
    pub t1: G,
    pub t2: G,
}

#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct RangeProof<G: CurveGroup> {
    /// `V`, the commitment whose value is in range.
    pub commitment: G,
    pub bits: BitCommitments<G>,
    pub poly: PolyCommitments<G>,
    pub taux: G::ScalarField,
    pub mu: G::ScalarField,
    pub l: Vec<G::ScalarField>,
    pub r: Vec<G::ScalarField>,
    pub tx: G::ScalarField,
}

#[derive(Clone, Debug)]
pub struct InnerProductGenerators<G: CurveGroup> {
    pub g: Vec<G>,
    pub h: Vec<G>,
    pub u: G,
}

/// One `(L, R)` pair per halving round, then the final scalars.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct InnerProductProof<G: CurveGroup> {
    pub l_vec: Vec<G>,
    pub r_vec: Vec<G>,
    pub a: G::ScalarField,
    pub b: G::ScalarField,
}

#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct CompactRangeProof<G: CurveGroup> {
    pub commitment: G,
    pub bits: BitCommitments<G>,
    pub poly: PolyCommitments<G>,
    pub taux: G::ScalarField,
    pub mu: G::ScalarField,
    pub tx: G::ScalarField,
    pub ipa: InnerProductProof<G>,
}

pub trait RangeProofSystem<G: CurveGroup> {
    type Proof;

    /// Proves that `value·g + blinding·h` opens to a value below `2^n`.
    ///
    /// A `value` wider than `n` bits is truncated to its low `n` bits in the
    /// decomposition, which yields a proof that fails verification.
    fn prove<R: RngCore + CryptoRng>(
        &self,
        value: u64,
        blinding: &G::ScalarField,
        rng: &mut R,
    ) -> error::Result<Self::Proof>;

    fn verify(&self, proof: &Self::Proof) -> error::Result<()>;
}
