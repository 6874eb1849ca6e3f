//! Sigma protocols for linear relations over group elements.
//!
//! Every [`Statement`] is a group homomorphism `φ` from witness scalars to
//! points together with a public image `φ(w)`. The prover commits to
//! `φ(k)` for fresh nonces `k`, one joint challenge `c` is hashed over every
//! statement and every commitment, and each response is `k + c·w`. The
//! verifier checks `φ(response) = commitment + c·image` statement by
//! statement.

mod prover;
mod system;
mod verifier;

#[cfg(test)]
mod test;

use ark_ec::CurveGroup;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rand::{CryptoRng, RngCore};

use crate::elgamal::Ciphertext;
use crate::error::{self, Error};
use crate::transcript::Transcript;

pub use prover::prover::{commit, nonce, nonces, respond};
pub use system::{challenge, SigmaSystemImpl};
pub use verifier::verifier::verify_statement;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement<G: CurveGroup> {
    /// Knowledge of `x` with `image = x·base`.
    DiscreteLog { base: G, image: G },
    /// Knowledge of `(v, r)` with `commitment = v·g + r·h`.
    Opening { g: G, h: G, commitment: G },
    /// Knowledge of `(v, r)` with
    /// `ciphertext = (v·value_base + r·public_key, r·base)`.
    Encryption {
        value_base: G,
        base: G,
        public_key: G,
        ciphertext: Ciphertext<G>,
    },
}

impl<G: CurveGroup> Statement<G> {
    pub fn witness_len(&self) -> usize {
        match self {
            Self::DiscreteLog { .. } => 1,
            Self::Opening { .. } | Self::Encryption { .. } => 2,
        }
    }

    fn tag(&self) -> u64 {
        match self {
            Self::DiscreteLog { .. } => 0,
            Self::Opening { .. } => 1,
            Self::Encryption { .. } => 2,
        }
    }

    /// `φ(scalars)`, the relation with `scalars` in place of the witness.
    pub fn evaluate(&self, scalars: &[G::ScalarField]) -> error::Result<Vec<G>> {
        if scalars.len() != self.witness_len() {
            return Err(Error::DimensionMismatch {
                expected: self.witness_len(),
                found: scalars.len(),
            });
        }
        Ok(match self {
            Self::DiscreteLog { base, .. } => vec![*base * scalars[0]],
            Self::Opening { g, h, .. } => vec![*g * scalars[0] + *h * scalars[1]],
            Self::Encryption {
                value_base,
                base,
                public_key,
                ..
            } => vec![
                *value_base * scalars[0] + *public_key * scalars[1],
                *base * scalars[1],
            ],
        })
    }

    /// The public value `φ(w)`.
    pub fn image(&self) -> Vec<G> {
        match self {
            Self::DiscreteLog { image, .. } => vec![*image],
            Self::Opening { commitment, .. } => vec![*commitment],
            Self::Encryption { ciphertext, .. } => vec![ciphertext.a, ciphertext.b],
        }
    }

    /// Appends the kind of relation, its bases and its image.
    pub fn append_to_transcript(&self, transcript: &mut Transcript) -> error::Result<()> {
        transcript.append_u64(b"statement", self.tag());
        match self {
            Self::DiscreteLog { base, image } => {
                transcript.append_point(b"base", base)?;
                transcript.append_point(b"image", image)?;
            }
            Self::Opening { g, h, commitment } => {
                transcript.append_point(b"g", g)?;
                transcript.append_point(b"h", h)?;
                transcript.append_point(b"commitment", commitment)?;
            }
            Self::Encryption {
                value_base,
                base,
                public_key,
                ciphertext,
            } => {
                transcript.append_point(b"value base", value_base)?;
                transcript.append_point(b"base", base)?;
                transcript.append_point(b"public key", public_key)?;
                transcript.append_point(b"A", &ciphertext.a)?;
                transcript.append_point(b"B", &ciphertext.b)?;
            }
        }
        Ok(())
    }
}

/// Per-statement commitments and responses under one joint challenge.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct SigmaProof<G: CurveGroup> {
    pub commitments: Vec<Vec<G>>,
    pub responses: Vec<Vec<G::ScalarField>>,
    pub challenge: G::ScalarField,
}

pub trait SigmaProtocol<G: CurveGroup> {
    /// Proves every statement with its witness under a single challenge.
    fn prove<R: RngCore + CryptoRng>(
        &self,
        statements: &[Statement<G>],
        witnesses: &[Vec<G::ScalarField>],
        rng: &mut R,
    ) -> error::Result<SigmaProof<G>>;

    /// Accepts only if the challenge is the hash of `statements` and the
    /// proof's commitments, and every statement checks.
    fn verify(&self, statements: &[Statement<G>], proof: &SigmaProof<G>) -> error::Result<()>;

    /// Checks each statement on its own against the proof's challenge.
    fn verify_statements(&self, statements: &[Statement<G>], proof: &SigmaProof<G>) -> Vec<bool>;
}
