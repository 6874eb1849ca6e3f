use ark_ec::CurveGroup;
use ark_ff::PrimeField;

use super::Statement;

pub mod prover {
    use rand::{CryptoRng, RngCore};

    use crate::algebra::{random_scalar, random_scalars};
    use crate::error::{Error, Result};

    use super::*;

    pub fn nonce<S: PrimeField, R: RngCore + CryptoRng>(rng: &mut R) -> Result<S> {
        random_scalar(rng)
    }

    /// One fresh nonce per witness scalar of `statement`.
    pub fn nonces<G: CurveGroup, R: RngCore + CryptoRng>(
        statement: &Statement<G>,
        rng: &mut R,
    ) -> Result<Vec<G::ScalarField>> {
        random_scalars(statement.witness_len(), rng)
    }

    /// `φ(nonces)`: for an encryption statement this is
    /// `encrypt(pk, k_v·value_base, k_r)`.
    pub fn commit<G: CurveGroup>(
        statement: &Statement<G>,
        nonces: &[G::ScalarField],
    ) -> Result<Vec<G>> {
        statement.evaluate(nonces)
    }

    /// `nonce + challenge·witness`
    pub fn respond<S: PrimeField>(nonce: &S, challenge: &S, witness: &S) -> S {
        *nonce + *challenge * witness
    }

    pub fn respond_all<S: PrimeField>(nonces: &[S], challenge: &S, witness: &[S]) -> Result<Vec<S>> {
        if nonces.len() != witness.len() {
            return Err(Error::DimensionMismatch {
                expected: nonces.len(),
                found: witness.len(),
            });
        }
        Ok(nonces
            .iter()
            .zip(witness.iter())
            .map(|(k, w)| respond(k, challenge, w))
            .collect())
    }
}
