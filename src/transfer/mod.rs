//! Confidential transfers.
//!
//! A sender moves `amount` to a counterparty and keeps `balance`. The amount
//! is encrypted to the counterparty and the remaining balance to the
//! auditor; both values are also Pedersen-committed on the range-proof curve.
//! A [`TransferProof`] shows that both committed values lie in `[0, 2^n)` and
//! that both ciphertexts are well formed, with the two encryption statements
//! bound by one sigma challenge.
//!
//! The range proofs and the sigma proof share the witnesses only through the
//! prover; nothing here proves in zero knowledge that the committed amount
//! equals the encrypted one.

mod public_inputs;


use std::fmt;

use ark_crypto_primitives::sponge::Absorb;
use ark_ec::CurveGroup;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::cfg_iter;
use log::debug;
use rand::{CryptoRng, RngCore};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::algebra::random_scalar;
use crate::bulletproofs::{RangeProof, RangeProofSystem, RangeProofSystemImpl};
use crate::context::{check_bit_width, CurveContext};
use crate::elgamal::{Ciphertext, ElGamal};
use crate::error::{self, Error};
use crate::pedersen::commit_scalar;
use crate::sigma::{SigmaProof, SigmaProtocol, SigmaSystemImpl, Statement};

pub use public_inputs::PublicInputs;

/// Secret inputs of one transfer. Range-curve scalars blind the Pedersen
/// commitments; encryption-curve scalars randomize the ciphertexts.
#[derive(Clone, PartialEq, Eq)]
pub struct TransferWitness<R: CurveGroup, E: CurveGroup> {
    pub amount: u64,
    pub balance: u64,
    pub amount_blinding: R::ScalarField,
    pub balance_blinding: R::ScalarField,
    pub amount_randomness: E::ScalarField,
    pub balance_randomness: E::ScalarField,
}

impl<R: CurveGroup, E: CurveGroup> TransferWitness<R, E> {
    pub fn random<T: RngCore + CryptoRng>(amount: u64, balance: u64, rng: &mut T) -> error::Result<Self> {
        Ok(Self {
            amount,
            balance,
            amount_blinding: random_scalar(rng)?,
            balance_blinding: random_scalar(rng)?,
            amount_randomness: random_scalar(rng)?,
            balance_randomness: random_scalar(rng)?,
        })
    }
}

impl<R: CurveGroup, E: CurveGroup> fmt::Debug for TransferWitness<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferWitness").finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct TransferStatement<RG: CurveGroup, E: CurveGroup> {
    pub counterparty: E,
    pub auditor: E,
    /// `Enc(counterparty, amount·base, r)`
    pub amount_ciphertext: Ciphertext<E>,
    /// `Enc(auditor, balance·base, rb)`
    pub balance_ciphertext: Ciphertext<E>,
    pub amount_commitment: RG,
    pub balance_commitment: RG,
}

#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct TransferProof<RG: CurveGroup, E: CurveGroup> {
    pub amount_range: RangeProof<RG>,
    pub balance_range: RangeProof<RG>,
    pub sigma: SigmaProof<E>,
}

/// Proves and verifies transfers with range proofs on `R` and encryptions
/// on `E`.
pub struct TransferSystem<'a, R: CurveGroup, E: CurveGroup> {
    pub range: &'a CurveContext<R>,
    pub encryption: &'a CurveContext<E>,
    pub bits: usize,
}

impl<'a, R, E> TransferSystem<'a, R, E>
where
    R: CurveGroup,
    R::ScalarField: Absorb,
    E: CurveGroup,
    E::ScalarField: Absorb,
{
    pub fn new(range: &'a CurveContext<R>, encryption: &'a CurveContext<E>, bits: usize) -> error::Result<Self> {
        check_bit_width(bits, range.capacity())?;
        Ok(Self {
            range,
            encryption,
            bits,
        })
    }

    pub fn elgamal(&self) -> ElGamal<E> {
        ElGamal::new(self.encryption.encryption_base)
    }

    /// Encrypts and commits the witness values.
    pub fn build_statement(
        &self,
        counterparty: &E,
        auditor: &E,
        witness: &TransferWitness<R, E>,
    ) -> TransferStatement<R, E> {
        let elgamal = self.elgamal();
        let commit = |value: u64, blinding: &R::ScalarField| {
            commit_scalar(&self.range.g, &self.range.h, &R::ScalarField::from(value), blinding)
        };
        TransferStatement {
            counterparty: *counterparty,
            auditor: *auditor,
            amount_ciphertext: elgamal.encrypt_value(
                counterparty,
                &E::ScalarField::from(witness.amount),
                &witness.amount_randomness,
            ),
            balance_ciphertext: elgamal.encrypt_value(
                auditor,
                &E::ScalarField::from(witness.balance),
                &witness.balance_randomness,
            ),
            amount_commitment: commit(witness.amount, &witness.amount_blinding),
            balance_commitment: commit(witness.balance, &witness.balance_blinding),
        }
    }

    /// The transfer-encryption and remainder-encryption statements.
    pub fn sigma_statements(&self, statement: &TransferStatement<R, E>) -> [Statement<E>; 2] {
        let base = self.encryption.encryption_base;
        [
            Statement::Encryption {
                value_base: base,
                base,
                public_key: statement.counterparty,
                ciphertext: statement.amount_ciphertext,
            },
            Statement::Encryption {
                value_base: base,
                base,
                public_key: statement.auditor,
                ciphertext: statement.balance_ciphertext,
            },
        ]
    }

    pub fn prove<T: RngCore + CryptoRng>(
        &self,
        statement: &TransferStatement<R, E>,
        witness: &TransferWitness<R, E>,
        rng: &mut T,
    ) -> error::Result<TransferProof<R, E>> {
        let range = RangeProofSystemImpl::new(self.range, self.bits)?;
        let amount_range = range.prove(witness.amount, &witness.amount_blinding, rng)?;
        let balance_range = range.prove(witness.balance, &witness.balance_blinding, rng)?;
        if amount_range.commitment != statement.amount_commitment
            || balance_range.commitment != statement.balance_commitment
        {
            return Err(Error::InvalidParameters(
                "witness does not open the statement's commitments",
            ));
        }

        let sigma = SigmaSystemImpl::new(self.encryption.transcript_hash());
        let witnesses = [
            vec![E::ScalarField::from(witness.amount), witness.amount_randomness],
            vec![E::ScalarField::from(witness.balance), witness.balance_randomness],
        ];
        let sigma = sigma.prove(&self.sigma_statements(statement), &witnesses, rng)?;

        debug!("proved transfer with {}-bit ranges", self.bits);
        Ok(TransferProof {
            amount_range,
            balance_range,
            sigma,
        })
    }

    pub fn verify(&self, statement: &TransferStatement<R, E>, proof: &TransferProof<R, E>) -> error::Result<()> {
        if proof.amount_range.commitment != statement.amount_commitment
            || proof.balance_range.commitment != statement.balance_commitment
        {
            debug!("transfer range proofs are for other commitments");
            return Err(Error::RangeProofInvalid(
                "range proof commitment does not match the statement",
            ));
        }
        let range = RangeProofSystemImpl::new(self.range, self.bits)?;
        range.verify(&proof.amount_range)?;
        range.verify(&proof.balance_range)?;

        SigmaSystemImpl::new(self.encryption.transcript_hash())
            .verify(&self.sigma_statements(statement), &proof.sigma)
    }

    /// Verifies independent transfers, in parallel with the `parallel`
    /// feature. Fails with the error of a rejected transfer.
    pub fn verify_batch(&self, transfers: &[(TransferStatement<R, E>, TransferProof<R, E>)]) -> error::Result<()> {
        cfg_iter!(transfers)
            .enumerate()
            .map(|(i, (statement, proof))| {
                self.verify(statement, proof).map_err(|e| {
                    debug!("transfer {} of batch rejected: {}", i, e);
                    e
                })
            })
            .collect::<error::Result<Vec<()>>>()?;
        Ok(())
    }
}
