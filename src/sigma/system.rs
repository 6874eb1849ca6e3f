use ark_crypto_primitives::sponge::Absorb;
use ark_ec::CurveGroup;
use ark_ff::PrimeField;
use log::debug;
use rand::{CryptoRng, RngCore};

use super::prover::prover;
use super::verifier::verifier;
use super::{SigmaProof, SigmaProtocol, Statement};
use crate::error::{Error, Result};
use crate::transcript::{HashChallenger, Transcript, TranscriptHash, VerifierChallenger};

const DOMAIN: &[u8] = b"sigma";

/// The joint challenge: one hash over every statement, then every
/// statement's commitment, in statement order.
pub fn challenge<G, C>(
    challenger: &C,
    statements: &[Statement<G>],
    commitments: &[Vec<G>],
) -> Result<G::ScalarField>
where
    G: CurveGroup,
    C: VerifierChallenger<G::ScalarField>,
{
    if statements.len() != commitments.len() {
        return Err(Error::DimensionMismatch {
            expected: statements.len(),
            found: commitments.len(),
        });
    }
    let mut transcript = Transcript::new(DOMAIN);
    transcript.append_u64(b"statements", statements.len() as u64);
    for statement in statements {
        statement.append_to_transcript(&mut transcript)?;
    }
    for commitment in commitments {
        transcript.append_points(b"commitment", commitment)?;
    }
    Ok(challenger.generate_challenge(&transcript, b"c"))
}

pub struct SigmaSystemImpl<C> {
    pub challenger: C,
}

impl<'a, S: PrimeField + Absorb> SigmaSystemImpl<HashChallenger<'a, S>> {
    pub fn new(hash: &'a TranscriptHash<S>) -> Self {
        Self {
            challenger: HashChallenger::new(hash),
        }
    }
}

impl<C> SigmaSystemImpl<C> {
    pub fn with_challenger(challenger: C) -> Self {
        Self { challenger }
    }
}

impl<G, C> SigmaProtocol<G> for SigmaSystemImpl<C>
where
    G: CurveGroup,
    C: VerifierChallenger<G::ScalarField>,
{
    fn prove<R: RngCore + CryptoRng>(
        &self,
        statements: &[Statement<G>],
        witnesses: &[Vec<G::ScalarField>],
        rng: &mut R,
    ) -> Result<SigmaProof<G>> {
        if statements.len() != witnesses.len() {
            return Err(Error::DimensionMismatch {
                expected: statements.len(),
                found: witnesses.len(),
            });
        }

        let mut all_nonces = Vec::with_capacity(statements.len());
        let mut commitments = Vec::with_capacity(statements.len());
        for (statement, witness) in statements.iter().zip(witnesses.iter()) {
            if statement.evaluate(witness)? != statement.image() {
                return Err(Error::InvalidParameters(
                    "witness does not satisfy its statement",
                ));
            }
            let nonces = prover::nonces(statement, rng)?;
            commitments.push(prover::commit(statement, &nonces)?);
            all_nonces.push(nonces);
        }

        let c = challenge(&self.challenger, statements, &commitments)?;
        let responses = all_nonces
            .iter()
            .zip(witnesses.iter())
            .map(|(nonces, witness)| prover::respond_all(nonces, &c, witness))
            .collect::<Result<Vec<_>>>()?;

        debug!("proved {} sigma statements under one challenge", statements.len());
        Ok(SigmaProof {
            commitments,
            responses,
            challenge: c,
        })
    }

    fn verify(&self, statements: &[Statement<G>], proof: &SigmaProof<G>) -> Result<()> {
        let complete = proof.commitments.len().min(proof.responses.len());
        if complete < statements.len() {
            debug!("sigma proof covers {} of {} statements", complete, statements.len());
            return Err(Error::SigmaProofInvalid {
                statement: complete,
            });
        }
        if proof.commitments.len() != statements.len() || proof.responses.len() != statements.len() {
            debug!("sigma proof carries more entries than statements");
            return Err(Error::SigmaProofInvalid {
                statement: statements.len(),
            });
        }

        if challenge(&self.challenger, statements, &proof.commitments)? != proof.challenge {
            debug!("sigma challenge mismatch");
            return Err(Error::SigmaChallengeMismatch);
        }

        match self
            .verify_statements(statements, proof)
            .iter()
            .position(|ok| !ok)
        {
            Some(statement) => {
                debug!("sigma statement {} rejected", statement);
                Err(Error::SigmaProofInvalid { statement })
            }
            None => Ok(()),
        }
    }

    fn verify_statements(&self, statements: &[Statement<G>], proof: &SigmaProof<G>) -> Vec<bool> {
        statements
            .iter()
            .enumerate()
            .map(|(i, statement)| {
                match (proof.responses.get(i), proof.commitments.get(i)) {
                    (Some(responses), Some(commitment)) => verifier::verify_statement(
                        statement,
                        responses,
                        &proof.challenge,
                        commitment,
                    ),
                    _ => false,
                }
            })
            .collect()
    }
}
