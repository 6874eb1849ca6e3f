use ark_crypto_primitives::sponge::Absorb;
use ark_ec::CurveGroup;
use log::debug;
use rand::{CryptoRng, RngCore};

use super::helpers::scaled_generators;
use super::prover::prover;
use super::verifier::verifier;
use super::verifier_challenger::{
    bit_transcript, challenge_w, challenge_x, challenge_yz, derive_challenges,
};
use super::{
    BitCommitments, CompactRangeProof, InnerProductGenerators, PolyCommitments, RangeChallenges,
    RangeProof, RangeProofSystem,
};
use crate::context::{check_bit_width, CurveContext};
use crate::error::Result;
use crate::pedersen::commit_scalar;
use crate::transcript::{HashChallenger, Transcript, VerifierChallenger};

/// Range proofs of a fixed bit width over a shared context.
pub struct RangeProofSystemImpl<'a, G, C>
where
    G: CurveGroup,
    C: VerifierChallenger<G::ScalarField>,
{
    pub context: &'a CurveContext<G>,
    pub bits: usize,
    pub challenger: C,
}

impl<'a, G> RangeProofSystemImpl<'a, G, HashChallenger<'a, G::ScalarField>>
where
    G: CurveGroup,
    G::ScalarField: Absorb,
{
    pub fn new(context: &'a CurveContext<G>, bits: usize) -> Result<Self> {
        Self::with_challenger(context, bits, HashChallenger::new(context.transcript_hash()))
    }
}

impl<'a, G, C> RangeProofSystemImpl<'a, G, C>
where
    G: CurveGroup,
    C: VerifierChallenger<G::ScalarField>,
{
    pub fn with_challenger(context: &'a CurveContext<G>, bits: usize, challenger: C) -> Result<Self> {
        check_bit_width(bits, context.capacity())?;
        Ok(Self {
            context,
            bits,
            challenger,
        })
    }

    /// Runs the prover up to the response at `x`, returning the transcript
    /// for any further rounds.
    fn prove_parts<R: RngCore + CryptoRng>(
        &self,
        value: u64,
        blinding: &G::ScalarField,
        rng: &mut R,
    ) -> Result<(RangeProof<G>, RangeChallenges<G::ScalarField>, Transcript)> {
        let context = self.context;
        let (gs, hs) = context.vector_generators(self.bits)?;
        let commitment = commit_scalar(&context.g, &context.h, &G::ScalarField::from(value), blinding);

        let (bits, bit_witness) = prover::commit_bits(&context.h, gs, hs, value, rng)?;
        let mut transcript = bit_transcript(&context.g, &context.h, &commitment, &bits)?;
        let (y, z) = challenge_yz(&self.challenger, &transcript);

        let (poly, poly_witness) =
            prover::commit_polynomial(&context.g, &context.h, &bit_witness, y, z, rng)?;
        let x = challenge_x(&self.challenger, &mut transcript, &poly)?;

        let response = prover::respond(&bit_witness, &poly_witness, blinding, z, x);
        let proof = RangeProof {
            commitment,
            bits,
            poly,
            taux: response.taux,
            mu: response.mu,
            l: response.l,
            r: response.r,
            tx: response.tx,
        };
        Ok((proof, RangeChallenges { y, z, x }, transcript))
    }

    /// Checks `t(x)` against `T1, T2`. Returns the transcript through `x`,
    /// `H'` and the vector commitment `P`.
    fn verify_common(
        &self,
        commitment: &G,
        proof_bits: &BitCommitments<G>,
        poly: &PolyCommitments<G>,
        tx: &G::ScalarField,
        taux: &G::ScalarField,
    ) -> Result<(Transcript, Vec<G>, G)> {
        let context = self.context;
        let (gs, hs) = context.vector_generators(self.bits)?;
        let (challenges, transcript) = derive_challenges(
            &self.challenger,
            &context.g,
            &context.h,
            commitment,
            proof_bits,
            poly,
        )?;

        verifier::verify_polynomial_commitment(
            &context.g,
            &context.h,
            commitment,
            poly,
            tx,
            taux,
            &challenges,
            self.bits,
        )?;

        let hs_prime = scaled_generators(hs, challenges.y)?;
        let p = verifier::vector_commitment(gs, &hs_prime, proof_bits, &challenges)?;
        Ok((transcript, hs_prime, p))
    }
}

impl<G, C> RangeProofSystem<G> for RangeProofSystemImpl<'_, G, C>
where
    G: CurveGroup,
    C: VerifierChallenger<G::ScalarField>,
{
    type Proof = RangeProof<G>;

    fn prove<R: RngCore + CryptoRng>(
        &self,
        value: u64,
        blinding: &G::ScalarField,
        rng: &mut R,
    ) -> Result<RangeProof<G>> {
        let (proof, _, _) = self.prove_parts(value, blinding, rng)?;
        debug!("proved {}-bit range", self.bits);
        Ok(proof)
    }

    fn verify(&self, proof: &RangeProof<G>) -> Result<()> {
        verifier::check_length(&proof.l, self.bits)?;
        verifier::check_length(&proof.r, self.bits)?;
        verifier::verify_inner_product_value(&proof.l, &proof.r, &proof.tx)?;

        let (_, hs_prime, p) =
            self.verify_common(&proof.commitment, &proof.bits, &proof.poly, &proof.tx, &proof.taux)?;
        let (gs, _) = self.context.vector_generators(self.bits)?;
        verifier::verify_vector_commitment(
            &self.context.h,
            gs,
            &hs_prime,
            &p,
            &proof.mu,
            &proof.l,
            &proof.r,
        )
    }
}

/// Range proofs whose `l` and `r` are folded by an inner-product argument.
pub struct CompactRangeProofSystemImpl<'a, G, C>
where
    G: CurveGroup,
    C: VerifierChallenger<G::ScalarField>,
{
    pub inner: RangeProofSystemImpl<'a, G, C>,
}

impl<'a, G> CompactRangeProofSystemImpl<'a, G, HashChallenger<'a, G::ScalarField>>
where
    G: CurveGroup,
    G::ScalarField: Absorb,
{
    pub fn new(context: &'a CurveContext<G>, bits: usize) -> Result<Self> {
        Ok(Self {
            inner: RangeProofSystemImpl::new(context, bits)?,
        })
    }
}

impl<'a, G, C> CompactRangeProofSystemImpl<'a, G, C>
where
    G: CurveGroup,
    C: VerifierChallenger<G::ScalarField>,
{
    pub fn with_challenger(context: &'a CurveContext<G>, bits: usize, challenger: C) -> Result<Self> {
        Ok(Self {
            inner: RangeProofSystemImpl::with_challenger(context, bits, challenger)?,
        })
    }

    /// Generators of the inner-product argument: `G`, `H'` and `w·u`.
    fn ipa_generators(&self, hs_prime: Vec<G>, w: G::ScalarField) -> Result<InnerProductGenerators<G>> {
        let (gs, _) = self.inner.context.vector_generators(self.inner.bits)?;
        Ok(InnerProductGenerators {
            g: gs.to_vec(),
            h: hs_prime,
            u: self.inner.context.u * w,
        })
    }
}

impl<G, C> RangeProofSystem<G> for CompactRangeProofSystemImpl<'_, G, C>
where
    G: CurveGroup,
    C: VerifierChallenger<G::ScalarField>,
{
    type Proof = CompactRangeProof<G>;

    fn prove<R: RngCore + CryptoRng>(
        &self,
        value: u64,
        blinding: &G::ScalarField,
        rng: &mut R,
    ) -> Result<CompactRangeProof<G>> {
        let inner = &self.inner;
        let (full, challenges, mut transcript) = inner.prove_parts(value, blinding, rng)?;
        let w = challenge_w(&inner.challenger, &mut transcript, &full.taux, &full.mu, &full.tx);
        let (_, hs) = inner.context.vector_generators(inner.bits)?;
        let generators = self.ipa_generators(scaled_generators(hs, challenges.y)?, w)?;

        let ipa =
            prover::prove_inner_product(&inner.challenger, &mut transcript, generators, full.l, full.r)?;
        debug!("proved {}-bit range with {} folding rounds", inner.bits, ipa.l_vec.len());
        Ok(CompactRangeProof {
            commitment: full.commitment,
            bits: full.bits,
            poly: full.poly,
            taux: full.taux,
            mu: full.mu,
            tx: full.tx,
            ipa,
        })
    }

    fn verify(&self, proof: &CompactRangeProof<G>) -> Result<()> {
        let inner = &self.inner;
        let (mut transcript, hs_prime, p) =
            inner.verify_common(&proof.commitment, &proof.bits, &proof.poly, &proof.tx, &proof.taux)?;
        let w = challenge_w(&inner.challenger, &mut transcript, &proof.taux, &proof.mu, &proof.tx);
        let generators = self.ipa_generators(hs_prime, w)?;

        // P - μ·h = <l, G> + <r, H'>; the argument also binds <l, r> = t(x).
        let commitment = p - inner.context.h * proof.mu + generators.u * proof.tx;
        verifier::verify_inner_product(&inner.challenger, &mut transcript, generators, commitment, &proof.ipa)
    }
}
