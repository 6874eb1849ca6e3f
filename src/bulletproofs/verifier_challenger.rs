use ark_ec::CurveGroup;
use ark_ff::PrimeField;

use super::{BitCommitments, PolyCommitments};
use crate::error::Result;
use crate::transcript::{Transcript, VerifierChallenger};

const DOMAIN: &[u8] = b"range-proof";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeChallenges<S: PrimeField> {
    pub y: S,
    pub z: S,
    pub x: S,
}

/// `V, g, h, A, S` in this order.
pub fn bit_transcript<G: CurveGroup>(
    g: &G,
    h: &G,
    commitment: &G,
    bits: &BitCommitments<G>,
) -> Result<Transcript> {
    let mut transcript = Transcript::new(DOMAIN);
    transcript.append_point(b"V", commitment)?;
    transcript.append_point(b"g", g)?;
    transcript.append_point(b"h", h)?;
    transcript.append_point(b"A", &bits.a)?;
    transcript.append_point(b"S", &bits.s)?;
    Ok(transcript)
}

/// `y = H(V, g, h, A, S, 1)` and `z = H(V, g, h, A, S, 2)`.
pub fn challenge_yz<S: PrimeField, C: VerifierChallenger<S>>(
    challenger: &C,
    transcript: &Transcript,
) -> (S, S) {
    let mut for_y = transcript.clone();
    for_y.append_u64(b"index", 1);
    let mut for_z = transcript.clone();
    for_z.append_u64(b"index", 2);
    (
        challenger.generate_challenge(&for_y, b"y"),
        challenger.generate_challenge(&for_z, b"z"),
    )
}

/// Extends the transcript with `T1, T2` and derives `x`.
pub fn challenge_x<G: CurveGroup, C: VerifierChallenger<G::ScalarField>>(
    challenger: &C,
    transcript: &mut Transcript,
    poly: &PolyCommitments<G>,
) -> Result<G::ScalarField> {
    transcript.append_point(b"T1", &poly.t1)?;
    transcript.append_point(b"T2", &poly.t2)?;
    Ok(challenger.generate_challenge(transcript, b"x"))
}

/// Extends the transcript with the opening of `t(x)` and derives the weight
/// of the inner-product base.
pub fn challenge_w<S: PrimeField, C: VerifierChallenger<S>>(
    challenger: &C,
    transcript: &mut Transcript,
    taux: &S,
    mu: &S,
    tx: &S,
) -> S {
    transcript.append_scalar(b"taux", taux);
    transcript.append_scalar(b"mu", mu);
    transcript.append_scalar(b"tx", tx);
    challenger.generate_challenge(transcript, b"w")
}

/// Replays the transcript of a proof up to `x`, returning it for any
/// further rounds.
pub fn derive_challenges<G: CurveGroup, C: VerifierChallenger<G::ScalarField>>(
    challenger: &C,
    g: &G,
    h: &G,
    commitment: &G,
    bits: &BitCommitments<G>,
    poly: &PolyCommitments<G>,
) -> Result<(RangeChallenges<G::ScalarField>, Transcript)> {
    let mut transcript = bit_transcript(g, h, commitment, bits)?;
    let (y, z) = challenge_yz(challenger, &transcript);
    let x = challenge_x(challenger, &mut transcript, poly)?;
    Ok((RangeChallenges { y, z, x }, transcript))
}
