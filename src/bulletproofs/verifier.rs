use ark_ec::CurveGroup;
use ark_ff::{Field, PrimeField};

use super::helpers::*;

pub mod verifier {
    use log::debug;

    use crate::algebra::{inner_product, multi_scalar_mul, powers};
    use crate::bulletproofs::{
        BitCommitments, InnerProductGenerators, InnerProductProof, PolyCommitments,
        RangeChallenges,
    };
    use crate::error::{Error, Result};
    use crate::transcript::{Transcript, VerifierChallenger};

    use super::*;

    fn reject(reason: &'static str) -> Error {
        debug!("range proof rejected: {}", reason);
        Error::RangeProofInvalid(reason)
    }

    pub fn check_length<T>(values: &[T], n: usize) -> Result<()> {
        if values.len() != n {
            return Err(reject("vector length does not match the bit width"));
        }
        Ok(())
    }

    /// `t(x) = <l, r>`
    pub fn verify_inner_product_value<S: PrimeField>(l: &[S], r: &[S], tx: &S) -> Result<()> {
        if inner_product(l, r)? != *tx {
            return Err(reject("t(x) is not the inner product of l and r"));
        }
        Ok(())
    }

    /// `t(x)·g + τx·h = z²·V + δ(y, z)·g + x·T1 + x²·T2`
    #[allow(clippy::too_many_arguments)]
    pub fn verify_polynomial_commitment<G: CurveGroup>(
        g: &G,
        h: &G,
        commitment: &G,
        poly: &PolyCommitments<G>,
        tx: &G::ScalarField,
        taux: &G::ScalarField,
        challenges: &RangeChallenges<G::ScalarField>,
        n: usize,
    ) -> Result<()> {
        let RangeChallenges { y, z, x } = *challenges;
        let lhs = *g * tx + *h * taux;
        let rhs = *commitment * z.square()
            + *g * delta(y, z, n)
            + poly.t1 * x
            + poly.t2 * x.square();
        if lhs != rhs {
            return Err(reject("polynomial commitment does not open to t(x)"));
        }
        Ok(())
    }

    /// `A + x·S - z·ΣG_i + Σ (z·y^i + z²·2^i)·H'_i`, which an honest proof
    /// opens to `μ·h + <l, G> + <r, H'>`.
    pub fn vector_commitment<G: CurveGroup>(
        gs: &[G],
        hs_prime: &[G],
        bits: &BitCommitments<G>,
        challenges: &RangeChallenges<G::ScalarField>,
    ) -> Result<G> {
        let RangeChallenges { y, z, x } = *challenges;
        let n = gs.len();
        let z2 = z.square();
        let g_sum: G = gs.iter().sum();
        let h_scalars: Vec<G::ScalarField> = powers(y, n)
            .into_iter()
            .zip(powers(G::ScalarField::from(2u64), n))
            .map(|(y_i, two_i)| z * y_i + z2 * two_i)
            .collect();
        Ok(bits.a + bits.s * x - g_sum * z + multi_scalar_mul(&h_scalars, hs_prime)?)
    }

    pub fn verify_vector_commitment<G: CurveGroup>(
        h: &G,
        gs: &[G],
        hs_prime: &[G],
        p: &G,
        mu: &G::ScalarField,
        l: &[G::ScalarField],
        r: &[G::ScalarField],
    ) -> Result<()> {
        let rhs = *h * mu + multi_scalar_mul(l, gs)? + multi_scalar_mul(r, hs_prime)?;
        if *p != rhs {
            return Err(reject("vector commitment does not open to l and r"));
        }
        Ok(())
    }

    /// Replays the halving rounds of an inner-product argument against the
    /// commitment `P` and checks the final scalars.
    pub fn verify_inner_product<G, C>(
        challenger: &C,
        transcript: &mut Transcript,
        generators: InnerProductGenerators<G>,
        commitment: G,
        proof: &InnerProductProof<G>,
    ) -> Result<()>
    where
        G: CurveGroup,
        C: VerifierChallenger<G::ScalarField>,
    {
        let n = generators.g.len();
        let rounds = n.trailing_zeros() as usize;
        if !n.is_power_of_two() || proof.l_vec.len() != rounds || proof.r_vec.len() != rounds {
            return Err(reject("inner product proof has the wrong number of rounds"));
        }

        let mut generators = generators;
        let mut p = commitment;
        for (l_value, r_value) in proof.l_vec.iter().zip(proof.r_vec.iter()) {
            transcript.append_point(b"L", l_value)?;
            transcript.append_point(b"R", r_value)?;
            let x = challenger.generate_challenge(transcript, b"u");
            let x_inv = x
                .inverse()
                .ok_or_else(|| reject("folding challenge is zero"))?;

            p = *l_value * x.square() + *r_value * x_inv.square() + p;
            generators = fold_generators(&generators, x)?;
        }

        let expected = generators.g[0] * proof.a
            + generators.h[0] * proof.b
            + generators.u * (proof.a * proof.b);
        if expected != p {
            return Err(reject("inner product argument does not open"));
        }
        Ok(())
    }
}
