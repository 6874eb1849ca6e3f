use ark_ec::CurveGroup;
use ark_ff::{Field, PrimeField};

use super::helpers::*;

pub mod prover {
    use ark_poly::univariate::DensePolynomial;
    use ark_poly::Polynomial;
    use log::trace;
    use rand::{CryptoRng, RngCore};

    use crate::algebra::{hadamard, powers, random_scalar, random_scalars};
    use crate::bulletproofs::{
        BitCommitments, InnerProductGenerators, InnerProductProof, PolyCommitments,
    };
    use crate::context::check_bit_width;
    use crate::error::{Error, Result};
    use crate::pedersen::{commit_scalar, commit_vector};
    use crate::transcript::{Transcript, VerifierChallenger};

    use super::*;

    /// Bit vectors of the value and their blinding vectors.
    #[derive(Clone, Debug)]
    pub struct BitWitness<S: PrimeField> {
        pub a_l: Vec<S>,
        pub a_r: Vec<S>,
        pub s_l: Vec<S>,
        pub s_r: Vec<S>,
        pub alpha: S,
        pub rho: S,
    }

    #[derive(Clone, Debug)]
    pub struct PolyWitness<S: PrimeField> {
        pub l: VecPoly1<S>,
        pub r: VecPoly1<S>,
        pub t: DensePolynomial<S>,
        pub tau1: S,
        pub tau2: S,
    }

    /// Everything the prover reveals after `x`.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct RangeResponse<S: PrimeField> {
        pub l: Vec<S>,
        pub r: Vec<S>,
        pub tx: S,
        pub taux: S,
        pub mu: S,
    }

    /// Decomposes `value` over `gs.len()` bits and commits to the bits and to
    /// fresh blinding vectors.
    pub fn commit_bits<G: CurveGroup, R: RngCore + CryptoRng>(
        h: &G,
        gs: &[G],
        hs: &[G],
        value: u64,
        rng: &mut R,
    ) -> Result<(BitCommitments<G>, BitWitness<G::ScalarField>)> {
        let n = gs.len();
        let a_l: Vec<G::ScalarField> = bit_vector(value, n);
        let a_r = complement_vector(&a_l);
        let alpha: G::ScalarField = random_scalar(rng)?;
        let a = *h * alpha + commit_vector(&a_l, &a_r, gs, hs)?;

        let s_l = random_scalars(n, rng)?;
        let s_r = random_scalars(n, rng)?;
        let rho: G::ScalarField = random_scalar(rng)?;
        let s = *h * rho + commit_vector(&s_l, &s_r, gs, hs)?;

        trace!("committed to {} bits", n);
        Ok((
            BitCommitments { a, s },
            BitWitness {
                a_l,
                a_r,
                s_l,
                s_r,
                alpha,
                rho,
            },
        ))
    }

    /// Builds `l(X) = a_L - z·1 + s_L·X` and
    /// `r(X) = y^n ∘ (a_R + z·1 + s_R·X) + z²·2^n`, and commits to the
    /// linear and quadratic coefficients of `t(X) = <l(X), r(X)>`.
    pub fn commit_polynomial<G: CurveGroup, R: RngCore + CryptoRng>(
        g: &G,
        h: &G,
        witness: &BitWitness<G::ScalarField>,
        y: G::ScalarField,
        z: G::ScalarField,
        rng: &mut R,
    ) -> Result<(PolyCommitments<G>, PolyWitness<G::ScalarField>)> {
        let n = witness.a_l.len();
        let y_n = powers(y, n);
        let two_n = powers(G::ScalarField::from(2u64), n);

        let l = VecPoly1::new(add_scalar(&witness.a_l, -z), witness.s_l.clone())?;
        let r0 = add_vectors(
            &hadamard(&y_n, &add_scalar(&witness.a_r, z))?,
            &scale(&two_n, z.square()),
        )?;
        let r1 = hadamard(&y_n, &witness.s_r)?;
        let r = VecPoly1::new(r0, r1)?;
        let t = l.inner_product(&r)?;

        let tau1: G::ScalarField = random_scalar(rng)?;
        let tau2: G::ScalarField = random_scalar(rng)?;
        let poly = PolyCommitments {
            t1: commit_scalar(g, h, &coefficient(&t, 1), &tau1),
            t2: commit_scalar(g, h, &coefficient(&t, 2), &tau2),
        };
        Ok((
            poly,
            PolyWitness {
                l,
                r,
                t,
                tau1,
                tau2,
            },
        ))
    }

    pub fn respond<S: PrimeField>(
        bits: &BitWitness<S>,
        poly: &PolyWitness<S>,
        blinding: &S,
        z: S,
        x: S,
    ) -> RangeResponse<S> {
        RangeResponse {
            l: poly.l.eval(x),
            r: poly.r.eval(x),
            tx: poly.t.evaluate(&x),
            taux: poly.tau2 * x.square() + poly.tau1 * x + z.square() * blinding,
            mu: bits.alpha + bits.rho * x,
        }
    }

    /// Proves knowledge of `a, b` with
    /// `P = <a, g> + <b, h> + <a, b>·u`, halving the vectors each round.
    pub fn prove_inner_product<G, C>(
        challenger: &C,
        transcript: &mut Transcript,
        generators: InnerProductGenerators<G>,
        a: Vec<G::ScalarField>,
        b: Vec<G::ScalarField>,
    ) -> Result<InnerProductProof<G>>
    where
        G: CurveGroup,
        C: VerifierChallenger<G::ScalarField>,
    {
        let n = a.len();
        if b.len() != n || generators.g.len() != n || generators.h.len() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: b.len().min(generators.g.len()).min(generators.h.len()),
            });
        }
        check_bit_width(n, n)?;

        let mut generators = generators;
        let mut a = a;
        let mut b = b;
        let mut l_vec = Vec::with_capacity(n.trailing_zeros() as usize);
        let mut r_vec = Vec::with_capacity(n.trailing_zeros() as usize);

        while a.len() > 1 {
            let m = a.len() / 2;
            let (a_l, a_r) = a.split_at(m);
            let (b_l, b_r) = b.split_at(m);
            let (g_l, g_r) = generators.g.split_at(m);
            let (h_l, h_r) = generators.h.split_at(m);

            // L = [<a_L, b_R>]U + [a_L]G_R + [b_R]H_L
            let l_value = intermediate_commitment(a_l, b_r, &generators.u, g_r, h_l)?;
            // R = [<a_R, b_L>]U + [a_R]G_L + [b_L]H_R
            let r_value = intermediate_commitment(a_r, b_l, &generators.u, g_l, h_r)?;

            transcript.append_point(b"L", &l_value)?;
            transcript.append_point(b"R", &r_value)?;
            let x = challenger.generate_challenge(transcript, b"u");

            let (a_next, b_next) = fold_vectors(&a, &b, x)?;
            generators = fold_generators(&generators, x)?;
            a = a_next;
            b = b_next;
            l_vec.push(l_value);
            r_vec.push(r_value);
        }

        trace!("inner product argument with {} rounds", l_vec.len());
        Ok(InnerProductProof {
            l_vec,
            r_vec,
            a: a[0],
            b: b[0],
        })
    }
}
