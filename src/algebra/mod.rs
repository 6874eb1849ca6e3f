//! Scalar and curve-point operations shared by every protocol in the crate.
//!
//! All functions are generic over an arkworks [`CurveGroup`]; the protocols above
//! never construct points by hand, they only combine the outputs of these
//! operations, so every point they handle is on the curve and in the prime-order
//! subgroup.


use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{BigInteger, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};

pub fn add<G: CurveGroup>(p: &G, q: &G) -> G {
    *p + q
}

pub fn scalar_mul<G: CurveGroup>(p: &G, k: &G::ScalarField) -> G {
    *p * k
}

/// Multiplies the curve's canonical generator.
pub fn scalar_mul_base<G: CurveGroup>(k: &G::ScalarField) -> G {
    G::generator() * k
}

pub fn negate<G: CurveGroup>(p: &G) -> G {
    -*p
}

pub fn equal<G: CurveGroup>(p: &G, q: &G) -> bool {
    p == q
}

/// Samples a uniform scalar from `rng`.
///
/// Draws 128 bits more than the modulus width and reduces, so the bias of the
/// reduction is negligible. Fails with [`Error::EntropyFailure`] when the
/// generator cannot produce bytes.
pub fn random_scalar<S: PrimeField, R: RngCore + CryptoRng>(rng: &mut R) -> Result<S> {
    let len = (S::MODULUS_BIT_SIZE as usize + 7) / 8 + 16;
    let mut wide = vec![0u8; len];
    rng.try_fill_bytes(&mut wide)
        .map_err(|_| Error::EntropyFailure)?;
    Ok(S::from_le_bytes_mod_order(&wide))
}

pub fn random_scalars<S: PrimeField, R: RngCore + CryptoRng>(
    n: usize,
    rng: &mut R,
) -> Result<Vec<S>> {
    (0..n).map(|_| random_scalar(rng)).collect()
}

/// Length in bytes of [`marshal`]'s output for points of `G`.
pub fn point_encoding_len<G: CurveGroup>() -> usize {
    G::Affine::generator().compressed_size()
}

/// Fixed-length canonical encoding of a point, as absorbed by transcripts.
///
/// This is the compressed arkworks encoding written most-significant byte
/// first: on short Weierstrass curves it is the big-endian `X` coordinate with
/// the `Y` sign and infinity flags in the top bits of the first byte; on
/// twisted Edwards curves it is the big-endian `Y` coordinate with the `X`
/// sign flag. See [`marshal_x`] for the `X`-only encoding.
pub fn marshal<G: CurveGroup>(p: &G) -> Result<Vec<u8>> {
    let affine = p.into_affine();
    let mut bytes = Vec::with_capacity(affine.compressed_size());
    affine.serialize_compressed(&mut bytes)?;
    bytes.reverse();
    Ok(bytes)
}

/// Inverse of [`marshal`]. Rejects wrong lengths, non-canonical coordinates and
/// points that are off the curve or outside the prime-order subgroup.
pub fn unmarshal<G: CurveGroup>(bytes: &[u8]) -> Result<G> {
    if bytes.len() != point_encoding_len::<G>() {
        return Err(Error::DecodingError("point encoding has the wrong length"));
    }
    let mut le = bytes.to_vec();
    le.reverse();
    let affine = G::Affine::deserialize_compressed(&le[..])?;
    Ok(affine.into())
}

/// Canonical fixed-width big-endian encoding of a scalar.
pub fn marshal_scalar<S: PrimeField>(s: &S) -> Vec<u8> {
    s.into_bigint().to_bytes_be()
}

/// Inverse of [`marshal_scalar`]. Rejects encodings that are not the canonical
/// representative, i.e. values at or above the modulus.
pub fn unmarshal_scalar<S: PrimeField>(bytes: &[u8]) -> Result<S> {
    if bytes.len() != marshal_scalar(&S::zero()).len() {
        return Err(Error::DecodingError("scalar encoding has the wrong length"));
    }
    let s = S::from_be_bytes_mod_order(bytes);
    if marshal_scalar(&s) != bytes {
        return Err(Error::DecodingError("scalar is not reduced"));
    }
    Ok(s)
}

/// `X` coordinate of the affine representation, zero for the point at infinity.
pub fn x_coordinate<G: CurveGroup>(p: &G) -> G::BaseField {
    p.into_affine()
        .xy()
        .map(|(x, _)| *x)
        .unwrap_or_else(G::BaseField::zero)
}

/// Big-endian `X` coordinate at the base field's fixed width, the encoding an
/// external signer or circuit reads a point by. Not invertible on its own.
pub fn marshal_x<G>(p: &G) -> Vec<u8>
where
    G: CurveGroup,
    G::BaseField: PrimeField,
{
    x_coordinate(p).into_bigint().to_bytes_be()
}

/// Embeds a scalar into another prime field through its integer representative.
///
/// Injective whenever the target modulus exceeds the source modulus, which is
/// the case for the scalar field of an embedded curve and its base field.
pub fn scalar_to_base_field<S: PrimeField, F: PrimeField>(s: &S) -> F {
    F::from_le_bytes_mod_order(&s.into_bigint().to_bytes_le())
}

/// `1, x, x^2, ..., x^(n-1)`
pub fn powers<S: PrimeField>(x: S, n: usize) -> Vec<S> {
    let mut out = Vec::with_capacity(n);
    let mut cur = S::one();
    for _ in 0..n {
        out.push(cur);
        cur *= x;
    }
    out
}

pub fn inner_product<S: PrimeField>(a: &[S], b: &[S]) -> Result<S> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| *ai * bi).sum())
}

pub fn hadamard<S: PrimeField>(a: &[S], b: &[S]) -> Result<Vec<S>> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| *ai * bi).collect())
}

/// `Σ s_i · P_i`, failing fast on mismatched lengths instead of truncating.
pub fn multi_scalar_mul<G: CurveGroup>(scalars: &[G::ScalarField], points: &[G]) -> Result<G> {
    if scalars.len() != points.len() {
        return Err(Error::DimensionMismatch {
            expected: points.len(),
            found: scalars.len(),
        });
    }
    let bases = G::normalize_batch(points);
    G::msm(&bases, scalars).map_err(|found| Error::DimensionMismatch {
        expected: bases.len(),
        found,
    })
}
