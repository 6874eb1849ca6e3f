//! Additively homomorphic ElGamal over a prime-order group.
//!
//! A plaintext is a point `m` (amounts are encoded as `v·base`); a ciphertext
//! under `pk = sk·base` with randomness `r` is `(A, B) = (m + r·pk, r·base)`.
//! Adding ciphertexts component-wise adds plaintexts and randomness.


use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use ark_ec::CurveGroup;
use ark_ff::{PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rand::{CryptoRng, RngCore};

use crate::algebra::{marshal_x, random_scalar};
use crate::error::{self, Error};

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Keypair<G: CurveGroup> {
    secret: G::ScalarField,
    pub public: G,
}

impl<G: CurveGroup> Keypair<G> {
    pub fn secret(&self) -> &G::ScalarField {
        &self.secret
    }
}

impl<G: CurveGroup> fmt::Debug for Keypair<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Ciphertext<G: CurveGroup> {
    pub a: G,
    pub b: G,
}

impl<G: CurveGroup> Ciphertext<G> {
    /// Encryption of the identity with zero randomness.
    pub fn zero() -> Self {
        Self {
            a: G::zero(),
            b: G::zero(),
        }
    }
}

impl<G: CurveGroup> Add for Ciphertext<G> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            a: self.a + rhs.a,
            b: self.b + rhs.b,
        }
    }
}

impl<G: CurveGroup> Sub for Ciphertext<G> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            a: self.a - rhs.a,
            b: self.b - rhs.b,
        }
    }
}

impl<G: CurveGroup> Neg for Ciphertext<G> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            a: -self.a,
            b: -self.b,
        }
    }
}

/// Bytes an external signer signs for a ciphertext: the big-endian `A.X`.
pub fn signing_message<G>(ciphertext: &Ciphertext<G>) -> Vec<u8>
where
    G: CurveGroup,
    G::BaseField: PrimeField,
{
    marshal_x(&ciphertext.a)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElGamal<G: CurveGroup> {
    pub base: G,
}

impl<G: CurveGroup> ElGamal<G> {
    pub fn new(base: G) -> Self {
        Self { base }
    }

    pub fn keygen<R: RngCore + CryptoRng>(&self, rng: &mut R) -> error::Result<Keypair<G>> {
        let secret: G::ScalarField = random_scalar(rng)?;
        Ok(self.keypair_from_secret(secret))
    }

    pub fn keypair_from_secret(&self, secret: G::ScalarField) -> Keypair<G> {
        Keypair {
            secret,
            public: self.base * secret,
        }
    }

    pub fn encode(&self, value: &G::ScalarField) -> G {
        self.base * value
    }

    pub fn encrypt(&self, public_key: &G, plaintext: &G, randomness: &G::ScalarField) -> Ciphertext<G> {
        Ciphertext {
            a: *plaintext + *public_key * randomness,
            b: self.base * randomness,
        }
    }

    /// Encrypts `value·base`.
    pub fn encrypt_value(
        &self,
        public_key: &G,
        value: &G::ScalarField,
        randomness: &G::ScalarField,
    ) -> Ciphertext<G> {
        self.encrypt(public_key, &self.encode(value), randomness)
    }

    pub fn decrypt(&self, secret: &G::ScalarField, ciphertext: &Ciphertext<G>) -> G {
        ciphertext.a - ciphertext.b * secret
    }

    pub fn decrypt_matches(
        &self,
        secret: &G::ScalarField,
        ciphertext: &Ciphertext<G>,
        expected: &G,
    ) -> bool {
        self.decrypt(secret, ciphertext) == *expected
    }

    /// Adds a fresh encryption of the identity, leaving the plaintext intact.
    pub fn rerandomize(
        &self,
        public_key: &G,
        ciphertext: &Ciphertext<G>,
        randomness: &G::ScalarField,
    ) -> Ciphertext<G> {
        *ciphertext + self.encrypt(public_key, &G::zero(), randomness)
    }

    /// Recovers `v <= bound` from an encryption of `v·base` with a
    /// baby-step giant-step search; `Ok(None)` when no such `v` exists.
    pub fn decrypt_amount(
        &self,
        secret: &G::ScalarField,
        ciphertext: &Ciphertext<G>,
        bound: u64,
    ) -> error::Result<Option<u64>> {
        discrete_log(&self.base, &self.decrypt(secret, ciphertext), bound)
    }
}

/// Largest baby-step table [`discrete_log`] builds.
pub const MAX_BABY_STEPS: u64 = 1 << 20;

/// Smallest `v <= bound` with `target = v·base`. Bounds that would need more
/// than [`MAX_BABY_STEPS`] table entries are rejected.
pub fn discrete_log<G: CurveGroup>(base: &G, target: &G, bound: u64) -> error::Result<Option<u64>> {
    if bound >= MAX_BABY_STEPS * MAX_BABY_STEPS {
        return Err(Error::InvalidParameters(
            "discrete log bound exceeds the baby-step table",
        ));
    }
    // Smallest `steps` with `steps² > bound`.
    let mut steps = (bound as f64).sqrt() as u64;
    while steps * steps > bound && steps > 0 {
        steps -= 1;
    }
    while steps * steps <= bound {
        steps += 1;
    }

    let mut baby = HashMap::with_capacity(steps as usize);
    let mut acc = G::zero();
    for j in 0..steps {
        baby.entry(acc.into_affine()).or_insert(j);
        acc += base;
    }

    let giant = *base * G::ScalarField::from(steps);
    let mut gamma = *target;
    for i in 0..steps {
        if let Some(j) = baby.get(&gamma.into_affine()) {
            let v = i * steps + j;
            return Ok((v <= bound).then_some(v));
        }
        gamma -= giant;
    }
    Ok(None)
}
