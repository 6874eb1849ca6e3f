//! Fiat-Shamir transcripts.
//!
//! A [`Transcript`] records typed, labelled, length-prefixed canonical encodings
//! in the exact order a protocol step appends them. [`TranscriptHash`] turns the
//! recorded bytes into a scalar challenge with a Poseidon sponge over the
//! scalar field, so the hash is native to the field the challenges live in.


use ark_crypto_primitives::sponge::poseidon::{
    find_poseidon_ark_and_mds, PoseidonConfig, PoseidonSponge,
};
use ark_crypto_primitives::sponge::{Absorb, CryptographicSponge};
use ark_ec::CurveGroup;
use ark_ff::PrimeField;

use crate::algebra::{marshal, marshal_scalar};
use crate::error::{Error, Result};

const KIND_DOMAIN: u8 = 0;
const KIND_POINT: u8 = 1;
const KIND_SCALAR: u8 = 2;
const KIND_INT: u8 = 3;
const KIND_CHALLENGE: u8 = 4;

/// Round structure of the Poseidon permutation over a state of
/// `rate + capacity` field elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoseidonParameters {
    pub full_rounds: usize,
    pub partial_rounds: usize,
    pub alpha: u64,
    pub rate: usize,
    pub capacity: usize,
}

impl Default for PoseidonParameters {
    fn default() -> Self {
        Self {
            full_rounds: 8,
            partial_rounds: 57,
            alpha: 5,
            rate: 2,
            capacity: 1,
        }
    }
}

impl PoseidonParameters {
    pub fn validate(&self) -> Result<()> {
        if self.rate == 0 {
            return Err(Error::InvalidParameters("poseidon rate must be positive"));
        }
        if self.capacity == 0 {
            return Err(Error::InvalidParameters("poseidon capacity must be positive"));
        }
        if self.full_rounds == 0 || self.full_rounds % 2 != 0 {
            return Err(Error::InvalidParameters(
                "poseidon full rounds must be a positive even number",
            ));
        }
        if self.alpha < 3 {
            return Err(Error::InvalidParameters("poseidon alpha must be at least 3"));
        }
        Ok(())
    }
}

/// Deterministic hash from transcripts to scalars.
#[derive(Clone)]
pub struct TranscriptHash<S: PrimeField> {
    config: PoseidonConfig<S>,
}

impl<S: PrimeField + Absorb> TranscriptHash<S> {
    pub fn new(parameters: &PoseidonParameters) -> Result<Self> {
        parameters.validate()?;
        // The constant search sizes its state as `rate + 1`.
        let (ark, mds) = find_poseidon_ark_and_mds::<S>(
            S::MODULUS_BIT_SIZE as u64,
            parameters.rate + parameters.capacity - 1,
            parameters.full_rounds as u64,
            parameters.partial_rounds as u64,
            0,
        );
        let config = PoseidonConfig::new(
            parameters.full_rounds,
            parameters.partial_rounds,
            parameters.alpha,
            mds,
            ark,
            parameters.rate,
            parameters.capacity,
        );
        Ok(Self { config })
    }

    pub fn hash_elements(&self, elements: &[S]) -> S {
        let mut sponge = PoseidonSponge::new(&self.config);
        for element in elements {
            sponge.absorb(element);
        }
        sponge.squeeze_field_elements(1)[0]
    }

    /// Packs `bytes` into field elements that fit strictly below the modulus,
    /// prefixed with the byte length so distinct inputs never pack alike.
    pub fn hash_bytes(&self, bytes: &[u8]) -> S {
        let chunk = ((S::MODULUS_BIT_SIZE - 1) / 8) as usize;
        let mut elements = Vec::with_capacity(bytes.len() / chunk + 2);
        elements.push(S::from(bytes.len() as u64));
        elements.extend(bytes.chunks(chunk).map(S::from_le_bytes_mod_order));
        self.hash_elements(&elements)
    }
}

/// Ordered record of the public values of one protocol run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    bytes: Vec<u8>,
}

impl Transcript {
    pub fn new(domain: &'static [u8]) -> Self {
        let mut transcript = Self { bytes: Vec::new() };
        transcript.append_raw(KIND_DOMAIN, b"domain", domain);
        transcript
    }

    fn append_raw(&mut self, kind: u8, label: &'static [u8], data: &[u8]) {
        self.bytes.push(kind);
        self.bytes.push(label.len() as u8);
        self.bytes.extend_from_slice(label);
        self.bytes
            .extend_from_slice(&(data.len() as u32).to_be_bytes());
        self.bytes.extend_from_slice(data);
    }

    pub fn append_point<G: CurveGroup>(&mut self, label: &'static [u8], point: &G) -> Result<()> {
        let encoded = marshal(point)?;
        self.append_raw(KIND_POINT, label, &encoded);
        Ok(())
    }

    pub fn append_points<G: CurveGroup>(
        &mut self,
        label: &'static [u8],
        points: &[G],
    ) -> Result<()> {
        self.append_u64(label, points.len() as u64);
        points
            .iter()
            .try_for_each(|point| self.append_point(label, point))
    }

    pub fn append_scalar<S: PrimeField>(&mut self, label: &'static [u8], scalar: &S) {
        self.append_raw(KIND_SCALAR, label, &marshal_scalar(scalar));
    }

    pub fn append_u64(&mut self, label: &'static [u8], value: u64) {
        self.append_raw(KIND_INT, label, &value.to_be_bytes());
    }

    /// Derives the challenge named `label` from everything appended so far.
    /// The transcript itself is left untouched, so two labels over the same
    /// prefix give independent challenges.
    pub fn challenge_scalar<S: PrimeField + Absorb>(
        &self,
        hash: &TranscriptHash<S>,
        label: &'static [u8],
    ) -> S {
        let mut bytes = self.bytes.clone();
        bytes.push(KIND_CHALLENGE);
        bytes.push(label.len() as u8);
        bytes.extend_from_slice(label);
        hash.hash_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Source of Fiat-Shamir challenges for the protocols in this crate.
///
/// Provers and verifiers ask the challenger for every challenge, so a test
/// can pin challenges to constants and exercise the algebra in isolation.
pub trait VerifierChallenger<S: PrimeField> {
    fn generate_challenge(&self, transcript: &Transcript, label: &'static [u8]) -> S;
}

/// Hashes the transcript with the context's [`TranscriptHash`].
#[derive(Clone, Copy)]
pub struct HashChallenger<'a, S: PrimeField> {
    hash: &'a TranscriptHash<S>,
}

impl<'a, S: PrimeField> HashChallenger<'a, S> {
    pub fn new(hash: &'a TranscriptHash<S>) -> Self {
        Self { hash }
    }
}

impl<S: PrimeField + Absorb> VerifierChallenger<S> for HashChallenger<'_, S> {
    fn generate_challenge(&self, transcript: &Transcript, label: &'static [u8]) -> S {
        transcript.challenge_scalar(self.hash, label)
    }
}
