use ark_crypto_primitives::sponge::Absorb;
use ark_ec::CurveGroup;
use ark_ff::{BigInteger, PrimeField};
use log::debug;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::{Error, Result};
use crate::pedersen::{generate_point, generate_points};
use crate::transcript::{PoseidonParameters, TranscriptHash};

/// Largest range width the crate proves; values are `u64`.
pub const MAX_RANGE_BITS: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextConfig {
    /// Widest range proof the context must support, a power of two.
    pub max_bits: usize,
    /// Derive the generators from this seed instead of the caller's RNG, so
    /// that separate processes agree on them.
    pub seed: Option<[u8; 32]>,
    pub poseidon: PoseidonParameters,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_bits: MAX_RANGE_BITS,
            seed: None,
            poseidon: PoseidonParameters::default(),
        }
    }
}

impl ContextConfig {
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_bit_width(self.max_bits, MAX_RANGE_BITS)?;
        self.poseidon.validate()
    }
}

/// Accepts powers of two in `[1, capacity]`.
pub fn check_bit_width(bits: usize, capacity: usize) -> Result<()> {
    if bits == 0 || !bits.is_power_of_two() || bits > capacity || bits > MAX_RANGE_BITS {
        return Err(Error::UnsupportedBitWidth(bits));
    }
    Ok(())
}

/// Immutable public parameters shared by every prover and verifier.
///
/// Built once and passed by reference; nothing in the crate keeps global
/// state. The vector generators are computed for `max_bits` and a proof of
/// width `n` reads the first `n` of them.
#[derive(Clone)]
pub struct CurveContext<G: CurveGroup> {
    /// Value generator of Pedersen commitments.
    pub g: G,
    /// Blinding generator of Pedersen commitments.
    pub h: G,
    /// Base of the inner-product term in compressed range proofs.
    pub u: G,
    /// Base of ElGamal keys and of encoded plaintexts.
    pub encryption_base: G,
    g_vec: Vec<G>,
    h_vec: Vec<G>,
    hash: TranscriptHash<G::ScalarField>,
}

impl<G> CurveContext<G>
where
    G: CurveGroup,
    G::ScalarField: Absorb,
{
    pub fn new<R: RngCore + CryptoRng>(config: &ContextConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        match config.seed {
            Some(seed) => Self::build(config, &mut ChaCha20Rng::from_seed(seed)),
            None => Self::build(config, rng),
        }
    }

    pub fn from_seed(config: &ContextConfig, seed: [u8; 32]) -> Result<Self> {
        config.validate()?;
        Self::build(config, &mut ChaCha20Rng::from_seed(seed))
    }

    fn build<R: RngCore + CryptoRng>(config: &ContextConfig, rng: &mut R) -> Result<Self> {
        let g = generate_point(rng)?;
        let h = generate_point(rng)?;
        let u = generate_point(rng)?;
        let g_vec = generate_points(config.max_bits, rng)?;
        let h_vec = generate_points(config.max_bits, rng)?;
        let hash = TranscriptHash::new(&config.poseidon)?;
        debug!(
            "built curve context with {} vector generators (seeded: {})",
            config.max_bits,
            config.seed.is_some()
        );
        Ok(Self {
            g,
            h,
            u,
            encryption_base: G::generator(),
            g_vec,
            h_vec,
            hash,
        })
    }
}

impl<G: CurveGroup> CurveContext<G> {
    pub fn capacity(&self) -> usize {
        self.g_vec.len()
    }

    /// First `n` value and blinding vector generators.
    pub fn vector_generators(&self, n: usize) -> Result<(&[G], &[G])> {
        check_bit_width(n, self.capacity())?;
        Ok((&self.g_vec[..n], &self.h_vec[..n]))
    }

    pub fn transcript_hash(&self) -> &TranscriptHash<G::ScalarField> {
        &self.hash
    }

    /// Big-endian bytes of the group order `p`.
    pub fn order(&self) -> Vec<u8> {
        G::ScalarField::MODULUS.to_bytes_be()
    }
}
