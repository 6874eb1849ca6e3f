//! Proof engine for confidential transfers: homomorphic ElGamal, Pedersen
//! commitments, bit-decomposition range proofs and Fiat-Shamir sigma
//! protocols over one prime-order group abstraction.

pub mod algebra;
pub mod bulletproofs;
pub mod context;
pub mod elgamal;
pub mod error;
pub mod pedersen;
pub mod sigma;
pub mod transcript;
pub mod transfer;

pub use bulletproofs::{
    CompactRangeProof, CompactRangeProofSystemImpl, RangeProof, RangeProofSystem,
    RangeProofSystemImpl,
};
pub use context::{ContextConfig, CurveContext};
pub use elgamal::{Ciphertext, ElGamal, Keypair};
pub use error::{Error, Result};
pub use sigma::{SigmaProof, SigmaProtocol, SigmaSystemImpl, Statement};
pub use transcript::{Transcript, TranscriptHash, VerifierChallenger};
pub use transfer::{PublicInputs, TransferProof, TransferStatement, TransferSystem, TransferWitness};

/// Group of Pedersen commitments and range proofs.
pub type RangeGroup = ark_bn254::G1Projective;
/// Group of ElGamal keys, ciphertexts and sigma proofs: the twisted Edwards
/// curve embedded in BN254, whose base field is the BN254 scalar field.
pub type EncryptionGroup = ark_ed_on_bn254::EdwardsProjective;
