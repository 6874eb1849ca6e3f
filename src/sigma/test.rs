use ark_ed_on_bn254::{EdwardsProjective as Point, Fr as Scalar};
use ark_ff::{PrimeField, UniformRand};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::thread_rng;

use super::{
    commit, nonce, respond, verify_statement, SigmaProof, SigmaProtocol, SigmaSystemImpl,
    Statement,
};
use crate::context::{ContextConfig, CurveContext};
use crate::elgamal::ElGamal;
use crate::error::Error;
use crate::pedersen::generate_point;
use crate::transcript::{Transcript, VerifierChallenger};

pub struct ConstantChallenger<S: PrimeField> {
    constant: S,
}

impl<S: PrimeField> VerifierChallenger<S> for ConstantChallenger<S> {
    fn generate_challenge(&self, _transcript: &Transcript, _label: &'static [u8]) -> S {
        self.constant
    }
}

fn setup_context() -> CurveContext<Point> {
    let config = ContextConfig {
        max_bits: 8,
        ..ContextConfig::default()
    };
    CurveContext::from_seed(&config, [3u8; 32]).unwrap()
}

/// A transfer-encryption and a remainder-encryption statement with their
/// witnesses `(100, r)` and `(200, rb)`.
fn transfer_statements(
    context: &CurveContext<Point>,
) -> (Vec<Statement<Point>>, Vec<Vec<Scalar>>) {
    let mut rng = thread_rng();
    let elgamal = ElGamal::new(context.encryption_base);
    let counterparty = elgamal.keygen(&mut rng).unwrap();
    let auditor = elgamal.keygen(&mut rng).unwrap();
    let trans_base: Point = generate_point(&mut rng).unwrap();

    let (v, r) = (Scalar::from(100u64), Scalar::rand(&mut rng));
    let (b, rb) = (Scalar::from(200u64), Scalar::rand(&mut rng));
    let amount = elgamal.encrypt_value(&counterparty.public, &v, &r);
    let remainder = elgamal.encrypt(&auditor.public, &(trans_base * b), &rb);

    let statements = vec![
        Statement::Encryption {
            value_base: elgamal.base,
            base: elgamal.base,
            public_key: counterparty.public,
            ciphertext: amount,
        },
        Statement::Encryption {
            value_base: trans_base,
            base: elgamal.base,
            public_key: auditor.public,
            ciphertext: remainder,
        },
    ];
    (statements, vec![vec![v, r], vec![b, rb]])
}

#[test]
fn test_transfer_statements_round_trip() {
    let mut rng = thread_rng();
    let context = setup_context();
    let system = SigmaSystemImpl::new(context.transcript_hash());
    let (statements, witnesses) = transfer_statements(&context);

    let proof = system.prove(&statements, &witnesses, &mut rng).unwrap();
    assert_eq!(proof.commitments.len(), 2);
    assert_eq!(proof.responses[0].len(), 2);
    system.verify(&statements, &proof).unwrap();
    assert_eq!(system.verify_statements(&statements, &proof), vec![true, true]);
}

#[test]
fn test_mutated_response_is_rejected() {
    let mut rng = thread_rng();
    let context = setup_context();
    let system = SigmaSystemImpl::new(context.transcript_hash());
    let (statements, witnesses) = transfer_statements(&context);
    let proof = system.prove(&statements, &witnesses, &mut rng).unwrap();

    for i in 0..2 {
        for j in 0..2 {
            let mut bad = proof.clone();
            bad.responses[i][j] += Scalar::from(1u64);
            assert_eq!(
                system.verify(&statements, &bad),
                Err(Error::SigmaProofInvalid { statement: i })
            );
        }
    }
}

#[test]
fn test_swapped_ciphertext_fails_only_its_statement() {
    let mut rng = thread_rng();
    let context = setup_context();
    let system = SigmaSystemImpl::new(context.transcript_hash());
    let (statements, witnesses) = transfer_statements(&context);
    let proof = system.prove(&statements, &witnesses, &mut rng).unwrap();

    let elgamal = ElGamal::new(context.encryption_base);
    let stranger = elgamal.keygen(&mut rng).unwrap();
    let unrelated = elgamal.encrypt_value(
        &stranger.public,
        &Scalar::from(200u64),
        &Scalar::rand(&mut rng),
    );
    let mut swapped = statements.clone();
    if let Statement::Encryption { ciphertext, .. } = &mut swapped[1] {
        *ciphertext = unrelated;
    }

    assert_eq!(system.verify_statements(&swapped, &proof), vec![true, false]);
    assert_eq!(
        system.verify(&swapped, &proof),
        Err(Error::SigmaChallengeMismatch)
    );
}

#[test]
fn test_tampered_commitment_changes_challenge() {
    let mut rng = thread_rng();
    let context = setup_context();
    let system = SigmaSystemImpl::new(context.transcript_hash());
    let (statements, witnesses) = transfer_statements(&context);
    let mut proof = system.prove(&statements, &witnesses, &mut rng).unwrap();

    proof.commitments[0][1] += context.encryption_base;
    assert_eq!(
        system.verify(&statements, &proof),
        Err(Error::SigmaChallengeMismatch)
    );
}

#[test]
fn test_missing_statement_is_rejected() {
    let mut rng = thread_rng();
    let context = setup_context();
    let system = SigmaSystemImpl::new(context.transcript_hash());
    let (statements, witnesses) = transfer_statements(&context);
    let mut proof = system.prove(&statements, &witnesses, &mut rng).unwrap();

    proof.responses.pop();
    assert_eq!(
        system.verify(&statements, &proof),
        Err(Error::SigmaProofInvalid { statement: 1 })
    );
    assert_eq!(system.verify_statements(&statements, &proof), vec![true, false]);
}

#[test]
fn test_false_witness_is_refused() {
    let mut rng = thread_rng();
    let context = setup_context();
    let system = SigmaSystemImpl::new(context.transcript_hash());
    let (statements, mut witnesses) = transfer_statements(&context);

    witnesses[0][0] = Scalar::from(101u64);
    assert!(matches!(
        system.prove(&statements, &witnesses, &mut rng),
        Err(Error::InvalidParameters(_))
    ));

    witnesses[0].pop();
    assert!(matches!(
        system.prove(&statements, &witnesses, &mut rng),
        Err(Error::DimensionMismatch { .. })
    ));
}

#[test]
fn test_engine_steps_with_constant_challenge() {
    let mut rng = thread_rng();
    let g: Point = generate_point(&mut rng).unwrap();
    let h: Point = generate_point(&mut rng).unwrap();
    let (v, r) = (Scalar::from(42u64), Scalar::rand(&mut rng));
    let statement = Statement::Opening {
        g,
        h,
        commitment: g * v + h * r,
    };

    let nonces: Vec<Scalar> = vec![nonce(&mut rng).unwrap(), nonce(&mut rng).unwrap()];
    let commitment = commit(&statement, &nonces).unwrap();
    let c = ConstantChallenger {
        constant: Scalar::from(5u64),
    }
    .generate_challenge(&Transcript::new(b"unused"), b"c");
    let responses = vec![respond(&nonces[0], &c, &v), respond(&nonces[1], &c, &r)];

    assert_eq!(responses[0], nonces[0] + Scalar::from(5u64) * v);
    assert!(verify_statement(&statement, &responses, &c, &commitment));
    assert!(!verify_statement(&statement, &responses, &(c + Scalar::from(1u64)), &commitment));
    assert!(!verify_statement(&statement, &responses[..1], &c, &commitment));
}

#[test]
fn test_discrete_log_and_opening_with_constant_challenger() {
    let mut rng = thread_rng();
    let system = SigmaSystemImpl::with_challenger(ConstantChallenger {
        constant: Scalar::from(9u64),
    });
    let base: Point = generate_point(&mut rng).unwrap();
    let h: Point = generate_point(&mut rng).unwrap();
    let (x, v, r) = (
        Scalar::rand(&mut rng),
        Scalar::rand(&mut rng),
        Scalar::rand(&mut rng),
    );
    let statements = vec![
        Statement::DiscreteLog {
            base,
            image: base * x,
        },
        Statement::Opening {
            g: base,
            h,
            commitment: base * v + h * r,
        },
    ];

    let proof = system
        .prove(&statements, &[vec![x], vec![v, r]], &mut rng)
        .unwrap();
    assert_eq!(proof.challenge, Scalar::from(9u64));
    system.verify(&statements, &proof).unwrap();
}

#[test]
fn test_sigma_proof_serialization() {
    let mut rng = thread_rng();
    let context = setup_context();
    let system = SigmaSystemImpl::new(context.transcript_hash());
    let (statements, witnesses) = transfer_statements(&context);
    let proof = system.prove(&statements, &witnesses, &mut rng).unwrap();

    let mut bytes = Vec::new();
    proof.serialize_compressed(&mut bytes).unwrap();
    let decoded = SigmaProof::<Point>::deserialize_compressed(&bytes[..]).unwrap();
    assert_eq!(decoded, proof);
    system.verify(&statements, &decoded).unwrap();
}
