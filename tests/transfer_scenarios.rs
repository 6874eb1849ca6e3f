use ark_ed_on_bn254::Fr as EncryptionScalar;
use ark_ff::UniformRand;
use ark_std::rand::thread_rng;

use confidential_transfer::{
    ContextConfig, CurveContext, ElGamal, EncryptionGroup, Error, RangeGroup, RangeProofSystem,
    RangeProofSystemImpl, SigmaProtocol, SigmaSystemImpl, Statement, TransferSystem,
    TransferWitness,
};

fn config(max_bits: usize) -> ContextConfig {
    ContextConfig {
        max_bits,
        ..ContextConfig::default()
    }
}

#[test]
fn range_proof_of_130_in_32_bits() {
    let mut rng = thread_rng();
    let context = CurveContext::<RangeGroup>::from_seed(&config(32), [7u8; 32]).unwrap();
    let system = RangeProofSystemImpl::new(&context, 32).unwrap();

    let blinding = ark_bn254::Fr::rand(&mut rng);
    let proof = system.prove(130, &blinding, &mut rng).unwrap();
    system.verify(&proof).unwrap();

    // A verifier rebuilding the context from the same seed agrees.
    let rebuilt = CurveContext::<RangeGroup>::from_seed(&config(32), [7u8; 32]).unwrap();
    RangeProofSystemImpl::new(&rebuilt, 32)
        .unwrap()
        .verify(&proof)
        .unwrap();

    let mut tampered = proof.clone();
    tampered.l[0] -= ark_bn254::Fr::from(1u64);
    assert!(matches!(
        system.verify(&tampered),
        Err(Error::RangeProofInvalid(_))
    ));
}

#[test]
fn joint_sigma_proof_over_transfer_and_remainder() {
    let mut rng = thread_rng();
    let context = CurveContext::<EncryptionGroup>::from_seed(&config(8), [9u8; 32]).unwrap();
    let elgamal = ElGamal::new(context.encryption_base);
    let sender = elgamal.keygen(&mut rng).unwrap();
    let auditor = elgamal.keygen(&mut rng).unwrap();

    let (v, r) = (EncryptionScalar::from(100u64), EncryptionScalar::rand(&mut rng));
    let (b, rb) = (EncryptionScalar::from(200u64), EncryptionScalar::rand(&mut rng));
    let statement = |public_key, ciphertext| Statement::Encryption {
        value_base: elgamal.base,
        base: elgamal.base,
        public_key,
        ciphertext,
    };
    let mut statements = vec![
        statement(sender.public, elgamal.encrypt_value(&sender.public, &v, &r)),
        statement(auditor.public, elgamal.encrypt_value(&auditor.public, &b, &rb)),
    ];

    let sigma = SigmaSystemImpl::new(context.transcript_hash());
    let proof = sigma
        .prove(&statements, &[vec![v, r], vec![b, rb]], &mut rng)
        .unwrap();
    sigma.verify(&statements, &proof).unwrap();
    assert_eq!(sigma.verify_statements(&statements, &proof), vec![true, true]);

    let unrelated = elgamal.encrypt_value(
        &auditor.public,
        &EncryptionScalar::from(200u64),
        &EncryptionScalar::rand(&mut rng),
    );
    statements[1] = statement(auditor.public, unrelated);
    assert_eq!(sigma.verify_statements(&statements, &proof), vec![true, false]);
    assert!(sigma.verify(&statements, &proof).is_err());
}

#[test]
fn transfer_end_to_end() {
    let mut rng = thread_rng();
    let range = CurveContext::<RangeGroup>::from_seed(&config(32), [1u8; 32]).unwrap();
    let encryption = CurveContext::<EncryptionGroup>::from_seed(&config(32), [2u8; 32]).unwrap();
    let system = TransferSystem::new(&range, &encryption, 32).unwrap();
    let elgamal = system.elgamal();
    let counterparty = elgamal.keygen(&mut rng).unwrap();
    let auditor = elgamal.keygen(&mut rng).unwrap();

    let witness = TransferWitness::random(100, 200, &mut rng).unwrap();
    let statement = system.build_statement(&counterparty.public, &auditor.public, &witness);
    let proof = system.prove(&statement, &witness, &mut rng).unwrap();
    system.verify(&statement, &proof).unwrap();

    assert_eq!(
        elgamal.decrypt_amount(counterparty.secret(), &statement.amount_ciphertext, 1 << 10).unwrap(),
        Some(100)
    );
    assert_eq!(
        elgamal.decrypt_amount(auditor.secret(), &statement.balance_ciphertext, 1 << 10).unwrap(),
        Some(200)
    );

    let mut swapped = statement.clone();
    swapped.balance_ciphertext = statement.amount_ciphertext;
    assert_eq!(
        system.verify(&swapped, &proof),
        Err(Error::SigmaChallengeMismatch)
    );
}
