use ark_ec::CurveGroup;
use ark_ff::PrimeField;

use super::TransferStatement;
use crate::algebra::{scalar_to_base_field, x_coordinate};
use crate::elgamal::Ciphertext;
use crate::sigma::SigmaProof;

/// Field elements handed to an external circuit, in a fixed order: the `X`
/// coordinate of every point and the embedding of every scalar into the
/// circuit field.
pub trait PublicInputs<F: PrimeField> {
    fn public_inputs(&self) -> Vec<F>;
}

impl<E> PublicInputs<E::BaseField> for Ciphertext<E>
where
    E: CurveGroup,
    E::BaseField: PrimeField,
{
    fn public_inputs(&self) -> Vec<E::BaseField> {
        vec![x_coordinate(&self.a), x_coordinate(&self.b)]
    }
}

/// Commitments, then responses, then the challenge.
impl<E> PublicInputs<E::BaseField> for SigmaProof<E>
where
    E: CurveGroup,
    E::BaseField: PrimeField,
{
    fn public_inputs(&self) -> Vec<E::BaseField> {
        let points = self.commitments.iter().flatten().map(x_coordinate);
        let scalars = self
            .responses
            .iter()
            .flatten()
            .chain(std::iter::once(&self.challenge))
            .map(scalar_to_base_field::<E::ScalarField, E::BaseField>);
        points.chain(scalars).collect()
    }
}

/// The encryption side of a transfer: keys, then ciphertexts.
impl<R, E> PublicInputs<E::BaseField> for TransferStatement<R, E>
where
    R: CurveGroup,
    E: CurveGroup,
    E::BaseField: PrimeField,
{
    fn public_inputs(&self) -> Vec<E::BaseField> {
        let mut inputs = vec![x_coordinate(&self.counterparty), x_coordinate(&self.auditor)];
        inputs.extend(self.amount_ciphertext.public_inputs());
        inputs.extend(self.balance_ciphertext.public_inputs());
        inputs
    }
}
