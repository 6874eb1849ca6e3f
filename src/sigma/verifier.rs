use ark_ec::CurveGroup;

use super::Statement;

pub mod verifier {
    use log::debug;

    use super::*;

    /// `φ(responses) == commitment + challenge·image`, component-wise.
    /// Malformed lengths are a failed check.
    pub fn verify_statement<G: CurveGroup>(
        statement: &Statement<G>,
        responses: &[G::ScalarField],
        challenge: &G::ScalarField,
        commitment: &[G],
    ) -> bool {
        let image = statement.image();
        if commitment.len() != image.len() {
            debug!(
                "sigma commitment has {} points, statement needs {}",
                commitment.len(),
                image.len()
            );
            return false;
        }
        let Ok(lhs) = statement.evaluate(responses) else {
            debug!("sigma response has {} scalars", responses.len());
            return false;
        };
        lhs.iter()
            .zip(commitment.iter().zip(image.iter()))
            .all(|(l, (t, y))| *l == *t + *y * challenge)
    }
}
