use rand::Rng;

use crate::qstate::QState;

/// Draw `shots` independent measurements of every qubit in the computational
/// basis.
///
/// Each outcome is the list of per-qubit bits `[q0, q1, ...]`. Sampling the
/// final state vector once per shot is equivalent to re-running the circuit
/// and measuring, since shots are independent trials of the same circuit.
pub fn sample_bits(state: &QState, shots: usize, rng: &mut impl Rng) -> Vec<Vec<u8>> {
    let probs = state.probabilities();
    let num_of_qbits = state.num_of_qbits();

    (0..shots)
        .map(|_| {
            let index = sample_index(&probs, rng.random::<f64>());
            decode_bits(index, num_of_qbits)
        })
        .collect()
}

/// Inverse-CDF draw of a basis-state index.
fn sample_index(probs: &[f64], r: f64) -> usize {
    let mut acc = 0.0;
    for (index, p) in probs.iter().enumerate() {
        acc += p;
        if r < acc {
            return index;
        }
    }
    // r fell into the accumulated rounding slack; the last state takes it.
    probs.len() - 1
}

/// Qubit `q` carries basis weight `2^q`.
fn decode_bits(index: usize, num_of_qbits: usize) -> Vec<u8> {
    (0..num_of_qbits)
        .map(|q| ((index >> q) & 1) as u8)
        .collect()
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::circuit::Circuit;

    #[test]
    fn test_decode_bits() {
        assert_eq!(decode_bits(0b00, 2), vec![0, 0]);
        assert_eq!(decode_bits(0b01, 2), vec![1, 0]);
        assert_eq!(decode_bits(0b10, 2), vec![0, 1]);
        assert_eq!(decode_bits(0b11, 2), vec![1, 1]);
    }

    #[test]
    fn test_sample_index_boundaries() {
        let probs = [0.25, 0.25, 0.25, 0.25];
        assert_eq!(sample_index(&probs, 0.0), 0);
        assert_eq!(sample_index(&probs, 0.3), 1);
        assert_eq!(sample_index(&probs, 0.99), 3);
        // Accumulated float error can leave a sliver above the last boundary
        assert_eq!(sample_index(&probs, 1.0), 3);
    }

    #[test]
    fn test_basis_state_always_samples_itself() {
        let qstate = QState::from_str("10").unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for outcome in sample_bits(&qstate, 100, &mut rng) {
            assert_eq!(outcome, vec![0, 1]);
        }
    }

    #[test]
    fn test_bell_state_samples_are_correlated() -> Result<()> {
        let q00 = QState::from_str("00").unwrap();
        let bell = Circuit::new(2).H(0)?.cnot(0, 1)?.apply(&q00);
        let mut rng = StdRng::seed_from_u64(42);

        let samples = sample_bits(&bell, 500, &mut rng);
        assert_eq!(samples.len(), 500);
        for outcome in &samples {
            assert_eq!(outcome[0], outcome[1]);
        }

        Ok(())
    }
}
