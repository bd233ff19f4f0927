use std::collections::BTreeMap;
use std::f64::consts::FRAC_PI_4;

use anyhow::Result;
use rand::Rng;

use crate::circuit::Circuit;
use crate::qstate::QState;
use crate::sampler::sample_bits;

/// Immutable simulator device configuration, fixed at process startup.
#[derive(Debug, Clone, Copy)]
pub struct DeviceConfig {
    pub wires: usize,
    pub shots: usize,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            wires: 2,
            shots: 1000,
        }
    }
}

/// The message bit selecting one of the two circuit variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageBit {
    Zero,
    One,
}

impl MessageBit {
    pub fn value(self) -> u8 {
        match self {
            MessageBit::Zero => 0,
            MessageBit::One => 1,
        }
    }
}

impl TryFrom<i64> for MessageBit {
    type Error = anyhow::Error;

    fn try_from(bit: i64) -> Result<Self> {
        match bit {
            0 => Ok(MessageBit::Zero),
            1 => Ok(MessageBit::One),
            other => Err(anyhow::anyhow!("Message bit must be 0 or 1, got {other}")),
        }
    }
}

/// Build the fixed mirror-encryption circuit for one message bit.
///
/// The bit flip on qubit 0 is conditional; the entangling sequence and the
/// two rotations are the same for both variants.
pub fn mirror_circuit(bit: MessageBit, device: &DeviceConfig) -> Result<Circuit> {
    let circuit = Circuit::new(device.wires);
    let circuit = match bit {
        MessageBit::One => circuit.X(0)?,
        MessageBit::Zero => circuit,
    };

    circuit
        .H(1)?
        .cnot(1, 0)?
        .RZ(0, 0.2)?
        .RY(1, FRAC_PI_4)
}

/// Run the circuit for `device.shots` trials and return the sampled
/// `[q0, q1]` outcome pairs in shot order.
pub fn run_shots(
    bit: MessageBit,
    device: &DeviceConfig,
    rng: &mut impl Rng,
) -> Result<Vec<Vec<u8>>> {
    let circuit = mirror_circuit(bit, device)?;
    let final_state = circuit.apply(&QState::zero_state(device.wires));

    Ok(sample_bits(&final_state, device.shots, rng))
}

/// Normalized outcome frequencies keyed by bit-concatenation ("01"),
/// rounded to 4 decimal places. Only observed outcomes appear.
pub fn outcome_distribution(samples: &[Vec<u8>]) -> BTreeMap<String, f64> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for outcome in samples {
        let key: String = outcome.iter().map(|bit| char::from(b'0' + bit)).collect();
        *counts.entry(key).or_insert(0) += 1;
    }

    let total = samples.len() as f64;
    counts
        .into_iter()
        .map(|(key, count)| (key, round4(count as f64 / total)))
        .collect()
}

/// Shannon entropy (base 2) of the distribution, rounded to 4 decimal
/// places. Zero-probability entries are skipped; log2(0) is undefined.
pub fn shannon_entropy(distribution: &BTreeMap<String, f64>) -> f64 {
    let entropy = -distribution
        .values()
        .filter(|&&p| p > 0.0)
        .map(|p| p * p.log2())
        .sum::<f64>();

    round4(entropy)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
