use anyhow::Result;
use nalgebra_sparse::{coo::CooMatrix, csr::CsrMatrix};
use num_complex::Complex;

use crate::gates::{h_matrix, ry_matrix, rz_matrix, x_matrix};
use crate::qstate::QState;
use crate::Qbit;

/// A fixed sequence of gates over a register of `num_of_qbits` qubits.
///
/// Gates are expanded to full-register sparse matrices at construction time,
/// so `apply` is a plain chain of sparse matrix-vector products.
pub struct Circuit {
    gates: Vec<CsrMatrix<Qbit>>,
    num_of_qbits: usize,
}

impl Circuit {
    pub fn new(num_of_qbits: usize) -> Self {
        Self {
            gates: Vec::new(),
            num_of_qbits,
        }
    }

    fn check_and_reverse_index(&self, index: usize) -> Result<usize> {
        if index >= self.num_of_qbits {
            return Err(anyhow::anyhow!(
                "Index out of bounds for the number of qubits {}",
                self.num_of_qbits
            ));
        }
        Ok(self.num_of_qbits - 1 - index)
    }

    fn create_gate_for_index(
        &self,
        index: usize,
        gate: &CsrMatrix<Qbit>,
    ) -> Result<CsrMatrix<Qbit>> {
        let index = self.check_and_reverse_index(index)?;

        let mut matrix = CsrMatrix::identity(1);
        for i in 0..self.num_of_qbits {
            if i == index {
                matrix = kronecker_product(&matrix, gate);
            } else {
                matrix = kronecker_product(&matrix, &CsrMatrix::identity(2));
            }
        }

        Ok(matrix)
    }

    pub fn sparse_gate_at(mut self, index: usize, gate: CsrMatrix<Qbit>) -> Result<Self> {
        let gate = self.create_gate_for_index(index, &gate)?;
        self.gates.push(gate);
        Ok(self)
    }

    #[allow(non_snake_case)]
    pub fn H(self, index: usize) -> Result<Self> {
        self.sparse_gate_at(index, h_matrix())
    }

    #[allow(non_snake_case)]
    pub fn X(self, index: usize) -> Result<Self> {
        self.sparse_gate_at(index, x_matrix())
    }

    #[allow(non_snake_case)]
    pub fn RY(self, index: usize, angle: f64) -> Result<Self> {
        self.sparse_gate_at(index, ry_matrix(angle))
    }

    #[allow(non_snake_case)]
    pub fn RZ(self, index: usize, angle: f64) -> Result<Self> {
        self.sparse_gate_at(index, rz_matrix(angle))
    }

    pub fn control(
        mut self,
        control: usize,
        target: usize,
        gate: &CsrMatrix<Qbit>,
    ) -> Result<Self> {
        let control = self.check_and_reverse_index(control)?;
        let target = self.check_and_reverse_index(target)?;

        if control == target {
            return Err(anyhow::anyhow!(
                "Control and target qubits cannot be the same"
            ));
        }

        // |0><0|
        let mut zero_zero = CooMatrix::new(2, 2);
        zero_zero.push(0, 0, Complex::new(1.0, 0.0));
        let zero_zero = CsrMatrix::from(&zero_zero);

        // |1><1|
        let mut one_one = CooMatrix::new(2, 2);
        one_one.push(1, 1, Complex::new(1.0, 0.0));
        let one_one = CsrMatrix::from(&one_one);

        let id = CsrMatrix::identity(2);

        let mut zero_matrix = CsrMatrix::identity(1);
        let mut one_matrix = CsrMatrix::identity(1);
        for i in 0..self.num_of_qbits {
            if i == control {
                zero_matrix = kronecker_product(&zero_matrix, &zero_zero);
                one_matrix = kronecker_product(&one_matrix, &one_one);
            } else if i == target {
                zero_matrix = kronecker_product(&zero_matrix, &id);
                one_matrix = kronecker_product(&one_matrix, gate);
            } else {
                zero_matrix = kronecker_product(&zero_matrix, &id);
                one_matrix = kronecker_product(&one_matrix, &id);
            }
        }

        self.gates.push(zero_matrix + one_matrix);
        Ok(self)
    }

    pub fn cnot(self, control: usize, target: usize) -> Result<Self> {
        self.control(control, target, &x_matrix())
    }

    pub fn apply(&self, state: &QState) -> QState {
        let mut result = state.state.clone();
        for gate in &self.gates {
            result = gate * result;
        }
        QState { state: result }
    }
}

pub fn kronecker_product(x: &CsrMatrix<Qbit>, y: &CsrMatrix<Qbit>) -> CsrMatrix<Qbit> {
    let mut result = CooMatrix::new(x.nrows() * y.nrows(), x.ncols() * y.ncols());

    for (rx, cx, value_x) in x.triplet_iter() {
        for (ry, cy, value_y) in y.triplet_iter() {
            let new_row = rx * y.nrows() + ry;
            let new_col = cx * y.ncols() + cy;
            let new_value = value_x * value_y;
            result.push(new_row, new_col, new_value);
        }
    }

    CsrMatrix::from(&result)
}
