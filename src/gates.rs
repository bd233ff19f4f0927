use nalgebra::Matrix2;
use nalgebra_sparse::convert::serial::convert_dense_coo;
use nalgebra_sparse::{coo::CooMatrix, csr::CsrMatrix};
use num_complex::Complex;

use crate::Qbit;

pub fn h_matrix() -> CsrMatrix<Qbit> {
    let root2 = 2.0_f64.sqrt();
    let one = Complex::new(1.0, 0.0);
    let hadamard_coo = convert_dense_coo(&Matrix2::from_row_slice(&[
        one / root2,
        one / root2,
        one / root2,
        -one / root2,
    ]));
    CsrMatrix::from(&hadamard_coo)
}

pub fn x_matrix() -> CsrMatrix<Qbit> {
    let mut x_coo = CooMatrix::new(2, 2);
    x_coo.push(0, 1, Complex::new(1.0, 0.0));
    x_coo.push(1, 0, Complex::new(1.0, 0.0));
    CsrMatrix::from(&x_coo)
}

pub fn ry_matrix(angle: f64) -> CsrMatrix<Qbit> {
    let half = angle / 2.0;
    let ry_coo = convert_dense_coo(&Matrix2::from_row_slice(&[
        Complex::new(half.cos(), 0.0),
        Complex::new(-half.sin(), 0.0),
        Complex::new(half.sin(), 0.0),
        Complex::new(half.cos(), 0.0),
    ]));
    CsrMatrix::from(&ry_coo)
}

pub fn rz_matrix(angle: f64) -> CsrMatrix<Qbit> {
    let half = angle / 2.0;
    let mut rz_coo = CooMatrix::new(2, 2);
    rz_coo.push(0, 0, Complex::from_polar(1.0, -half));
    rz_coo.push(1, 1, Complex::from_polar(1.0, half));
    CsrMatrix::from(&rz_coo)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::assert_approx_complex_eq;

    #[test]
    fn test_x_matrix_flips_basis() {
        let x = x_matrix();

        assert_approx_complex_eq!(0.0, 0.0, x.get_entry(0, 0).unwrap().into_value());
        assert_approx_complex_eq!(1.0, 0.0, x.get_entry(0, 1).unwrap().into_value());
        assert_approx_complex_eq!(1.0, 0.0, x.get_entry(1, 0).unwrap().into_value());
        assert_approx_complex_eq!(0.0, 0.0, x.get_entry(1, 1).unwrap().into_value());
    }

    #[test]
    fn test_ry_pi_equals_minus_i_y() {
        // RY(PI) maps |0> -> |1> and |1> -> -|0>
        let ry = ry_matrix(PI);

        assert_approx_complex_eq!(0.0, 0.0, ry.get_entry(0, 0).unwrap().into_value());
        assert_approx_complex_eq!(-1.0, 0.0, ry.get_entry(0, 1).unwrap().into_value());
        assert_approx_complex_eq!(1.0, 0.0, ry.get_entry(1, 0).unwrap().into_value());
        assert_approx_complex_eq!(0.0, 0.0, ry.get_entry(1, 1).unwrap().into_value());
    }

    #[test]
    fn test_rz_diagonal_phases() {
        let rz = rz_matrix(0.2);

        assert_approx_complex_eq!(
            (0.1_f64).cos(),
            -(0.1_f64).sin(),
            rz.get_entry(0, 0).unwrap().into_value()
        );
        assert_approx_complex_eq!(
            (0.1_f64).cos(),
            (0.1_f64).sin(),
            rz.get_entry(1, 1).unwrap().into_value()
        );
    }

    #[test]
    fn test_hadamard_is_self_inverse() {
        let h = h_matrix();
        let hh = &h * &h;

        assert_approx_complex_eq!(1.0, 0.0, hh.get_entry(0, 0).unwrap().into_value());
        assert_approx_complex_eq!(0.0, 0.0, hh.get_entry(0, 1).unwrap().into_value());
        assert_approx_complex_eq!(0.0, 0.0, hh.get_entry(1, 0).unwrap().into_value());
        assert_approx_complex_eq!(1.0, 0.0, hh.get_entry(1, 1).unwrap().into_value());
    }
}
