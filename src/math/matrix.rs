use serde::{Serialize, Deserialize};
use std::ops::{Add, Mul};

/// Row-major dense matrix used for layer weights and activations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Builds a matrix from row vectors. An empty `data` yields a 0×0 matrix.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, |row| row.len()),
            data,
        }
    }

    /// Single-row matrix, the shape a layer's input takes.
    pub fn row(values: Vec<f64>) -> Matrix {
        Matrix::from_data(vec![values])
    }

    /// True when every row holds exactly `cols` values.
    pub fn is_rectangular(&self) -> bool {
        self.data.len() == self.rows && self.data.iter().all(|row| row.len() == self.cols)
    }

    /// Consumes a single-row matrix and returns that row.
    pub fn into_row(self) -> Vec<f64> {
        self.data.into_iter().next().unwrap_or_default()
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }

        res
    }
}

impl Mul<&Matrix> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        // i-k-j order walks both operands row-wise.
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i][k];
                if a == 0.0 {
                    continue;
                }
                for j in 0..rhs.cols {
                    res.data[i][j] += a * rhs.data[k][j];
                }
            }
        }

        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_times_matrix() {
        let x = Matrix::row(vec![1.0, 2.0]);
        let w = Matrix::from_data(vec![vec![1.0, 0.0, 2.0], vec![0.5, 1.0, -1.0]]);
        let out = x * &w;
        assert_eq!((out.rows, out.cols), (1, 3));
        assert_eq!(out.into_row(), vec![2.0, 2.0, 0.0]);
    }

    #[test]
    fn empty_data_is_zero_sized() {
        let m = Matrix::from_data(vec![]);
        assert_eq!((m.rows, m.cols), (0, 0));
        assert!(m.is_rectangular());
    }

    #[test]
    fn ragged_rows_are_detected() {
        let mut m = Matrix::zeros(2, 2);
        m.data[1].push(3.0);
        assert!(!m.is_rectangular());
    }

    #[test]
    #[should_panic(expected = "incorrect sizes")]
    fn add_rejects_mismatched_shapes() {
        let _ = Matrix::zeros(1, 2) + Matrix::zeros(1, 3);
    }
}
