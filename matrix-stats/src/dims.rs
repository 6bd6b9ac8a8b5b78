/// Shape of a row-major `nrows x ncols` matrix stored in a flat
/// buffer. Element `(i, j)` lives at `i * ncols + j`.
///
/// Only [`Dims::new`] builds one, so both sides are at least 1 and
/// `nrows * ncols` fits in `usize`.
///
/// ```compile_fail
/// let dims = matrix_stats::Dims { nrows: 3, ncols: 0 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dims {
    nrows: usize,
    ncols: usize,
}

impl Dims {
    /// * `dim_i` - number of rows (at least 1)
    /// * `dim_j` - number of columns (at least 1)
    pub fn new(dim_i: usize, dim_j: usize) -> anyhow::Result<Self> {
        if dim_i == 0 || dim_j == 0 {
            anyhow::bail!("empty matrix: {} x {}", dim_i, dim_j);
        }
        if dim_i.checked_mul(dim_j).is_none() {
            anyhow::bail!("matrix size overflows: {} x {}", dim_i, dim_j);
        }
        Ok(Dims {
            nrows: dim_i,
            ncols: dim_j,
        })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// number of elements
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nrows * self.ncols
    }

    /// flat offset of the element `(i, j)`
    pub fn offset(&self, i: usize, j: usize) -> usize {
        i * self.ncols + j
    }

    /// Check that `mat` holds exactly `nrows * ncols` elements
    pub fn check_matrix(&self, mat: &[f64]) -> anyhow::Result<()> {
        if mat.len() != self.len() {
            anyhow::bail!(
                "matrix buffer has {} elements, expected {} x {} = {}",
                mat.len(),
                self.nrows,
                self.ncols,
                self.len()
            );
        }
        Ok(())
    }

    /// Check that `vec` holds exactly one value per column
    pub fn check_column_vec(&self, vec: &[f64]) -> anyhow::Result<()> {
        if vec.len() != self.ncols {
            anyhow::bail!(
                "column vector has {} elements, expected {}",
                vec.len(),
                self.ncols
            );
        }
        Ok(())
    }
}

impl std::fmt::Display for Dims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.nrows, self.ncols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_overflow() {
        assert!(Dims::new(0, 3).is_err());
        assert!(Dims::new(3, 0).is_err());
        assert!(Dims::new(usize::MAX, 2).is_err());
        assert!(Dims::new(0, 0).is_err());
    }

    #[test]
    fn row_major_offset() -> anyhow::Result<()> {
        let dims = Dims::new(3, 4)?;
        assert_eq!(dims.len(), 12);
        assert_eq!(dims.offset(0, 3), 3);
        assert_eq!(dims.offset(2, 1), 9);
        assert!(dims.check_matrix(&[0.0; 12]).is_ok());
        assert!(dims.check_matrix(&[0.0; 11]).is_err());
        assert!(dims.check_column_vec(&[0.0; 4]).is_ok());
        assert!(dims.check_column_vec(&[0.0; 3]).is_err());
        Ok(())
    }
}
