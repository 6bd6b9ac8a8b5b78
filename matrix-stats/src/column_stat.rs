//! Column-wise statistics of a row-major matrix held in a flat buffer.
//!
//! Every function reads and writes caller-owned slices; nothing here
//! allocates matrix storage. Statistics are computed first and then
//! handed to the transforms:
//!
//! ```
//! use matrix_stats::column_stat::*;
//! use matrix_stats::Dims;
//!
//! let dims = Dims::new(3, 2).unwrap();
//! let xx = [1., 2., 3., 4., 5., 6.];
//! let mut mu = [0.; 2];
//! let mut sig = [0.; 2];
//! column_mean(&xx, dims, &mut mu).unwrap();
//! column_std(&xx, &mu, dims, &mut sig).unwrap();
//! assert_eq!(mu, [3., 4.]);
//! assert_eq!(sig, [2., 2.]);
//! ```

use crate::dims::Dims;
use log::warn;

/// Mean of each column
///
/// `mean[j] = sum_i mat[i, j] / dim_i`
///
/// * `mat` - `dim_i x dim_j` matrix
/// * `dims` - shape of `mat`
/// * `mean` - (out) one value per column
pub fn column_mean(mat: &[f64], dims: Dims, mean: &mut [f64]) -> anyhow::Result<()> {
    dims.check_matrix(mat)?;
    dims.check_column_vec(mean)?;

    mean.fill(0.0);
    for row in mat.chunks_exact(dims.ncols()) {
        for (m_j, x_j) in mean.iter_mut().zip(row) {
            *m_j += x_j;
        }
    }

    let nn = dims.nrows() as f64;
    mean.iter_mut().for_each(|m_j| *m_j /= nn);
    Ok(())
}

/// Sample standard deviation of each column (divisor `dim_i - 1`)
///
/// The mean is taken as given and not recomputed, so it has to come
/// from [`column_mean`] on the same matrix. A single-row matrix has
/// no spread to estimate and yields `NaN` in every column.
///
/// * `mat` - `dim_i x dim_j` matrix
/// * `mean` - column means of `mat`
/// * `dims` - shape of `mat`
/// * `std` - (out) one value per column
pub fn column_std(mat: &[f64], mean: &[f64], dims: Dims, std: &mut [f64]) -> anyhow::Result<()> {
    dims.check_matrix(mat)?;
    dims.check_column_vec(mean)?;
    dims.check_column_vec(std)?;

    if dims.nrows() < 2 {
        warn!("standard deviation over {} row(s) is undefined", dims.nrows());
    }

    std.fill(0.0);
    for row in mat.chunks_exact(dims.ncols()) {
        for ((s_j, x_j), m_j) in std.iter_mut().zip(row).zip(mean) {
            let d = x_j - m_j;
            *s_j += d * d;
        }
    }

    let denom = (dims.nrows() - 1) as f64;
    std.iter_mut().for_each(|s_j| *s_j = (*s_j / denom).sqrt());
    Ok(())
}

/// Subtract the column mean from every element
///
/// `out[i, j] = mat[i, j] - mean[j]`
pub fn remove_column_mean(
    mat: &[f64],
    mean: &[f64],
    dims: Dims,
    out: &mut [f64],
) -> anyhow::Result<()> {
    dims.check_matrix(mat)?;
    dims.check_matrix(out)?;
    dims.check_column_vec(mean)?;

    for (out_row, row) in out
        .chunks_exact_mut(dims.ncols())
        .zip(mat.chunks_exact(dims.ncols()))
    {
        for ((y, x), m) in out_row.iter_mut().zip(row).zip(mean) {
            *y = x - m;
        }
    }
    Ok(())
}

/// Same as [`remove_column_mean`], overwriting `mat`. Each element
/// only depends on itself, so centering in place is safe.
pub fn remove_column_mean_inplace(
    mat: &mut [f64],
    mean: &[f64],
    dims: Dims,
) -> anyhow::Result<()> {
    dims.check_matrix(mat)?;
    dims.check_column_vec(mean)?;

    for row in mat.chunks_exact_mut(dims.ncols()) {
        for (x, m) in row.iter_mut().zip(mean) {
            *x -= m;
        }
    }
    Ok(())
}

/// Standardize each column
///
/// `out[i, j] = (mat[i, j] - mean[j]) / std[j]`
///
/// Columns with no positive spread (`std[j] <= 0` or `NaN`) are only
/// centred.
pub fn scale_columns(
    mat: &[f64],
    mean: &[f64],
    std: &[f64],
    dims: Dims,
    out: &mut [f64],
) -> anyhow::Result<()> {
    dims.check_matrix(mat)?;
    dims.check_matrix(out)?;
    out.copy_from_slice(mat);
    scale_columns_inplace(out, mean, std, dims)
}

/// Same as [`scale_columns`], overwriting `mat`
pub fn scale_columns_inplace(
    mat: &mut [f64],
    mean: &[f64],
    std: &[f64],
    dims: Dims,
) -> anyhow::Result<()> {
    dims.check_matrix(mat)?;
    dims.check_column_vec(mean)?;
    dims.check_column_vec(std)?;

    for row in mat.chunks_exact_mut(dims.ncols()) {
        for ((x, m), s) in row.iter_mut().zip(mean).zip(std) {
            if *s > 0.0 {
                *x = (*x - m) / s;
            } else {
                *x -= m;
            }
        }
    }
    Ok(())
}
