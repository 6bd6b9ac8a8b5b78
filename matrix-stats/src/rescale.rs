use crate::dims::Dims;

/// Row addressing used by [`rescale_inplace_with`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowStride {
    /// write `(i, j)` back to `i * dim_j + j`
    #[default]
    Consistent,
    /// write `(i, j)` to `i * dim_i + j`, reproducing older output;
    /// identical to `Consistent` only for square matrices
    Legacy,
}

/// Stretch a standardized matrix to a target mean and standard
/// deviation: `x <- x * new_stddev + new_mean` for every element.
///
/// The transform is global, not per column.
pub fn rescale_inplace(
    mat: &mut [f64],
    new_mean: f64,
    new_stddev: f64,
    dims: Dims,
) -> anyhow::Result<()> {
    dims.check_matrix(mat)?;
    mat.iter_mut().for_each(|x| *x = *x * new_stddev + new_mean);
    Ok(())
}

/// Rescale with the row stride `dim_i` on the write side
///
/// `mat[i * dim_i + j] <- mat[i * dim_j + j] * new_stddev + new_mean`
///
/// Non-square shapes read and write different cells, and a tall matrix
/// would write past the end of the buffer; that case is rejected before
/// anything is modified.
pub fn rescale_inplace_legacy(
    mat: &mut [f64],
    new_mean: f64,
    new_stddev: f64,
    dims: Dims,
) -> anyhow::Result<()> {
    let (dim_i, dim_j) = (dims.nrows(), dims.ncols());
    let last = match (dim_i - 1)
        .checked_mul(dim_i)
        .and_then(|n| n.checked_add(dim_j - 1))
    {
        Some(last) => last,
        None => anyhow::bail!("legacy row stride overflows for a {} matrix", dims),
    };

    dims.check_matrix(mat)?;
    if last >= mat.len() {
        anyhow::bail!(
            "legacy row stride writes offset {} outside a {} matrix",
            last,
            dims
        );
    }

    for i in 0..dim_i {
        for j in 0..dim_j {
            mat[i * dim_i + j] = mat[dims.offset(i, j)] * new_stddev + new_mean;
        }
    }
    Ok(())
}

/// Dispatch on `stride`
pub fn rescale_inplace_with(
    mat: &mut [f64],
    new_mean: f64,
    new_stddev: f64,
    dims: Dims,
    stride: RowStride,
) -> anyhow::Result<()> {
    match stride {
        RowStride::Consistent => rescale_inplace(mat, new_mean, new_stddev, dims),
        RowStride::Legacy => rescale_inplace_legacy(mat, new_mean, new_stddev, dims),
    }
}
