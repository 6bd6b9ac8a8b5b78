use approx::assert_abs_diff_eq;
use matrix_stats::column_stat::*;
use matrix_stats::rescale::*;
use matrix_stats::Dims;

#[test]
fn rescale_is_global_affine() -> anyhow::Result<()> {
    let dims = Dims::new(2, 3)?;
    let mut xx = [-1., 0., 1., 2., -2., 0.5];
    rescale_inplace(&mut xx, 10., 2., dims)?;
    assert_abs_diff_eq!(
        &xx[..],
        &[8., 10., 12., 14., 6., 11.][..],
        epsilon = 1e-12
    );
    Ok(())
}

#[test]
fn standardize_then_rescale() -> anyhow::Result<()> {
    let dims = Dims::new(4, 2)?;
    let xx = [1., 10., 2., 20., 3., 30., 4., 40.];

    let mut mu = [0.; 2];
    let mut sig = [0.; 2];
    column_mean(&xx, dims, &mut mu)?;
    column_std(&xx, &mu, dims, &mut sig)?;

    let mut zz = [0.; 8];
    scale_columns(&xx, &mu, &sig, dims, &mut zz)?;
    rescale_inplace(&mut zz, 5., 3., dims)?;

    column_mean(&zz, dims, &mut mu)?;
    column_std(&zz, &mu, dims, &mut sig)?;
    assert_abs_diff_eq!(&mu[..], &[5., 5.][..], epsilon = 1e-12);
    assert_abs_diff_eq!(&sig[..], &[3., 3.][..], epsilon = 1e-12);
    Ok(())
}

#[test]
fn legacy_stride_matches_on_square() -> anyhow::Result<()> {
    let dims = Dims::new(3, 3)?;
    let xx = [0.5, -1., 2., 3., 0., -0.25, 1., 1.5, -2.];

    let mut consistent = xx;
    let mut legacy = xx;
    rescale_inplace_with(&mut consistent, 1., 4., dims, RowStride::Consistent)?;
    rescale_inplace_with(&mut legacy, 1., 4., dims, RowStride::Legacy)?;
    assert_eq!(consistent, legacy);
    Ok(())
}

#[test]
fn legacy_stride_on_wide_matrix() -> anyhow::Result<()> {
    // 2 x 3: row 1 is read from offsets 3..6 but written to 2..5
    let dims = Dims::new(2, 3)?;
    let mut xx = [1., 2., 3., 4., 5., 6.];
    rescale_inplace_legacy(&mut xx, 0., 10., dims)?;
    assert_eq!(xx, [10., 20., 40., 50., 60., 6.]);
    Ok(())
}

#[test]
fn legacy_stride_rejects_tall_matrix() -> anyhow::Result<()> {
    let dims = Dims::new(3, 2)?;
    let mut xx = [1., 2., 3., 4., 5., 6.];
    assert!(rescale_inplace_legacy(&mut xx, 0., 10., dims).is_err());
    assert_eq!(xx, [1., 2., 3., 4., 5., 6.]);
    Ok(())
}

#[test]
fn legacy_stride_overflow_is_error() -> anyhow::Result<()> {
    // nrows * ncols fits, nrows * nrows does not
    let dims = Dims::new(1 << (usize::BITS / 2 + 1), 1)?;
    let err = rescale_inplace_legacy(&mut Vec::new(), 0., 1., dims)
        .err()
        .ok_or_else(|| anyhow::anyhow!("expected an error"))?;
    assert!(err.to_string().contains("overflows"));
    Ok(())
}
