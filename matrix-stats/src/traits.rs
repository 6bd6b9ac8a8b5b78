use crate::randn::NormalSampler;
use rand::Rng;

/// Column statistics and transforms for owning matrix types. Only
/// implemented for `nalgebra::DMatrix<f64>` and `ndarray::Array2<f64>`,
/// with rows as observations and columns as variables.
pub trait MatStatOps {
    type Mat;
    type DVec;

    /// mean of each column
    fn mean_columns(&self) -> anyhow::Result<Self::DVec>;

    /// sample standard deviation of each column (divisor `nrows - 1`)
    fn std_columns(&self) -> anyhow::Result<Self::DVec>;

    fn centre_columns_inplace(&mut self) -> anyhow::Result<()>;
    fn centre_columns(&self) -> anyhow::Result<Self::Mat>;

    /// centre and divide by the standard deviation; columns without
    /// spread are only centred
    fn scale_columns_inplace(&mut self) -> anyhow::Result<()>;
    fn scale_columns(&self) -> anyhow::Result<Self::Mat>;

    /// `x <- x * new_stddev + new_mean` for every element
    fn rescale_inplace(&mut self, new_mean: f64, new_stddev: f64) -> anyhow::Result<()>;
}

/// Sample random matrices
pub trait SampleOps {
    type Mat;

    /// Sample a `nrow x ncol` matrix, filled row by row from `sampler`
    fn randn<R: Rng>(
        nrow: usize,
        ncol: usize,
        sampler: &mut NormalSampler<'_, R>,
    ) -> anyhow::Result<Self::Mat>;
}
