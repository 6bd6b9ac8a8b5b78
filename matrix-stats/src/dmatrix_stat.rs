use crate::column_stat;
use crate::dims::Dims;
use crate::randn::NormalSampler;
use crate::rescale;
use crate::traits::*;
use nalgebra::{DMatrix, DVector};
use rand::Rng;

// `DMatrix` stores columns contiguously, so the transpose's storage
// is the row-major layout of the original.

fn dims_of(xx: &DMatrix<f64>) -> anyhow::Result<Dims> {
    Dims::new(xx.nrows(), xx.ncols())
}

fn update_row_major<F>(xx: &mut DMatrix<f64>, f: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut [f64], Dims) -> anyhow::Result<()>,
{
    let dims = dims_of(xx)?;
    let mut xx_t = xx.transpose();
    f(xx_t.as_mut_slice(), dims)?;
    *xx = xx_t.transpose();
    Ok(())
}

impl MatStatOps for DMatrix<f64> {
    type Mat = Self;
    type DVec = DVector<f64>;

    fn mean_columns(&self) -> anyhow::Result<Self::DVec> {
        let dims = dims_of(self)?;
        let mut mu = vec![0.0; dims.ncols()];
        column_stat::column_mean(self.transpose().as_slice(), dims, &mut mu)?;
        Ok(DVector::from_vec(mu))
    }

    fn std_columns(&self) -> anyhow::Result<Self::DVec> {
        let dims = dims_of(self)?;
        let xx_t = self.transpose();
        let mut mu = vec![0.0; dims.ncols()];
        let mut sig = vec![0.0; dims.ncols()];
        column_stat::column_mean(xx_t.as_slice(), dims, &mut mu)?;
        column_stat::column_std(xx_t.as_slice(), &mu, dims, &mut sig)?;
        Ok(DVector::from_vec(sig))
    }

    fn centre_columns_inplace(&mut self) -> anyhow::Result<()> {
        let mu = self.mean_columns()?;
        update_row_major(self, |data, dims| {
            column_stat::remove_column_mean_inplace(data, mu.as_slice(), dims)
        })
    }

    fn centre_columns(&self) -> anyhow::Result<Self::Mat> {
        let mut ret = self.clone();
        ret.centre_columns_inplace()?;
        Ok(ret)
    }

    fn scale_columns_inplace(&mut self) -> anyhow::Result<()> {
        let mu = self.mean_columns()?;
        let sig = self.std_columns()?;
        update_row_major(self, |data, dims| {
            column_stat::scale_columns_inplace(data, mu.as_slice(), sig.as_slice(), dims)
        })
    }

    fn scale_columns(&self) -> anyhow::Result<Self::Mat> {
        let mut ret = self.clone();
        ret.scale_columns_inplace()?;
        Ok(ret)
    }

    fn rescale_inplace(&mut self, new_mean: f64, new_stddev: f64) -> anyhow::Result<()> {
        update_row_major(self, |data, dims| {
            rescale::rescale_inplace(data, new_mean, new_stddev, dims)
        })
    }
}

impl SampleOps for DMatrix<f64> {
    type Mat = Self;

    fn randn<R: Rng>(
        nrow: usize,
        ncol: usize,
        sampler: &mut NormalSampler<'_, R>,
    ) -> anyhow::Result<Self::Mat> {
        let dims = Dims::new(nrow, ncol)?;
        let mut rvec = vec![0.0; dims.len()];
        sampler.sample_standard_normal_matrix(&mut rvec, dims)?;
        Ok(DMatrix::<f64>::from_row_slice(nrow, ncol, &rvec))
    }
}
