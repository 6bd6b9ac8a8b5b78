use crate::column_stat;
use crate::dims::Dims;
use crate::randn::NormalSampler;
use crate::rescale;
use crate::traits::*;
use ndarray::{Array1, Array2};
use rand::Rng;

fn dims_of(xx: &Array2<f64>) -> anyhow::Result<Dims> {
    let (nrow, ncol) = xx.dim();
    Dims::new(nrow, ncol)
}

/// Copy into a row-major vector unless already in standard layout
fn row_major_vec(xx: &Array2<f64>) -> Vec<f64> {
    match xx.as_slice() {
        Some(data) => data.to_vec(),
        None => xx.iter().copied().collect(),
    }
}

/// Run `f` over the row-major elements of `xx` and write them back
fn update_row_major<F>(xx: &mut Array2<f64>, f: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut [f64], Dims) -> anyhow::Result<()>,
{
    let dims = dims_of(xx)?;
    if let Some(data) = xx.as_slice_mut() {
        return f(data, dims);
    }
    let mut data = row_major_vec(xx);
    f(&mut data, dims)?;
    xx.assign(&Array2::from_shape_vec((dims.nrows(), dims.ncols()), data)?);
    Ok(())
}

impl MatStatOps for Array2<f64> {
    type Mat = Self;
    type DVec = Array1<f64>;

    fn mean_columns(&self) -> anyhow::Result<Self::DVec> {
        let dims = dims_of(self)?;
        let mut mu = vec![0.0; dims.ncols()];
        column_stat::column_mean(&row_major_vec(self), dims, &mut mu)?;
        Ok(Array1::from(mu))
    }

    fn std_columns(&self) -> anyhow::Result<Self::DVec> {
        let dims = dims_of(self)?;
        let xx = row_major_vec(self);
        let mut mu = vec![0.0; dims.ncols()];
        let mut sig = vec![0.0; dims.ncols()];
        column_stat::column_mean(&xx, dims, &mut mu)?;
        column_stat::column_std(&xx, &mu, dims, &mut sig)?;
        Ok(Array1::from(sig))
    }

    fn centre_columns_inplace(&mut self) -> anyhow::Result<()> {
        let mu = self.mean_columns()?.to_vec();
        update_row_major(self, |data, dims| {
            column_stat::remove_column_mean_inplace(data, &mu, dims)
        })
    }

    fn centre_columns(&self) -> anyhow::Result<Self::Mat> {
        let mut ret = self.clone();
        ret.centre_columns_inplace()?;
        Ok(ret)
    }

    fn scale_columns_inplace(&mut self) -> anyhow::Result<()> {
        let mu = self.mean_columns()?.to_vec();
        let sig = self.std_columns()?.to_vec();
        update_row_major(self, |data, dims| {
            column_stat::scale_columns_inplace(data, &mu, &sig, dims)
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

impl SampleOps for Array2<f64> {
    type Mat = Self;

    fn randn<R: Rng>(
        nrow: usize,
        ncol: usize,
        sampler: &mut NormalSampler<'_, R>,
    ) -> anyhow::Result<Self::Mat> {
        let dims = Dims::new(nrow, ncol)?;
        let mut rvec = vec![0.0; dims.len()];
        sampler.sample_standard_normal_matrix(&mut rvec, dims)?;
        Ok(Array2::from_shape_vec((nrow, ncol), rvec)?)
    }
}
