//! Normally distributed random numbers.
//!
//! The random state is an explicit generator owned by the caller and
//! borrowed by [`NormalSampler`], so streams are reproducible from a
//! seed and never shared between threads by accident.
//!
//! ```
//! use matrix_stats::randn::*;
//! use matrix_stats::Dims;
//!
//! let mut rng = create_rng(42);
//! let mut sampler = NormalSampler::new(&mut rng);
//! let dims = Dims::new(4, 3).unwrap();
//! let mut zz = vec![0.0; dims.len()];
//! sampler.sample_standard_normal_matrix(&mut zz, dims).unwrap();
//! assert!(zz.iter().all(|z| z.is_finite()));
//! ```

use crate::dims::Dims;
use log::debug;
use rand::distr::OpenClosed01;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::f64::consts::TAU;

/// Seeded generator for reproducible streams
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// How a standard normal value is produced from the generator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NormalMethod {
    /// `sqrt(-2 ln u) * cos(2 pi v)` with independent `u` and `v`
    #[default]
    BoxMuller,
    /// `sqrt(-2 ln u) * cos(2 pi u)` from a single uniform draw.
    /// Reproduces older output; the values are not standard normal
    /// (mean ~0.056, variance ~1.116).
    SingleDraw,
    /// `rand_distr::StandardNormal`
    Ziggurat,
}

pub struct NormalSampler<'a, R: Rng> {
    rng: &'a mut R,
    method: NormalMethod,
}

impl<'a, R: Rng> NormalSampler<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self::with_method(rng, NormalMethod::default())
    }

    pub fn with_method(rng: &'a mut R, method: NormalMethod) -> Self {
        Self { rng, method }
    }

    pub fn method(&self) -> NormalMethod {
        self.method
    }

    /// Draw one value. Uniform radii come from `(0, 1]`, so `ln(0)` is
    /// never taken.
    pub fn sample_standard_normal(&mut self) -> f64 {
        match self.method {
            NormalMethod::BoxMuller => {
                let u: f64 = self.rng.sample(OpenClosed01);
                let v: f64 = self.rng.random();
                (-2.0 * u.ln()).sqrt() * (TAU * v).cos()
            }
            NormalMethod::SingleDraw => {
                let u: f64 = self.rng.sample(OpenClosed01);
                (-2.0 * u.ln()).sqrt() * (TAU * u).cos()
            }
            NormalMethod::Ziggurat => self.rng.sample(StandardNormal),
        }
    }

    /// Fill `mat` in row-major order, one draw per element: `(i, j)` is
    /// drawn before `(i, j + 1)`.
    pub fn sample_standard_normal_matrix(
        &mut self,
        mat: &mut [f64],
        dims: Dims,
    ) -> anyhow::Result<()> {
        dims.check_matrix(mat)?;
        debug!("sampling {} matrix with {:?}", dims, self.method);
        for x in mat.iter_mut() {
            *x = self.sample_standard_normal();
        }
        Ok(())
    }
}
