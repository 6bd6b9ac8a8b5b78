pub mod column_stat; // column mean, std, centering and scaling
pub mod dims; // shape of a row-major matrix and buffer checks
pub mod display; // print matrices for diagnostics
pub mod dmatrix_stat; // `nalgebra::DMatrix` implementations
pub mod ndarray_stat; // `ndarray::Array2` implementations
pub mod randn; // normally distributed random numbers
pub mod rescale; // global affine rescaling
pub mod traits; // traits for owning matrix types

pub use dims::Dims;
