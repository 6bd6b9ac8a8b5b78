use crate::dims::Dims;
use std::io::{BufWriter, Write};

/// Write `mat` one row per line, each value as `{:2.5}` followed by a
/// space
///
/// * `buf` - output
/// * `mat` - `dim_i x dim_j` matrix
/// * `dims` - shape of `mat`
pub fn show_matrix<W: Write>(buf: &mut W, mat: &[f64], dims: Dims) -> anyhow::Result<()> {
    dims.check_matrix(mat)?;

    for row in mat.chunks_exact(dims.ncols()) {
        let written = row
            .iter()
            .try_for_each(|x| write!(buf, "{:2.5} ", x))
            .and_then(|_| writeln!(buf));

        if let Err(e) = written {
            if e.kind() == std::io::ErrorKind::BrokenPipe {
                return Ok(());
            } else {
                return Err(e.into());
            }
        }
    }
    Ok(())
}

/// Print `mat` to the standard output for diagnostics. A closed pipe
/// is not an error.
pub fn print_matrix(mat: &[f64], dims: Dims) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut buf = BufWriter::new(stdout.lock());
    show_matrix(&mut buf, mat, dims)?;
    match buf.flush() {
        Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => Err(e.into()),
        _ => Ok(()),
    }
}
