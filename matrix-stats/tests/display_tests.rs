use matrix_stats::display::show_matrix;
use matrix_stats::Dims;
use std::io::{Error, ErrorKind, Write};

/// Writer that fails every write with `kind`
struct FailingWriter(ErrorKind);

impl Write for FailingWriter {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(Error::from(self.0))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn render(mat: &[f64], dims: Dims) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    show_matrix(&mut buf, mat, dims)?;
    Ok(String::from_utf8(buf)?)
}

#[test]
fn one_by_one() -> anyhow::Result<()> {
    let out = render(&[3.14159265], Dims::new(1, 1)?)?;
    assert_eq!(out, "3.14159 \n");
    Ok(())
}

#[test]
fn rows_per_line() -> anyhow::Result<()> {
    let out = render(&[1., -2., 0.5, 1234.000001], Dims::new(2, 2)?)?;
    assert_eq!(out, "1.00000 -2.00000 \n0.50000 1234.00000 \n");
    Ok(())
}

#[test]
fn wrong_size_is_error() -> anyhow::Result<()> {
    let mut buf = Vec::new();
    assert!(show_matrix(&mut buf, &[1., 2., 3.], Dims::new(2, 2)?).is_err());
    assert!(buf.is_empty());
    Ok(())
}

#[test]
fn broken_pipe_is_not_an_error() -> anyhow::Result<()> {
    let mut buf = FailingWriter(ErrorKind::BrokenPipe);
    show_matrix(&mut buf, &[1., 2., 3., 4.], Dims::new(2, 2)?)?;
    Ok(())
}

#[test]
fn other_write_errors_propagate() -> anyhow::Result<()> {
    let mut buf = FailingWriter(ErrorKind::PermissionDenied);
    assert!(show_matrix(&mut buf, &[1., 2., 3., 4.], Dims::new(2, 2)?).is_err());
    Ok(())
}
