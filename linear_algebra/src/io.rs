//! Binary storage of matrices.
//!
//! A stream is a plain sequence of records, one per matrix:
//!
//! ```text
//! rows    u64, native endian
//! columns u64, native endian
//! data    rows * columns f64, native endian, row-major
//! ```
//!
//! There is no header, magic or record count, so readers have to be told how
//! many records to expect. The format is not portable across endianness.

use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use bincode::Options;
use log::debug;

use crate::{config::Limits, AlgebraError, Matrix};

/// Values buffered up front while reading a record, the rest grows on demand.
const READ_CHUNK: usize = 1 << 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Replace the file contents.
    #[default]
    Truncate,
    /// Add records after the existing contents.
    Append,
}

fn wire() -> impl Options + Copy {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_native_endian()
        .allow_trailing_bytes()
}

fn write_record<W: Write>(writer: &mut W, m: &Matrix) -> bincode::Result<()> {
    let opts = wire();
    opts.serialize_into(&mut *writer, &(m.nrows() as u64, m.ncols() as u64))?;
    for value in m.as_slice() {
        opts.serialize_into(&mut *writer, value)?;
    }
    Ok(())
}

fn read_record<R: Read>(
    reader: &mut R,
    record: usize,
    limits: &Limits,
) -> Result<Matrix, AlgebraError> {
    let opts = wire();
    let read_err = |source: bincode::Error| AlgebraError::FileRead { record, source };

    let (rows, cols): (u64, u64) = opts.deserialize_from(&mut *reader).map_err(read_err)?;
    let format_err = || AlgebraError::FileFormat { record, rows, cols };
    let nrows = usize::try_from(rows).map_err(|_| format_err())?;
    let ncols = usize::try_from(cols).map_err(|_| format_err())?;
    let len = limits
        .check_shape(nrows, ncols)
        .map_err(|_| format_err())?;

    let mut vals = Vec::with_capacity(len.min(READ_CHUNK));
    for _ in 0..len {
        vals.push(opts.deserialize_from::<_, f64>(&mut *reader).map_err(read_err)?);
    }
    Ok(Matrix::from_parts(nrows, ncols, vals))
}

/// Writes one record per matrix to `writer`.
pub fn write_matrices<W: Write>(mut writer: W, matrices: &[Matrix]) -> Result<(), AlgebraError> {
    for (record, m) in matrices.iter().enumerate() {
        write_record(&mut writer, m)
            .map_err(|source| AlgebraError::FileWrite { record, source })?;
    }
    writer.flush().map_err(|e| AlgebraError::FileWrite {
        record: matrices.len(),
        source: e.into(),
    })
}

/// Reads exactly `count` records from `reader`.
pub fn read_matrices<R: Read>(reader: R, count: usize) -> Result<Vec<Matrix>, AlgebraError> {
    read_matrices_with(reader, count, &Limits::default())
}

pub fn read_matrices_with<R: Read>(
    mut reader: R,
    count: usize,
    limits: &Limits,
) -> Result<Vec<Matrix>, AlgebraError> {
    let mut matrices = Vec::with_capacity(count.min(READ_CHUNK));
    for record in 0..count {
        matrices.push(read_record(&mut reader, record, limits)?);
    }
    Ok(matrices)
}

fn open_err(path: &Path) -> impl FnOnce(std::io::Error) -> AlgebraError + '_ {
    move |source| AlgebraError::FileOpen {
        path: path.to_path_buf(),
        source,
    }
}

/// Stores `matrices` in the file at `path`, truncating or appending.
pub fn store_file<P: AsRef<Path>>(
    path: P,
    matrices: &[Matrix],
    mode: WriteMode,
) -> Result<(), AlgebraError> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    match mode {
        WriteMode::Truncate => options.write(true).create(true).truncate(true),
        WriteMode::Append => options.append(true).create(true),
    };
    let file = options.open(path).map_err(open_err(path))?;
    debug!(
        "storing {} matrices in {} ({mode:?})",
        matrices.len(),
        path.display()
    );
    write_matrices(BufWriter::new(file), matrices)
}

pub fn store_matrix<P: AsRef<Path>>(
    path: P,
    m: &Matrix,
    mode: WriteMode,
) -> Result<(), AlgebraError> {
    store_file(path, std::slice::from_ref(m), mode)
}

/// Loads the first `count` matrices stored in the file at `path`.
pub fn load_file<P: AsRef<Path>>(path: P, count: usize) -> Result<Vec<Matrix>, AlgebraError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(open_err(path))?;
    debug!("loading {count} matrices from {}", path.display());
    read_matrices(BufReader::new(file), count)
}

/// Loads the first matrix stored in the file at `path`.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix, AlgebraError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(open_err(path))?;
    read_record(&mut BufReader::new(file), 0, &Limits::default())
}
