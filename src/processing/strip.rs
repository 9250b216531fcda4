/*! Leading bytes removal

Drops the first `n` bytes of every file of a folder (stray BOM halves, format markers...),
writing the rest under the same name in another folder.
!*/
use std::{
    io::{Read, Write},
    path::Path,
};

use log::{debug, info};
use rayon::prelude::*;

use crate::{error::Error, io};

pub const DEFAULT_NB_BYTES: u64 = 1;

/// Skip `n` bytes of `reader` and copy the remainder into `writer`.
///
/// Returns the number of written bytes. Inputs shorter than `n` give an empty output.
pub fn strip_reader<R: Read, W: Write>(reader: R, writer: &mut W, n: u64) -> Result<u64, Error> {
    let mut reader = reader;
    std::io::copy(&mut reader.by_ref().take(n), &mut std::io::sink())?;
    let written = std::io::copy(&mut reader, writer)?;
    writer.flush()?;
    Ok(written)
}

fn strip_file(src: &Path, dst: &Path, n: u64) -> Result<u64, Error> {
    // reading everything first keeps read failures on `src` and write failures on `dst`
    let content = std::fs::read(src).map_err(|e| Error::from_io(src, e))?;
    let mut writer = io::create(dst)?;
    strip_reader(content.as_slice(), &mut writer, n).map_err(|e| match e {
        Error::Stream(e) => Error::from_io(dst, e),
        e => e,
    })
}

/// Strip every regular file directly in `src` into `dst`. Returns the number of processed files.
///
/// `dst` must not be `src`: outputs would truncate their own inputs.
pub fn strip_dir(src: &Path, dst: &Path, n: u64) -> Result<usize, Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(src).map_err(|e| Error::from_io(src, e))? {
        let entry = entry.map_err(|e| Error::from_io(src, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    if dst.exists() {
        let src_canon = src.canonicalize().map_err(|e| Error::from_io(src, e))?;
        let dst_canon = dst.canonicalize().map_err(|e| Error::from_io(dst, e))?;
        if src_canon == dst_canon {
            return Err(Error::InvalidParameter(format!(
                "destination {:?} is the source folder",
                dst
            )));
        }
    }
    io::create_dir_all(dst)?;

    files.par_iter().try_for_each(|path| {
        // read_dir entries always have a file name
        let name = path.file_name().unwrap_or_default();
        let written = strip_file(path, &dst.join(name), n)?;
        debug!("{:?}: {} bytes kept", path, written);
        Ok::<_, Error>(())
    })?;

    info!("stripped {} bytes from {} files", n, files.len());
    Ok(files.len())
}
