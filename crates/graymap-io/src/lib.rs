//! graymap-io - Image I/O for graymap
//!
//! Reads and writes binary PGM (`P5`) files, the only on-disk format the
//! engine exchanges. Path-based and in-memory helpers wrap the stream
//! functions in [`pnm`].

mod error;
pub mod pnm;

pub use error::{IoError, IoResult};
pub use pnm::{read_pgm, write_pgm};

use graymap_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read a PGM image from a file path.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    let file = File::open(path)?;
    read_pgm(BufReader::new(file))
}

/// Write a raster to a file path as PGM.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let path = path.as_ref();
    log::debug!("writing {}", path.display());
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_pgm(raster, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Read a PGM image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Raster> {
    read_pgm(Cursor::new(data))
}

/// Encode a raster as PGM into a new buffer.
pub fn write_image_mem(raster: &Raster) -> IoResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(raster.pixel_count() + 32);
    write_pgm(raster, &mut buf)?;
    Ok(buf)
}
