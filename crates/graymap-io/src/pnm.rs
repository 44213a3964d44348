//! PGM (Portable Gray Map) format support
//!
//! Reads and writes the binary `P5` variant:
//!
//! ```text
//! P5
//! <width> <height>
//! <maxval>
//! <width * height raw bytes, row-major>
//! ```
//!
//! Header fields are separated by arbitrary whitespace and may be
//! interleaved with `#` comments running to end of line. Exactly one
//! whitespace byte separates `maxval` from the sample data.

use crate::{IoError, IoResult};
use graymap_core::Raster;
use std::io::{BufRead, ErrorKind, Write};

/// Read a binary PGM image from a reader.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] if the magic is not `P5`
/// - [`IoError::InvalidData`] if a header field is malformed, a dimension
///   is zero, `maxval` is outside `1..=255`, or the sample data is short
///
/// Samples above `maxval` are clamped to `maxval`.
pub fn read_pgm<R: BufRead>(mut reader: R) -> IoResult<Raster> {
    let mut magic = [0u8; 2];
    reader.read_exact(&mut magic).map_err(truncated)?;
    if &magic != b"P5" {
        return Err(IoError::UnsupportedFormat(format!(
            "expected P5 magic, found {:?}",
            String::from_utf8_lossy(&magic)
        )));
    }

    let width = read_header_value(&mut reader, "width")?;
    let height = read_header_value(&mut reader, "height")?;
    let maxval = read_header_value(&mut reader, "maxval")?;

    if width == 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "invalid dimensions {width}x{height}"
        )));
    }
    if maxval == 0 || maxval > 255 {
        return Err(IoError::InvalidData(format!(
            "maxval {maxval} outside 1..=255"
        )));
    }
    log::debug!("PGM header: {width}x{height}, maxval {maxval}");

    let len = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| IoError::InvalidData(format!("image too large: {width}x{height}")))?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| graymap_core::Error::AllocationFailed(len))?;
    data.resize(len, 0);
    reader.read_exact(&mut data).map_err(truncated)?;

    Ok(Raster::from_data(width, height, maxval as u8, data)?)
}

/// Write a raster as binary PGM to a writer.
pub fn write_pgm<W: Write>(raster: &Raster, mut writer: W) -> IoResult<()> {
    log::debug!(
        "PGM write: {}x{}, maxval {}",
        raster.width(),
        raster.height(),
        raster.max_value()
    );
    write!(
        writer,
        "P5\n{} {}\n{}\n",
        raster.width(),
        raster.height(),
        raster.max_value()
    )?;
    writer.write_all(raster.data())?;
    Ok(())
}

fn truncated(err: std::io::Error) -> IoError {
    if err.kind() == ErrorKind::UnexpectedEof {
        IoError::InvalidData("unexpected end of data".to_string())
    } else {
        IoError::Io(err)
    }
}

fn next_byte<R: BufRead>(reader: &mut R) -> IoResult<Option<u8>> {
    let byte = match reader.fill_buf()?.first() {
        Some(&b) => b,
        None => return Ok(None),
    };
    reader.consume(1);
    Ok(Some(byte))
}

/// Read one unsigned decimal header field.
///
/// Skips leading whitespace and comments, then consumes the digits and the
/// single whitespace byte that terminates them.
fn read_header_value<R: BufRead>(reader: &mut R, field: &str) -> IoResult<u32> {
    let missing = || IoError::InvalidData(format!("missing {field} in header"));

    // skip whitespace and comments
    let mut byte = loop {
        match next_byte(reader)?.ok_or_else(missing)? {
            b'#' => {
                while let Some(b) = next_byte(reader)? {
                    if b == b'\n' || b == b'\r' {
                        break;
                    }
                }
            }
            b if b.is_ascii_whitespace() => {}
            b => break b,
        }
    };

    let mut value: u32 = 0;
    loop {
        if !byte.is_ascii_digit() {
            return Err(IoError::InvalidData(format!(
                "unexpected byte 0x{byte:02x} in {field}"
            )));
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((byte - b'0') as u32))
            .ok_or_else(|| IoError::InvalidData(format!("{field} out of range")))?;

        match next_byte(reader)? {
            Some(b) if b.is_ascii_whitespace() => return Ok(value),
            Some(b) => byte = b,
            None => return Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode(raster: &Raster) -> Vec<u8> {
        let mut buf = Vec::new();
        write_pgm(raster, &mut buf).unwrap();
        buf
    }

    #[test]
    fn test_write_header() {
        let raster = Raster::from_data(3, 2, 200, vec![0, 1, 2, 3, 4, 5]).unwrap();
        let buf = encode(&raster);
        assert!(buf.starts_with(b"P5\n3 2\n200\n"));
        assert_eq!(&buf[buf.len() - 6..], &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_read_with_comments() {
        let mut bytes = b"P5\n# made by hand\n2 # width\n2\n255\n".to_vec();
        bytes.extend_from_slice(&[10, 20, 30, 40]);
        let raster = read_pgm(Cursor::new(bytes)).unwrap();
        assert_eq!(raster.width(), 2);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.data(), &[10, 20, 30, 40]);
    }

    #[test]
    fn test_sample_equal_to_whitespace() {
        // first sample is '\n' (10) and must not be eaten by the header parser
        let mut bytes = b"P5 1 2 255\n".to_vec();
        bytes.extend_from_slice(&[b'\n', b' ']);
        let raster = read_pgm(Cursor::new(bytes)).unwrap();
        assert_eq!(raster.data(), &[10, 32]);
    }

    #[test]
    fn test_read_clamps_samples() {
        let mut bytes = b"P5\n2 1\n100\n".to_vec();
        bytes.extend_from_slice(&[99, 250]);
        let raster = read_pgm(Cursor::new(bytes)).unwrap();
        assert_eq!(raster.max_value(), 100);
        assert_eq!(raster.data(), &[99, 100]);
    }

    #[test]
    fn test_wrong_magic() {
        let bytes = b"P2\n2 2\n255\n0 0 0 0".to_vec();
        assert!(matches!(
            read_pgm(Cursor::new(bytes)),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_invalid_maxval() {
        let bytes = b"P5\n1 1\n300\n\x00".to_vec();
        assert!(matches!(
            read_pgm(Cursor::new(bytes)),
            Err(IoError::InvalidData(_))
        ));
        let bytes = b"P5\n1 1\n0\n\x00".to_vec();
        assert!(matches!(
            read_pgm(Cursor::new(bytes)),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_truncated_data() {
        let mut bytes = b"P5\n4 4\n255\n".to_vec();
        bytes.extend_from_slice(&[0; 10]);
        assert!(matches!(
            read_pgm(Cursor::new(bytes)),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_malformed_header() {
        let bytes = b"P5\n4 x4\n255\n".to_vec();
        assert!(matches!(
            read_pgm(Cursor::new(bytes)),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            read_pgm(Cursor::new(b"P5\n4".to_vec())),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            read_pgm(Cursor::new(b"P5\n0 4\n255\n".to_vec())),
            Err(IoError::InvalidData(_))
        ));
    }
}
