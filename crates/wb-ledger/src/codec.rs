//! Little-endian integer framing shared by the entry and ledger codecs.
//!
//! The save format predates this implementation, so the field widths and
//! byte order are fixed: `i32` and `i64`, little-endian, no padding.

use std::io::{self, Read, Write};

use crate::error::{LedgerError, LedgerResult};

/// Read a little-endian `i32`, naming the field for error reporting.
pub fn read_i32<R: Read>(reader: &mut R, field: &'static str) -> LedgerResult<i32> {
    let mut buf = [0u8; 4];
    fill(reader, &mut buf, field)?;
    Ok(i32::from_le_bytes(buf))
}

/// Read a little-endian `i64`, naming the field for error reporting.
pub fn read_i64<R: Read>(reader: &mut R, field: &'static str) -> LedgerResult<i64> {
    let mut buf = [0u8; 8];
    fill(reader, &mut buf, field)?;
    Ok(i64::from_le_bytes(buf))
}

/// Write a little-endian `i32`.
pub fn write_i32<W: Write>(writer: &mut W, value: i32) -> LedgerResult<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian `i64`.
pub fn write_i64<W: Write>(writer: &mut W, value: i64) -> LedgerResult<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

fn fill<R: Read>(reader: &mut R, buf: &mut [u8], field: &'static str) -> LedgerResult<()> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            LedgerError::UnexpectedEof { field }
        } else {
            LedgerError::Read { field, source: e }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_round_trip_little_endian() {
        let mut buf = Vec::new();
        write_i32(&mut buf, -7).unwrap();
        write_i64(&mut buf, 1 << 40).unwrap();
        assert_eq!(buf.len(), 12);

        let mut cursor = buf.as_slice();
        assert_eq!(read_i32(&mut cursor, "a").unwrap(), -7);
        assert_eq!(read_i64(&mut cursor, "b").unwrap(), 1 << 40);
    }

    #[test]
    fn short_input_reports_the_field() {
        let mut cursor = &[0u8, 0, 0][..];
        let err = read_i32(&mut cursor, "version").unwrap_err();
        assert!(matches!(
            err,
            LedgerError::UnexpectedEof { field: "version" }
        ));
    }
}
