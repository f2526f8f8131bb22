use std::io::{self, prelude::*, SeekFrom};

use crate::record::RecordWidth;

/// Random-access store interface. Provides record-indexed reads and writes on top of any
/// seekable byte stream, such as [`std::fs::File`] or [`std::io::Cursor`].
///
/// Every method repositions the stream; callers must not rely on the seek position between calls.
pub trait RecordStore: Read + Write + Seek {
    /// Returns the store length in bytes.
    fn byte_len(&mut self) -> io::Result<u64> {
        self.seek(SeekFrom::End(0))
    }

    /// Returns the number of complete records of the given width.
    fn record_count(&mut self, width: RecordWidth) -> io::Result<u64> {
        Ok(width.records_in(self.byte_len()?))
    }

    /// Reads the record with the given index into `buf`. `buf` must be exactly one record wide.
    fn read_record(&mut self, width: RecordWidth, index: u64, buf: &mut [u8]) -> io::Result<()> {
        debug_assert_eq!(buf.len(), width.get());
        self.seek(SeekFrom::Start(width.offset_of(index)))?;
        self.read_exact(buf)
    }

    /// Overwrites the record with the given index with `buf`. `buf` must be exactly one record wide.
    fn write_record(&mut self, width: RecordWidth, index: u64, buf: &[u8]) -> io::Result<()> {
        debug_assert_eq!(buf.len(), width.get());
        self.seek(SeekFrom::Start(width.offset_of(index)))?;
        self.write_all(buf)
    }
}

impl<S: Read + Write + Seek + ?Sized> RecordStore for S {}
