//! Two-slot record buffer.

use std::io;

use crate::record::RecordWidth;
use crate::store::RecordStore;

/// Buffer holding exactly two adjacent records.
///
/// This is the only record storage the sorter allocates: its size is `2 * W` bytes no matter how
/// many records the store contains.
pub struct PairBuffer {
    width: RecordWidth,
    inner: Box<[u8]>,
}

impl PairBuffer {
    pub fn new(width: RecordWidth) -> Self {
        PairBuffer {
            width,
            inner: vec![0; 2 * width.get()].into_boxed_slice(),
        }
    }

    /// Returns the record width.
    pub fn width(&self) -> RecordWidth {
        self.width
    }

    /// Returns buffer size in bytes.
    pub fn capacity(&self) -> usize {
        self.inner.len()
    }

    /// Returns the first (left) record.
    pub fn first(&self) -> &[u8] {
        &self.inner[..self.width.get()]
    }

    /// Returns the second (right) record.
    pub fn second(&self) -> &[u8] {
        &self.inner[self.width.get()..]
    }

    /// Loads records `index` and `index + 1` from the store.
    pub fn load<S>(&mut self, store: &mut S, index: u64) -> io::Result<()>
    where
        S: RecordStore + ?Sized,
    {
        let (first, second) = self.inner.split_at_mut(self.width.get());
        store.read_record(self.width, index, first)?;
        store.read_record(self.width, index + 1, second)?;

        return Ok(());
    }

    /// Writes the loaded pair back to records `index` and `index + 1` in swapped order.
    /// The records are written one at a time, left slot first.
    pub fn store_swapped<S>(&self, store: &mut S, index: u64) -> io::Result<()>
    where
        S: RecordStore + ?Sized,
    {
        store.write_record(self.width, index, self.second())?;
        store.write_record(self.width, index + 1, self.first())?;

        return Ok(());
    }
}
