//! Fixed-width record sorter.

use log;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::io;

use crate::buffer::PairBuffer;
use crate::record::{self, RecordWidth};
use crate::store::RecordStore;

/// Sorting error.
#[derive(Debug)]
pub enum SortError {
    /// Record width is zero.
    InvalidWidth(usize),
    /// Store read, write or seek error.
    IO(io::Error),
}

impl Error for SortError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self {
            SortError::InvalidWidth(_) => None,
            SortError::IO(err) => Some(err),
        }
    }
}

impl Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            SortError::InvalidWidth(width) => write!(f, "invalid record width: {} (at least 1 byte expected)", width),
            SortError::IO(err) => write!(f, "I/O operation failed: {}", err),
        }
    }
}

/// Sorting statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of complete records in the store.
    pub records: u64,
    /// Number of trailing bytes left out of the sort.
    pub remainder: u64,
    /// Number of completed passes.
    pub passes: u64,
    /// Number of compared record pairs.
    pub comparisons: u64,
    /// Number of swapped record pairs.
    pub swaps: u64,
}

/// Record sorter builder. Provides methods for [`RecordSorter`] initialization.
#[derive(Clone)]
pub struct RecordSorterBuilder {
    /// Record width in bytes.
    width: usize,
    /// Stop as soon as a pass performs no swaps.
    early_exit: bool,
}

impl RecordSorterBuilder {
    /// Creates an instance of a builder with default parameters.
    pub fn new() -> Self {
        RecordSorterBuilder::default()
    }

    /// Builds a [`RecordSorter`] instance using provided configuration.
    pub fn build(self) -> Result<RecordSorter, SortError> {
        RecordSorter::new(self.width, self.early_exit)
    }

    /// Sets record width in bytes.
    pub fn with_width(mut self, width: usize) -> RecordSorterBuilder {
        self.width = width;
        return self;
    }

    /// Enables or disables stopping after a pass without swaps.
    pub fn with_early_exit(mut self, early_exit: bool) -> RecordSorterBuilder {
        self.early_exit = early_exit;
        return self;
    }
}

impl Default for RecordSorterBuilder {
    fn default() -> Self {
        RecordSorterBuilder {
            width: RecordWidth::BYTE.get(),
            early_exit: true,
        }
    }
}

/// In-place sorter of fixed-width records.
///
/// Records are reordered directly in the store with an adjacent-swap (bubble) sort. Only two
/// records are held in memory at any time, so the store may be arbitrarily larger than RAM at
/// the price of *n*<sup>2</sup> record reads in the worst case where *n* is the number of records.
/// Trailing bytes that do not form a complete record are never read nor written.
pub struct RecordSorter {
    width: RecordWidth,
    early_exit: bool,
}

impl RecordSorter {
    /// Creates a new record sorter instance.
    ///
    /// # Arguments
    /// * `width` - Record width in bytes. Zero width is rejected with [`SortError::InvalidWidth`].
    /// * `early_exit` - Stop as soon as a pass performs no swaps. Does not affect the result.
    pub fn new(width: usize, early_exit: bool) -> Result<Self, SortError> {
        return Ok(RecordSorter {
            width: RecordWidth::new(width)?,
            early_exit,
        });
    }

    /// Returns the record width.
    pub fn width(&self) -> RecordWidth {
        self.width
    }

    /// Returns the number of bytes of record storage allocated by a single sort.
    pub fn buffer_size(&self) -> usize {
        2 * self.width.get()
    }

    /// Sorts store records in ascending order of their unsigned big-endian values.
    ///
    /// # Arguments
    /// * `store` - Store to be sorted in place
    pub fn sort<S>(&self, store: &mut S) -> Result<SortStats, SortError>
    where
        S: RecordStore + ?Sized,
    {
        self.sort_by(store, record::compare)
    }

    /// Sorts store records using a custom compare function.
    /// Adjacent records are swapped only if `compare` returns [`Ordering::Greater`], so records
    /// comparing equal keep their relative order.
    ///
    /// # Arguments
    /// * `store` - Store to be sorted in place
    /// * `compare` - Function to be used to compare raw records
    pub fn sort_by<S, F>(&self, store: &mut S, mut compare: F) -> Result<SortStats, SortError>
    where
        S: RecordStore + ?Sized,
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        let len = store.byte_len().map_err(SortError::IO)?;
        let mut stats = SortStats {
            records: self.width.records_in(len),
            remainder: self.width.remainder_of(len),
            ..SortStats::default()
        };

        log::debug!(
            "sorting {} records (width: {}, remainder: {} bytes)",
            stats.records,
            self.width,
            stats.remainder
        );

        if stats.records < 2 {
            return Ok(stats);
        }

        let mut buffer = PairBuffer::new(self.width);

        for pass in 0..stats.records - 1 {
            let mut pass_swaps = 0;

            for index in 0..stats.records - 1 - pass {
                buffer.load(store, index).map_err(SortError::IO)?;
                stats.comparisons += 1;

                if compare(buffer.first(), buffer.second()) == Ordering::Greater {
                    buffer.store_swapped(store, index).map_err(SortError::IO)?;
                    pass_swaps += 1;
                }
            }

            stats.passes += 1;
            stats.swaps += pass_swaps;
            log::trace!("pass {} done (swaps: {})", pass, pass_swaps);

            if self.early_exit && pass_swaps == 0 {
                log::debug!("pass {} made no swaps, stopping early", pass);
                break;
            }
        }

        if stats.swaps > 0 {
            store.flush().map_err(SortError::IO)?;
        }

        log::debug!(
            "sorting done (passes: {}, comparisons: {}, swaps: {})",
            stats.passes,
            stats.comparisons,
            stats.swaps
        );

        return Ok(stats);
    }

    /// Checks whether store records are in ascending order of their unsigned big-endian values.
    pub fn is_sorted<S>(&self, store: &mut S) -> Result<bool, SortError>
    where
        S: RecordStore + ?Sized,
    {
        self.is_sorted_by(store, record::compare)
    }

    /// Checks whether store records are ordered according to a custom compare function.
    /// The store is only read.
    pub fn is_sorted_by<S, F>(&self, store: &mut S, mut compare: F) -> Result<bool, SortError>
    where
        S: RecordStore + ?Sized,
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        let records = store.record_count(self.width).map_err(SortError::IO)?;
        let mut buffer = PairBuffer::new(self.width);

        for index in 0..records.saturating_sub(1) {
            buffer.load(store, index).map_err(SortError::IO)?;
            if compare(buffer.first(), buffer.second()) == Ordering::Greater {
                log::debug!("records {} and {} are out of order", index, index + 1);
                return Ok(false);
            }
        }

        return Ok(true);
    }
}

/// Sorts `width`-byte records of the store in ascending order.
pub fn sort<S>(store: &mut S, width: usize) -> Result<SortStats, SortError>
where
    S: RecordStore + ?Sized,
{
    RecordSorter::new(width, true)?.sort(store)
}

/// Treats the store as an array of unsigned 8-bit values and sorts it in place.
pub fn sort_bytes<S>(store: &mut S) -> Result<SortStats, SortError>
where
    S: RecordStore + ?Sized,
{
    sort(store, RecordWidth::BYTE.get())
}

/// Treats the store as an array of unsigned 24-bit values stored MSB first and sorts it in place.
pub fn sort_tribytes<S>(store: &mut S) -> Result<SortStats, SortError>
where
    S: RecordStore + ?Sized,
{
    sort(store, RecordWidth::TRIBYTE.get())
}
