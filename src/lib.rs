//! `record-sort` sorts fixed-width binary records in place, directly inside a random-access store.
//!
//! The store (usually a file) is treated as an array of `W`-byte records, each one holding an unsigned
//! integer stored most-significant byte first. Records are reordered with an adjacent-swap sort working
//! through seeks, reads and writes at record offsets: no more than two records are resident in memory
//! at any time, so the store size is not limited by available RAM. The price is a quadratic number of
//! store accesses, which makes the crate suitable for stores that must not be buffered rather than for
//! large ones.
//!
//! # Overview
//!
//! * **Any record width:**
//!   the width is a parameter; [`sort_bytes`] and [`sort_tribytes`] cover 8-bit and 24-bit values.
//! * **Byte layout preservation:**
//!   only record order changes. Trailing bytes that do not form a complete record are never touched.
//! * **Stability:**
//!   records comparing equal keep their relative order, including with custom compare functions.
//! * **Any store:**
//!   anything implementing [`Read`](std::io::Read) + [`Write`](std::io::Write) + [`Seek`](std::io::Seek)
//!   can be sorted.
//!
//! # Example
//!
//! ```no_run
//! use std::fs;
//!
//! use record_sort::{RecordSorter, RecordSorterBuilder};
//!
//! fn main() {
//!     let mut store = fs::OpenOptions::new().read(true).write(true).open("values.bin").unwrap();
//!
//!     let sorter: RecordSorter = RecordSorterBuilder::new().with_width(3).build().unwrap();
//!     let stats = sorter.sort(&mut store).unwrap();
//!
//!     println!("{} records sorted in {} passes", stats.records, stats.passes);
//! }
//! ```

pub mod buffer;
pub mod record;
pub mod sort;
pub mod store;

pub use buffer::PairBuffer;
pub use record::RecordWidth;
pub use sort::{sort, sort_bytes, sort_tribytes, RecordSorter, RecordSorterBuilder, SortError, SortStats};
pub use store::RecordStore;
