use std::io::{prelude::*, SeekFrom};

use env_logger;
use log;
use rand::Rng;

use record_sort::{record, sort_tribytes, RecordSorter, RecordSorterBuilder};

fn main() {
    env_logger::Builder::new().filter_level(log::LevelFilter::Debug).init();

    let mut store = tempfile::tempfile().unwrap();

    let mut rng = rand::thread_rng();
    let mut record = [0u8; 3];
    for _ in 0..200 {
        record::encode(rng.gen_range(0..1u128 << 24), &mut record).unwrap();
        store.write_all(&record).unwrap();
    }
    // dangling byte, kept as is
    store.write_all(&[0xff]).unwrap();

    let stats = sort_tribytes(&mut store).unwrap();
    log::info!("{} records sorted in {} passes", stats.records, stats.passes);

    let checker: RecordSorter = RecordSorterBuilder::new().with_width(3).build().unwrap();
    assert!(checker.is_sorted(&mut store).unwrap());

    store.seek(SeekFrom::Start(0)).unwrap();
    store.read_exact(&mut record).unwrap();
    log::info!("smallest value: {}", record::decode(&record).unwrap());
}
