use std::fs;
use std::process;

use bytesize::ByteSize;
use clap::ArgEnum;
use env_logger;
use log;

use record_sort::{record, RecordSorter, RecordSorterBuilder, RecordStore, SortError};

fn main() {
    let arg_parser = build_arg_parser();

    let log_level: LogLevel = arg_parser.value_of_t_or_exit("log_level");
    init_logger(log_level);

    let order: Order = arg_parser.value_of_t_or_exit("sort");
    let width: usize = arg_parser.value_of_t_or_exit("width");
    let check_only = arg_parser.is_present("check");
    let early_exit = !arg_parser.is_present("no_early_exit");

    let sorter: RecordSorter = match RecordSorterBuilder::new()
        .with_width(width)
        .with_early_exit(early_exit)
        .build()
    {
        Ok(sorter) => sorter,
        Err(err) => {
            log::error!("sorter initialization error: {}", err);
            process::exit(1);
        }
    };

    let input = arg_parser.value_of("input").expect("value is required");
    let mut store = match fs::OpenOptions::new().read(true).write(!check_only).open(input) {
        Ok(file) => file,
        Err(err) => {
            log::error!("input file opening error: {}", err);
            process::exit(1);
        }
    };

    match store.byte_len() {
        Ok(len) => log::info!(
            "{}: {} ({} records of {} bytes)",
            input,
            ByteSize(len),
            sorter.width().records_in(len),
            sorter.width()
        ),
        Err(err) => {
            log::error!("input file size error: {}", err);
            process::exit(1);
        }
    }

    let compare = match order {
        Order::Asc => |a: &[u8], b: &[u8]| record::compare(a, b),
        Order::Desc => |a: &[u8], b: &[u8]| record::compare(a, b).reverse(),
    };

    if check_only {
        match sorter.is_sorted_by(&mut store, compare) {
            Ok(true) => log::info!("records are sorted"),
            Ok(false) => {
                log::warn!("records are not sorted");
                process::exit(2);
            }
            Err(err) => exit_on_sort_error("order check error", err),
        }
        return;
    }

    match sorter.sort_by(&mut store, compare) {
        Ok(stats) => log::info!(
            "sorting done (records: {}, passes: {}, swaps: {}, untouched tail: {} bytes)",
            stats.records,
            stats.passes,
            stats.swaps,
            stats.remainder
        ),
        Err(err) => exit_on_sort_error("data sorting error", err),
    }

    if let Err(err) = store.sync_all() {
        log::error!("data syncing error: {}", err);
        process::exit(1);
    }
}

fn exit_on_sort_error(context: &str, err: SortError) -> ! {
    log::error!("{}: {}", context, err);
    process::exit(1);
}

#[derive(Copy, Clone, clap::ArgEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn possible_values() -> impl Iterator<Item = clap::PossibleValue<'static>> {
        Self::value_variants().iter().filter_map(|v| v.to_possible_value())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <LogLevel as clap::ArgEnum>::from_str(s, false)
    }
}

#[derive(Copy, Clone, clap::ArgEnum)]
enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn possible_values() -> impl Iterator<Item = clap::PossibleValue<'static>> {
        Order::value_variants().iter().filter_map(|v| v.to_possible_value())
    }
}

impl std::str::FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Order as clap::ArgEnum>::from_str(s, false)
    }
}

fn build_arg_parser() -> clap::ArgMatches {
    clap::App::new("record-sort")
        .about("in-place fixed-width record sorter")
        .arg(
            clap::Arg::new("input")
                .short('i')
                .long("input")
                .help("file to be sorted in place")
                .required(true)
                .takes_value(true),
        )
        .arg(
            clap::Arg::new("width")
                .short('w')
                .long("width")
                .help("record width in bytes")
                .takes_value(true)
                .default_value("1")
                .validator(|v| match v.parse::<usize>() {
                    Ok(0) => Err("Record width must be at least 1 byte".to_string()),
                    Ok(_) => Ok(()),
                    Err(err) => Err(format!("Record width format incorrect: {}", err)),
                }),
        )
        .arg(
            clap::Arg::new("sort")
                .short('s')
                .long("sort")
                .help("sorting order")
                .takes_value(true)
                .default_value("asc")
                .possible_values(Order::possible_values()),
        )
        .arg(
            clap::Arg::new("log_level")
                .short('l')
                .long("loglevel")
                .help("logging level")
                .takes_value(true)
                .default_value("info")
                .possible_values(LogLevel::possible_values()),
        )
        .arg(
            clap::Arg::new("check")
                .long("check")
                .help("only check that records are sorted, exit with status 2 if they are not"),
        )
        .arg(
            clap::Arg::new("no_early_exit")
                .long("no-early-exit")
                .help("run every pass even if the records are already in order"),
        )
        .get_matches()
}

fn init_logger(log_level: LogLevel) {
    env_logger::Builder::new()
        .filter_level(match log_level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        })
        .format_timestamp_millis()
        .init();
}
