mod encode_cli;
mod decode_cli;

use clap::{Arg, App, ArgMatches};
use log::LevelFilter;
use smart_buffer_lib::general::endianness::Endianness;
use crate::encode_cli::encode_main;
use crate::decode_cli::decode_main;

fn main() {
    let matches = App::new("SmartBuffer CLI")
        .version("1.0")
        .about("Packs values into a binary payload or unpacks them, field by field")
        .arg(
            Arg::with_name("layout")
                .short("l")
                .long("layout")
                .value_name("FIELDS")
                .help("Comma separated field kinds: u8, i8, u16, i16, u32, i32, u64, i64, f32, f64, str, strnt")
                .required(true)
                .takes_value(true)
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("FILE")
                .help("Decode the layout from FILE")
                .required_unless("values")
                .conflicts_with("values")
                .takes_value(true)
        )
        .arg(
            Arg::with_name("values")
                .long("values")
                .value_name("VALUE")
                .help("Encode these values, one per layout field")
                .required_unless("input")
                .conflicts_with("input")
                .multiple(true)
                .use_delimiter(false)
                .allow_hyphen_values(true)
                .takes_value(true)
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Write the encoded payload to FILE instead of printing a hex dump")
                .requires("values")
                .takes_value(true)
        )
        .arg(
            Arg::with_name("big_endian")
                .short("b")
                .long("big-endian")
                .help("Use big-endian byte order for multi-byte fields (default little-endian)")
                .takes_value(false)
        )
        .arg(
            Arg::with_name("offset")
                .short("s")
                .long("offset")
                .value_name("BYTES")
                .help("Byte offset of the first field")
                .default_value("0")
                .takes_value(true)
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Sets the level of verbosity (''=warn, 'v'=info, 'vv'=debug, 'vvv'=trace)")
                .takes_value(false)
        )
        .get_matches();

    let log_level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::builder().filter_level(log_level).init();

    let result = if matches.is_present("input") {
        decode_main(matches)
    } else {
        encode_main(matches)
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

pub fn byte_order(matches: &ArgMatches) -> Endianness {
    Endianness::from_little_endian(!matches.is_present("big_endian"))
}

pub fn start_offset(matches: &ArgMatches) -> usize {
    matches
        .value_of("offset").expect("offset not specified")
        .parse().expect("invalid offset")
}
