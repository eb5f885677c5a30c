use clap::ArgMatches;
use log::info;
use smart_buffer_lib::error::Result;
use smart_buffer_lib::helper::hex_helper::to_hex_dump;
use smart_buffer_lib::layout::{encode_fields, parse_layout};
use std::fs;
use crate::{byte_order, start_offset};

pub fn encode_main(matches: ArgMatches) -> Result<()> {
    let layout = parse_layout(matches.value_of("layout").expect("layout not specified"))?;
    let values: Vec<&str> = matches.values_of("values")
        .map(|values| values.collect())
        .unwrap_or_default();

    let bytes = encode_fields(&layout, &values, start_offset(&matches), byte_order(&matches))?;

    match matches.value_of("output") {
        Some(path) => {
            fs::write(path, &bytes)?;
            info!("wrote {} bytes to {}", bytes.len(), path);
        }
        None => print!("{}", to_hex_dump(&bytes)),
    }
    Ok(())
}
