use clap::ArgMatches;
use log::{info, trace};
use smart_buffer_lib::error::Result;
use smart_buffer_lib::helper::hex_helper::to_hex_string;
use smart_buffer_lib::layout::{decode_fields, parse_layout};
use std::fs;
use crate::{byte_order, start_offset};

pub fn decode_main(matches: ArgMatches) -> Result<()> {
    let layout = parse_layout(matches.value_of("layout").expect("layout not specified"))?;
    let path = matches.value_of("input").expect("input not specified");

    let bytes = fs::read(path)?;
    info!("read {} bytes from {}", bytes.len(), path);
    trace!("input {}", to_hex_string(&bytes));

    for (position, value) in decode_fields(bytes, &layout, start_offset(&matches), byte_order(&matches))? {
        println!("{:>8}  {:<5}  {}", position, value.kind(), value);
    }
    Ok(())
}
