pub mod hex_helper;
