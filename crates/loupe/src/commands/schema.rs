//! Schema command - Print the JSON Schema of `loupe.config.json`

use crate::config::LOUPE_CONFIG_SCHEMA;

pub fn run() {
    println!("{}", LOUPE_CONFIG_SCHEMA);
}
