//! Local output of scraped records

mod json_saver;

pub use json_saver::save_json_records;
