//! Word list sources and the in-memory word store.

pub mod words;

pub use words::{
    convert_csv_to_json, parse_csv, parse_json, source_for_path, write_json, BundledWords,
    CsvFile, JsonFile, LoadError, WordSource, WordStore,
};
