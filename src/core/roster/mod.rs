//! Roster import

pub mod csv_parser;

pub use csv_parser::{parse_roster_csv, parse_roster_str};
