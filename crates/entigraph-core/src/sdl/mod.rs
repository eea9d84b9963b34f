//! SDL (schema definition language) rendering.

mod config;
mod printer;


pub use config::Config;
pub use printer::Printer;
