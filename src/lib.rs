pub mod aggregate;
pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod ethics;
pub mod fsutil;
pub mod input;
pub mod lines;
pub mod logging;
pub mod parser;
pub mod report;
pub mod reports;

pub use error::ReportError;
