pub mod aggregate;
pub mod coordinator;
pub mod error;
pub mod output;
pub mod parser;
pub mod partition;
pub mod ranking;
pub mod worker;
