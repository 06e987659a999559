pub mod cli;
pub mod table;
