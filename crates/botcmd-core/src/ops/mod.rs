//! Command table and the operations that mutate it

pub mod command_ops;
pub mod table;

pub use table::CommandTable;
