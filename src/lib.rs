#[macro_use]
pub mod macros;

pub mod api;
pub mod export;
pub mod parser;
pub mod schema;
