//! Persistence module split across logical submodules: `connection` owns the
//! database location and schema, `books` carries the queries.

mod books;
mod connection;

pub use connection::Library;
