//! Champion catalog stored in PostgreSQL (sqlx).
//!
//! One flat `champion` table. Rows arrive in bulk from a CSV file through
//! `COPY ... FROM STDIN` and are read back by name, in full, at random,
//! or as a short report. `check` describes the table itself.

mod db;
mod import;
mod query;
mod schema;
mod types;

pub use db::{connect_options, Catalog};
pub use import::{check_csv_header, COPY_STATEMENT};
pub use query::escape_like;
pub use types::{Champion, ChampionSummary, ColumnInfo, SchemaReport, CSV_COLUMNS};
