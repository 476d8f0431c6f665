pub mod auth;
pub mod client;
pub mod rows;
mod sheets_error;

pub use auth::ServiceAccount;
pub use client::{GoogleSheetsClient, SheetsConfig};
pub use rows::{lead_rows, SheetRow};
pub use sheets_error::SheetsError;

/// Destination for lead rows. The server holds one for its whole lifetime;
/// tests swap in an in-memory fake.
pub trait RowSink: Send + Sync {
    /// Append all rows as a single batch, returning how many were written.
    fn append_rows(&self, rows: &[SheetRow]) -> Result<usize, SheetsError>;
}
