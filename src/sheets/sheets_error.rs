use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("Invalid service account credentials: {0}")]
    Credentials(String),
    #[error("Token exchange failed: {0}")]
    Token(String),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Sheets API returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Request to the spreadsheet service timed out")]
    Timeout,
}

impl SheetsError {
    /// Classify a transport error, keeping timeouts distinct.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SheetsError::Timeout
        } else {
            SheetsError::Request(err.to_string())
        }
    }
}
