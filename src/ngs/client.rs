use reqwest::Client;
use thiserror::Error;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used to talk to the NGS service. Timeouts are left at the transport defaults.
pub fn new_client() -> Result<Client, NgsClientError> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum NgsClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}
