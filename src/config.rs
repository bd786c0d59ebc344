// Configuration module: reads the process environment once at startup
// into an explicit struct that is passed by reference to whichever
// component needs it. Nothing is validated up front: a missing value
// only becomes an error when the call that needs it is attempted.

use anyhow::{Context, Result};

/// Environment-backed configuration, constant for the run.
#[derive(Clone, Debug)]
pub struct Config {
    /// `AZURE_OPENAI_API_KEY`. Read at startup like the rest; no call
    /// consumes it directly (the APIM key authenticates the chat call).
    pub openai_api_key: Option<String>,
    /// `AZURE_APIM_ENDPOINT`, the base URL of the chat-completions
    /// gateway.
    pub apim_endpoint: Option<String>,
    /// `AZURE_APIM_API_KEY`, sent in the `api-key` header.
    pub apim_api_key: Option<String>,
    /// `AZURE_DEVOPS_PERSONAL_ACCESS_TOKEN`, the PAT for work-item
    /// creation.
    pub devops_pat: Option<String>,
}

impl Config {
    /// Load a `.env` file if one is present, then snapshot the variables
    /// this program cares about. Absent variables stay `None`.
    pub fn from_env() -> Self {
        // Ignore a missing .env file; real environment variables still apply.
        dotenvy::dotenv().ok();
        Config {
            openai_api_key: std::env::var("AZURE_OPENAI_API_KEY").ok(),
            apim_endpoint: std::env::var("AZURE_APIM_ENDPOINT").ok(),
            apim_api_key: std::env::var("AZURE_APIM_API_KEY").ok(),
            devops_pat: std::env::var("AZURE_DEVOPS_PERSONAL_ACCESS_TOKEN").ok(),
        }
    }

    pub fn apim_endpoint(&self) -> Result<&str> {
        self.apim_endpoint
            .as_deref()
            .context("AZURE_APIM_ENDPOINT is not set")
    }

    pub fn apim_api_key(&self) -> Result<&str> {
        self.apim_api_key
            .as_deref()
            .context("AZURE_APIM_API_KEY is not set")
    }

    pub fn devops_pat(&self) -> Result<&str> {
        self.devops_pat
            .as_deref()
            .context("AZURE_DEVOPS_PERSONAL_ACCESS_TOKEN is not set")
    }
}
