// API client module: two small blocking HTTP clients, one for the
// chat-completions gateway and one for Azure DevOps work-item creation.
// Both are intentionally synchronous; each program run performs at most
// one call per client, in program-text order.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Deployment name the demonstration chat call targets.
const CHAT_MODEL: &str = "gpt-35-turbo";
const CHAT_API_VERSION: &str = "2023-12-01-preview";

const DEVOPS_BASE_URL: &str = "https://dev.azure.com";
const DEVOPS_ORGANIZATION: &str = "contoso-jml";
const DEVOPS_PROJECT: &str = "vidbot-teams";
const WORK_ITEM_TYPE: &str = "task";
const WIT_API_VERSION: &str = "6.0";

/// Title given to every work item this tool creates.
pub const WORK_ITEM_TITLE: &str = "Vidbot Test Task";

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: &'static str,
}

#[derive(Serialize)]
struct ChatRequest {
    model: &'static str,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// One JSON-patch operation; the work-item body is an array of these.
#[derive(Serialize, Debug)]
pub struct PatchOp {
    pub op: &'static str,
    pub path: &'static str,
    pub value: String,
}

/// Client for the chat-completions endpoint behind the APIM gateway.
pub struct ChatClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl ChatClient {
    /// Build a client from configuration. Missing endpoint or key fails
    /// here, at the point the call is about to be made.
    pub fn from_config(config: &Config) -> Result<Self> {
        let endpoint = config.apim_endpoint()?.trim_end_matches('/').to_string();
        let api_key = config.apim_api_key()?.to_string();
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ChatClient {
            client,
            endpoint,
            api_key,
        })
    }

    /// Send the fixed two-message exchange and return the trimmed text of
    /// the first choice. Any transport or authentication failure is fatal.
    pub fn request_greeting(&self) -> Result<String> {
        let url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, CHAT_MODEL, CHAT_API_VERSION
        );
        let body = ChatRequest {
            model: CHAT_MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a helpful assistant.",
                },
                ChatMessage {
                    role: "user",
                    content: "Hello!",
                },
            ],
        };
        let res = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .context("Failed to send chat completion request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Chat completion failed: {} - {}", status, txt);
        }
        let resp: ChatResponse = res.json().context("Parsing chat completion json")?;
        let choice = resp
            .choices
            .first()
            .context("Chat completion returned no choices")?;
        Ok(choice.message.content.trim().to_string())
    }
}

/// Client for the Azure DevOps work-item-tracking REST API.
pub struct WorkItemClient {
    client: Client,
    base_url: String,
    pat: String,
}

impl WorkItemClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_base_url(config, DEVOPS_BASE_URL)
    }

    /// Same as `from_config`, with the service host overridden. Lets
    /// tests point the client at a local server.
    pub fn with_base_url(config: &Config, base_url: &str) -> Result<Self> {
        let pat = config.devops_pat()?.to_string();
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(WorkItemClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            pat,
        })
    }

    /// POST a new task whose description is the serialized submission
    /// JSON, embedded as text. Returns the response status so the caller
    /// can report success (exactly 200) or failure with the code.
    pub fn create_task(&self, json_data: &str) -> Result<StatusCode> {
        let url = work_item_url(&self.base_url);
        let body = patch_document(json_data);
        let res = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json-patch+json")
            .header(AUTHORIZATION, basic_auth_header(&self.pat))
            .json(&body)
            .send()
            .context("Failed to send work item request")?;
        Ok(res.status())
    }
}

/// Work-item creation URL for the fixed organization, project and type.
fn work_item_url(base_url: &str) -> String {
    format!(
        "{}/{}/{}/_apis/wit/workitems/${}?api-version={}",
        base_url, DEVOPS_ORGANIZATION, DEVOPS_PROJECT, WORK_ITEM_TYPE, WIT_API_VERSION
    )
}

/// Two-operation JSON-patch document: a fixed title, then the submission
/// JSON text as the description value.
pub fn patch_document(json_data: &str) -> Vec<PatchOp> {
    vec![
        PatchOp {
            op: "add",
            path: "/fields/System.Title",
            value: WORK_ITEM_TITLE.to_string(),
        },
        PatchOp {
            op: "add",
            path: "/fields/System.Description",
            value: json_data.to_string(),
        },
    ]
}

/// Basic auth value for a PAT: empty username, colon, token, base64'd.
pub fn basic_auth_header(pat: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!(":{}", pat)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_document_sets_title_then_description() {
        let doc = patch_document(r#"{"User ID":"alice"}"#);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc[0].op, "add");
        assert_eq!(doc[0].path, "/fields/System.Title");
        assert_eq!(doc[0].value, WORK_ITEM_TITLE);
        assert_eq!(doc[1].path, "/fields/System.Description");
        // The submission JSON is embedded as a string, not merged.
        assert_eq!(doc[1].value, r#"{"User ID":"alice"}"#);
    }

    #[test]
    fn patch_document_serializes_as_op_path_value() {
        let doc = patch_document("body");
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(
            json,
            r#"[{"op":"add","path":"/fields/System.Title","value":"Vidbot Test Task"},{"op":"add","path":"/fields/System.Description","value":"body"}]"#
        );
    }

    #[test]
    fn basic_auth_encodes_empty_user_and_token() {
        assert_eq!(basic_auth_header("secret"), "Basic OnNlY3JldA==");
        assert_eq!(basic_auth_header("pat-123"), "Basic OnBhdC0xMjM=");
    }

    #[test]
    fn work_item_url_targets_fixed_org_and_project() {
        assert_eq!(
            work_item_url(DEVOPS_BASE_URL),
            "https://dev.azure.com/contoso-jml/vidbot-teams/_apis/wit/workitems/$task?api-version=6.0"
        );
    }
}
