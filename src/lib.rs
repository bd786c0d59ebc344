// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the sequential flow.
//
// Module responsibilities:
// - `config`: Explicit environment-backed configuration struct, built
//   once at startup and passed by reference.
// - `api`: Blocking HTTP clients for the chat-completions gateway and
//   the Azure DevOps work-item API.
// - `submission`: The submission record, its validators and its JSON
//   serialization.
// - `ui`: The terminal prompts and the run of the whole flow.
//
// Keeping this separation makes the validators and payload builders
// testable without touching the network or the terminal.
pub mod api;
pub mod config;
pub mod submission;
pub mod ui;
