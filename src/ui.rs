// UI layer: runs the sequential interactive flow using `dialoguer`.
// Every prompt substitutes the default "Y" for empty input and re-asks
// until its validator accepts, so a value returned from a prompt is
// already valid. Pressing Esc surfaces an error and ends the run.

use crate::api::{ChatClient, WorkItemClient};
use crate::config::Config;
use crate::submission::{validate_bgpas_number, validate_region, Submission};
use anyhow::Result;
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::StatusCode;

/// Run the whole flow: chat demonstration call, field collection,
/// confirmation, then work-item submission. Blocks until finished.
pub fn run(config: &Config) -> Result<()> {
    greet(config)?;

    // User ID takes any value; the default applies like everywhere else.
    let user_id = get_user_input("Enter your User ID", |_| true)?;
    println!("You entered User ID: {}", user_id);

    let bgpas_number = get_user_input(
        "Enter your BGPAS Number (5 numeric digits)",
        validate_bgpas_number,
    )?;
    // Guard behind the prompt loop; unreachable unless the loop changes.
    if !validate_bgpas_number(&bgpas_number) {
        println!("Invalid BGPAS Number. It should be 5 numeric digits.");
        return Ok(());
    }

    let region = get_user_input("Enter your Region (east-us or west-us)", validate_region)?;
    if !validate_region(&region) {
        println!("Invalid Region. It should be either 'east-us' or 'west-us'.");
        return Ok(());
    }

    println!(
        "Summary of your inputs:\nUser ID: {}\nBGPAS Number: {}\nRegion: {}",
        user_id, bgpas_number, region
    );
    // Empty input falls through to the default and counts as yes.
    let confirmed = Confirm::new()
        .with_prompt("Confirm?")
        .default(true)
        .interact()?;
    if !confirmed {
        println!("Aborted by user.");
        return Ok(());
    }

    let record = Submission {
        user_id,
        bgpas_number,
        region,
    };
    let json_data = record.to_json()?;
    println!("JSON data to be sent to Azure DevOps API: {}", json_data);

    submit(config, &json_data)
}

/// Prompt for one value, substituting "Y" for empty input, and re-ask
/// until the validator accepts. Esc/Ctrl-C ends the loop with an error
/// instead of spinning forever.
fn get_user_input(prompt: &str, validator: impl Fn(&str) -> bool) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        let value = if input.is_empty() { "Y".to_string() } else { input };
        if validator(&value) {
            return Ok(value);
        }
        println!("Invalid input.");
    }
}

/// Demonstration chat-completion call; prints the model's reply.
fn greet(config: &Config) -> Result<()> {
    let chat = ChatClient::from_config(config)?;
    let spinner = spinner("Contacting assistant...");
    let reply = chat.request_greeting();
    spinner.finish_and_clear();
    println!("{}", reply?);
    Ok(())
}

/// POST the serialized submission and report the outcome by status code.
/// Only an exact 200 counts as success; transport failures are fatal.
fn submit(config: &Config, json_data: &str) -> Result<()> {
    let work_items = WorkItemClient::from_config(config)?;
    let spinner = spinner("Submitting...");
    let status = work_items.create_task(json_data);
    spinner.finish_and_clear();
    match status? {
        StatusCode::OK => println!("Data successfully sent to Azure DevOps API."),
        other => println!(
            "Failed to send data to Azure DevOps API. Status code: {}",
            other.as_u16()
        ),
    }
    Ok(())
}

fn spinner(msg: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(msg);
    spinner
}
