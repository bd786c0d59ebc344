// Entrypoint for the CLI application.
// - Keeps `main` small: load configuration and hand it to the UI flow.
// - Returns `anyhow::Result` so transport failures terminate with a
//   readable error; non-200 submission statuses exit normally.

use vidbot_intake_cli::{config::Config, ui};

fn main() -> anyhow::Result<()> {
    // Snapshot environment configuration (plus an optional .env file)
    // once; see `config::Config::from_env`. Missing variables only fail
    // when the call that needs them is made.
    let config = Config::from_env();

    // Run the sequential flow. This call blocks until it completes.
    ui::run(&config)?;
    Ok(())
}
