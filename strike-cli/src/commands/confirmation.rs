use std::process::ExitCode;
use strike_core::ConfirmationView;
use strike_store::{app_config::Config, FileSessionStore};

/// No navigation hand-off exists across invocations, so only the session slot is read.
pub fn run(config: &Config) -> anyhow::Result<ExitCode> {
    let store = FileSessionStore::new(&config.session.dir);
    println!("{}", ConfirmationView::resolve(None, &store));
    Ok(ExitCode::SUCCESS)
}
