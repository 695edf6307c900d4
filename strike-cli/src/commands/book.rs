//! `strike book`: the booking form, driven by flags.

use clap::Args;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use strike_core::{BookingForm, ConfirmationView, HttpBookingClient};
use strike_store::{app_config::Config, FileSessionStore};

use super::quote::format_quote;

#[derive(Args)]
pub struct BookArgs {
    /// Date, YYYY-MM-DD
    #[arg(long)]
    date: Option<String>,

    /// Time, HH:MM
    #[arg(long)]
    time: Option<String>,

    /// Number of players
    #[arg(short, long)]
    people: Option<String>,

    /// Number of lanes
    #[arg(short, long)]
    lanes: Option<String>,

    /// Shoe size, once per player
    #[arg(long = "shoe")]
    shoes: Vec<String>,
}

pub async fn run(config: &Config, args: BookArgs) -> anyhow::Result<ExitCode> {
    let client = HttpBookingClient::new(
        &config.api.base_url,
        config.api.timeout_seconds.map(Duration::from_secs),
    )?;
    let store = Arc::new(FileSessionStore::new(&config.session.dir));
    let mut form = BookingForm::new(Arc::new(client), store.clone(), config.pricing.clone());

    // Absent flags behave like empty form fields.
    let draft = form.draft_mut();
    draft.set_date(args.date.as_deref().unwrap_or_default());
    draft.set_time(args.time.as_deref().unwrap_or_default());
    draft.set_people(args.people.as_deref().unwrap_or_default());
    draft.set_lanes(args.lanes.as_deref().unwrap_or_default());
    for size in &args.shoes {
        let id = form.add_shoe();
        form.update_shoe_size(&id, size);
    }

    if let (Some(quote), Some(people), Some(lanes)) =
        (form.preview(), form.draft().people, form.draft().lanes)
    {
        println!("{}", format_quote(&quote, people, lanes));
    }

    match form.submit().await {
        Ok(record) => {
            println!("{}", ConfirmationView::resolve(Some(record), store.as_ref()));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
