//! Terminal driver for the GoBarber screens.
//!
//! ```text
//! gobarber                              list providers
//! gobarber <provider-id> [YYYY-MM-DD]   show the provider's hours for a day
//! gobarber <provider-id> <YYYY-MM-DD> <hour>   book that hour
//! ```

use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};
use color_eyre::eyre::{eyre, Result, WrapErr};
use dotenv::dotenv;
use gobarber_client::{create_client, SharedApi};
use gobarber_core::slots::DisplaySlot;
use gobarber_screens::{
    auth::AuthContext,
    config::AppConfig,
    navigation::{self, Route, Signal},
    runtime::AppointmentScreen,
    screens::{create_appointment::Platform, dashboard::Dashboard},
};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let api = create_client(&config.client)?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [] => list_providers(api).await,
        [provider_id, rest @ ..] => {
            let date = match rest.first() {
                Some(day) => parse_day(day)?,
                None => Local::now().naive_local(),
            };
            let hour = rest
                .get(1)
                .map(|hour| hour.parse::<u32>().wrap_err("Hour must be a number"))
                .transpose()?;
            book(api, config.platform, provider_id, date, hour).await
        }
    }
}

async fn list_providers(api: SharedApi) -> Result<()> {
    let (navigator, _signals) = navigation::channel();
    let mut dashboard = Dashboard::new(api, Arc::new(navigator), AuthContext::default());

    dashboard.load().await;
    if dashboard.load_failed() {
        return Err(eyre!("Could not load providers"));
    }

    for provider in dashboard.providers() {
        println!("{}  {}", provider.id, provider.name);
    }
    Ok(())
}

async fn book(
    api: SharedApi,
    platform: Platform,
    provider_id: &str,
    date: NaiveDateTime,
    hour: Option<u32>,
) -> Result<()> {
    let (navigator, mut signals) = navigation::channel();
    let mut screen = AppointmentScreen::open_at(api, Arc::new(navigator), provider_id, platform, date);
    screen.settle().await;

    let model = screen.model();
    if model.availability_failed() {
        return Err(eyre!("Could not load availability for {}", provider_id));
    }
    if let Some(provider) = model.selected_provider() {
        println!("{} on {}", provider.name, date.date());
    }
    print_section("Morning", &model.morning_slots());
    print_section("Afternoon", &model.afternoon_slots());

    let Some(hour) = hour else {
        return Ok(());
    };
    screen.select_hour(hour);
    screen.submit();
    screen.settle().await;

    report(&mut signals)
}

fn print_section(title: &str, slots: &[DisplaySlot]) {
    println!("{}:", title);
    for slot in slots {
        let marker = if slot.available { "" } else { " (taken)" };
        println!("  {}{}", slot.label, marker);
    }
}

fn report(signals: &mut UnboundedReceiver<Signal>) -> Result<()> {
    while let Ok(signal) = signals.try_recv() {
        match signal {
            Signal::Navigate(Route::AppointmentCreated { date }) => {
                info!("Appointment booked");
                println!("Booked for {}", date.format("%Y-%m-%d %H:%M"));
            }
            Signal::Alert(alert) => return Err(eyre!("{}: {}", alert.title, alert.message)),
            other => info!("Ignoring signal {:?}", other),
        }
    }
    Ok(())
}

fn parse_day(value: &str) -> Result<NaiveDateTime> {
    let day = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .wrap_err_with(|| format!("Invalid date {}, expected YYYY-MM-DD", value))?;
    let now = Local::now().naive_local();

    Ok(day.and_time(now.time()))
}
