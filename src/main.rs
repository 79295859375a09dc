use clap::Parser;
use picker::core::clock::run_clock;
use picker::core::picker::check_delivery_date;
use picker::core::render::to_text;
use picker::domain::ports::Clock;
use picker::utils::error::ErrorSeverity;
use picker::utils::{logger, validation::Validate};
use picker::{
    CliConfig, Command, FixedClock, HttpShipmentSource, Picker, PickerError, SystemClock,
};
use std::sync::Arc;

fn clock_for(today: Option<chrono::NaiveDate>) -> Arc<dyn Clock> {
    match today {
        Some(date) => Arc::new(FixedClock::at_date(date)),
        None => Arc::new(SystemClock),
    }
}

fn exit_code(error: &PickerError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report(error: &PickerError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        error,
        error.category(),
        error.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", error.recovery_suggestion());
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());
    std::process::exit(exit_code(error));
}

async fn run(config: CliConfig) -> picker::Result<()> {
    match config.command.clone() {
        Command::Clock { ticks } => {
            run_clock(&SystemClock, ticks, |reading| {
                println!("{}  {}", reading.date, reading.time);
            })
            .await;
        }
        Command::Check { date, today } => {
            let accepted = check_delivery_date(clock_for(today).as_ref(), date.as_deref())?;
            println!("✅ Delivery on {} accepted", accepted.format("%d.%m.%Y"));
        }
        Command::Submit { date, today } => {
            let settings = config.source_settings()?;
            settings.validate()?;
            tracing::debug!("Source settings: {:?}", settings);

            let source = HttpShipmentSource::new(&settings)?;
            let mut picker = Picker::new(source, clock_for(today));
            let submission = picker.submit(date.as_deref()).await?;

            println!(
                "✅ Delivery on {} accepted",
                submission.delivery_date.format("%d.%m.%Y")
            );
            println!("\n== Unsortiert ==");
            print!("{}", to_text(&submission.views.unsorted));
            println!("\n== Sortiert ==");
            print!("{}", to_text(&submission.views.sorted));
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting picker");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(config).await {
        report(&e);
    }

    Ok(())
}
