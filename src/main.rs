use business_hours::core::ConfigProvider;
use business_hours::utils::{error::HoursError, logger, validation::Validate};
use business_hours::{BrasilApiHolidays, CliConfig, HolidayOracle, HoursService, StaticHolidays};
use clap::Parser;
use std::sync::Arc;

const SCHEDULE_DEMO: [&str; 3] = ["30/12/2025 10:15", "30/12/2025 21:00", "28/12/2025 14:00"];
const HOLIDAY_DEMO: [&str; 3] = ["25/12/2025 14:00", "01/01/2026 09:00", "05/06/2025 10:00"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    if let Err(e) = config.load_config_file() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    match run(&config).await {
        Ok(None) => Ok(()),
        Ok(Some(code)) => std::process::exit(code),
        Err(e) => fail(&e),
    }
}

fn fail(e: &HoursError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

/// Returns the exit code to use when some timestamps could not be evaluated.
async fn run(config: &CliConfig) -> business_hours::Result<Option<i32>> {
    let local = StaticHolidays::new(config.local_holidays.clone());
    let api = if config.offline {
        if local.is_empty() {
            tracing::warn!("Offline mode without local holidays; only the schedule applies");
        } else {
            tracing::info!("Offline mode: {} local holidays", local.len());
        }
        None
    } else {
        Some(Arc::new(BrasilApiHolidays::from_config(config)?))
    };

    if let Some(year) = config.list_year {
        let holidays = match &api {
            Some(api) => api.holidays_for_year(year).await?.to_vec(),
            None => local.for_year(year),
        };
        for holiday in holidays {
            println!("{}  {}", holiday.date, holiday.name);
        }
        return Ok(None);
    }

    let oracle: Arc<dyn HolidayOracle> = match api {
        Some(api) => api as Arc<dyn HolidayOracle>,
        None => Arc::new(local),
    };
    let service = HoursService::new(oracle).with_lookup_timeout(config.lookup_timeout());

    if config.timestamps.is_empty() {
        println!("--- Schedule only ---");
        for timestamp in SCHEDULE_DEMO {
            println!("{}", service.evaluate(timestamp)?.labelled(timestamp));
        }
        println!();
        println!("--- With holidays ---");
        for timestamp in HOLIDAY_DEMO {
            println!("{}", service.evaluate_labelled(timestamp, true).await?);
        }
        return Ok(None);
    }

    let mut exit_code = None;
    for timestamp in &config.timestamps {
        match service
            .evaluate_labelled(timestamp, config.holiday_aware())
            .await
        {
            Ok(line) => println!("{}", line),
            Err(e) => {
                tracing::error!("❌ {} (Category: {:?})", e, e.category());
                eprintln!("❌ {}", e.user_friendly_message());
                exit_code.get_or_insert(e.exit_code());
            }
        }
    }

    Ok(exit_code)
}
