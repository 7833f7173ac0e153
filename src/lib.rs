pub mod cli;
pub mod context;
pub mod core;
pub mod store;

use crate::context::AppContext;
use crate::core::config::AppConfig;
use crate::core::format::Preset;
use crate::core::period::ViewMode;
use crate::core::settings::SettingsUpdate;
use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub enum AppCommand {
    Add {
        amount: f64,
        description: String,
        date: Option<String>,
    },
    Edit {
        id: String,
        amount: f64,
        description: String,
    },
    Delete {
        id: String,
    },
    List {
        view: Option<String>,
        date: Option<String>,
    },
    Summary,
    Settings {
        update: SettingsUpdate,
        reset: bool,
    },
    Currencies,
    Clear,
    Format {
        amount: f64,
        preset: Option<String>,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("spendlog starting...");

    if let AppCommand::Currencies = command {
        return cli::settings::list_currencies();
    }

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let mut ctx = AppContext::open(config).await?;
    let now = Utc::now();
    let today = ctx.today(now);

    match command {
        AppCommand::Add {
            amount,
            description,
            date,
        } => {
            let date = date
                .map(|d| cli::parse_date(&d, today))
                .transpose()?;
            cli::expenses::add(&ctx, amount, &description, date, now).await?;
        }
        AppCommand::Edit {
            id,
            amount,
            description,
        } => {
            cli::expenses::edit(&ctx, &id, amount, &description).await?;
        }
        AppCommand::Delete { id } => {
            cli::expenses::delete(&ctx, &id).await?;
        }
        AppCommand::List { view, date } => {
            let mode = match view {
                Some(view) => view.parse::<ViewMode>()?,
                None => ctx.config.default_view,
            };
            let selected = match date {
                Some(d) => cli::parse_date(&d, today)?,
                None => today,
            };
            cli::list::run(&ctx, mode, selected, now).await?;
        }
        AppCommand::Summary => cli::summary::run(&ctx, now).await?,
        AppCommand::Settings { update, reset } => {
            cli::settings::run(&mut ctx, update, reset).await?;
        }
        AppCommand::Clear => cli::expenses::clear(&ctx).await?,
        AppCommand::Format { amount, preset } => {
            let preset = preset.map(|p| p.parse::<Preset>()).transpose()?;
            cli::format::run(amount, preset, &ctx.formatter())?;
        }
        AppCommand::Currencies => {}
    }

    Ok(())
}
