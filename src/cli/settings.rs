use super::ui;
use crate::context::AppContext;
use crate::core::currency::CURRENCIES;
use crate::core::settings::{SettingsUpdate, UserSettings};
use anyhow::Result;
use comfy_table::Cell;

impl UserSettings {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![ui::header_cell("Setting"), ui::header_cell("Value")]);

        let timezone = if self.timezone.is_empty() {
            "not set (UTC)".to_string()
        } else {
            self.timezone.clone()
        };
        table.add_row(vec![Cell::new("Timezone"), Cell::new(timezone)]);
        table.add_row(vec![Cell::new("Currency"), Cell::new(&self.currency)]);
        table.add_row(vec![Cell::new("Symbol"), Cell::new(&self.currency_symbol)]);
        table.add_row(vec![
            Cell::new("Setup complete"),
            Cell::new(if self.is_setup_complete { "yes" } else { "no" }),
        ]);
        table.to_string()
    }
}

/// Shows settings, or applies `update` / a reset first when requested.
pub async fn run(ctx: &mut AppContext, update: SettingsUpdate, reset: bool) -> Result<()> {
    if reset {
        ctx.settings = ctx.settings_store.reset().await?;
        println!("{}", ui::paint("Settings reset", ui::Tone::Hint));
    } else if !update.is_empty() {
        ctx.settings = ctx.settings_store.update(&ctx.settings, update).await?;
        println!("{}", ui::paint("Settings updated", ui::Tone::Emphasis));
    } else if !ctx.settings.is_setup_complete {
        println!(
            "{}",
            ui::paint(
                "Setup is not complete. Run `spendlog settings --timezone <IANA name>`.",
                ui::Tone::Warning
            )
        );
    }

    println!("{}", ctx.settings.display_as_table());
    Ok(())
}

pub fn list_currencies() -> Result<()> {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Name"),
        ui::header_cell("Symbol"),
    ]);
    for currency in CURRENCIES {
        table.add_row(vec![
            Cell::new(currency.code),
            Cell::new(currency.name),
            Cell::new(currency.symbol),
        ]);
    }
    println!("{table}");
    Ok(())
}
