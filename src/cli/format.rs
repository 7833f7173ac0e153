use super::ui;
use crate::core::format::{CurrencyFormatter, Preset};
use anyhow::Result;
use comfy_table::Cell;

/// Renders `amount` with one preset, or with every preset as a table.
pub fn render(amount: f64, preset: Option<Preset>, formatter: &CurrencyFormatter) -> String {
    if let Some(preset) = preset {
        return preset.format(amount, formatter.symbol());
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Preset"), ui::header_cell("Output")]);
    for preset in Preset::ALL {
        table.add_row(vec![
            Cell::new(preset.to_string()),
            ui::amount_cell(&preset.format(amount, formatter.symbol())),
        ]);
    }
    table.to_string()
}

pub fn run(amount: f64, preset: Option<Preset>, formatter: &CurrencyFormatter) -> Result<()> {
    println!("{}", render(amount, preset, formatter));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_preset() {
        let formatter = CurrencyFormatter::new("$");
        assert_eq!(
            render(1234.56, Some(Preset::Detailed), &formatter),
            "$1,234.56"
        );
    }

    #[test]
    fn test_render_all_presets() {
        let formatter = CurrencyFormatter::new("$");
        let output = render(1234.56, None, &formatter);
        assert!(output.contains("compact"));
        assert!(output.contains("$1.235K"));
        assert!(output.contains("$1.2346K"));
        assert!(output.contains("$1,234.56"));
    }
}
