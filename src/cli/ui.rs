use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// How a line of terminal output is emphasised.
pub enum Tone {
    Heading,
    Emphasis,
    Amount,
    Warning,
    Hint,
}

pub fn paint(text: &str, tone: Tone) -> String {
    let styled = style(text);
    match tone {
        Tone::Heading => styled.bold().underlined(),
        Tone::Emphasis => styled.bold(),
        Tone::Amount => styled.yellow().bold(),
        Tone::Warning => styled.red(),
        Tone::Hint => styled.dim(),
    }
    .to_string()
}

/// Rounded table that wraps to the terminal width.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn header_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

pub fn amount_cell(text: &str) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Cell for a change in spending. More spending is red, less is green.
pub fn change_cell(change: f64, text: &str) -> Cell {
    let color = match change.partial_cmp(&0.0) {
        Some(std::cmp::Ordering::Greater) => Color::Red,
        Some(std::cmp::Ordering::Less) => Color::Green,
        _ => Color::DarkGrey,
    };
    amount_cell(text).fg(color)
}

/// Full-width rule between output blocks.
pub fn print_separator() {
    let width = console::Term::stdout()
        .size_checked()
        .map_or(80, |(_, cols)| usize::from(cols));
    println!("\n{}", "─".repeat(width));
}
