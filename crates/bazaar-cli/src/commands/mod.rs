pub mod completions;
pub mod demo;
pub mod shell;
pub mod tui;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

pub fn json_pretty(value: &impl serde::Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}

pub fn format_money(amount: f64) -> String {
    format!("{amount:.2}")
}

pub fn ok_line(msg: &str) -> String {
    use console::Style;
    format!("{} {msg}", Style::new().green().apply_to("✓"))
}

pub fn err_line(msg: &str) -> String {
    use console::Style;
    format!("{} {msg}", Style::new().red().apply_to("✗"))
}

pub fn colorize_stock(stock: u32) -> String {
    use console::Style;
    let rendered = stock.to_string();
    match stock {
        0 => Style::new().red().apply_to(rendered).to_string(),
        1..=3 => Style::new().yellow().apply_to(rendered).to_string(),
        _ => Style::new().green().apply_to(rendered).to_string(),
    }
}
