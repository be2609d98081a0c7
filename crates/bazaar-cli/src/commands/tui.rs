use super::EXIT_SUCCESS;

pub fn run(json: bool) -> Result<u8, String> {
    if json {
        return Err("JSON output is not supported for 'tui'".to_owned());
    }
    bazaar_tui::run()?;
    Ok(EXIT_SUCCESS)
}
