/// Reads an on/off switch the way HTML checkboxes and env files spell it.
/// Returns `None` for anything unrecognised.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_checkbox_and_boolean_spellings() {
        for raw in ["on", "true", "1", "yes", " TRUE "] {
            assert_eq!(parse_flag(raw), Some(true), "{}", raw);
        }
        for raw in ["off", "false", "0", "no"] {
            assert_eq!(parse_flag(raw), Some(false), "{}", raw);
        }
        assert_eq!(parse_flag("maybe"), None);
    }
}
