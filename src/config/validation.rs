use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.separator.is_empty() {
        errors.push("separator: must not be empty".to_string());
    }

    if config.output_suffix.is_empty() {
        errors.push("output_suffix: must not be empty".to_string());
    } else if config
        .output_suffix
        .chars()
        .any(|c| c == '/' || c == '\\' || std::path::is_separator(c))
    {
        errors.push(format!(
            "output_suffix: '{}' must not contain a path separator",
            config.output_suffix
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
