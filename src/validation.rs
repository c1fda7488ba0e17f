use crate::error::ConfigInputError;

pub const MIN_CONFIG_LEN: usize = 10;

/// Trims the pasted text and checks it is long enough to be a configuration.
/// Length is counted in characters, not bytes.
pub fn validate_config_input(raw: &str) -> Result<String, ConfigInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigInputError::Empty);
    }
    if trimmed.chars().count() < MIN_CONFIG_LEN {
        return Err(ConfigInputError::TooShort {
            min: MIN_CONFIG_LEN,
        });
    }
    Ok(trimmed.to_string())
}
