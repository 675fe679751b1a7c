use crate::server::error::config::ConfigError;

/// Parses a TCP port from an environment variable value
///
/// # Arguments
/// - `name` - Name of the environment variable, used in the error
/// - `value` - The raw value to attempt to parse into `u16`
///
/// # Returns
/// - `Ok(u16)` - Successfully parsed port
/// - `Err(ConfigError::InvalidEnvVar)` - Value is not a number between 0 and 65535
pub fn parse_port(name: &str, value: String) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
            value,
        })
}

/// Checks that a host value isn't blank
///
/// # Returns
/// - `Ok(String)` - The trimmed host
/// - `Err(ConfigError::InvalidEnvVar)` - Value is empty or whitespace
pub fn parse_host(name: &str, value: String) -> Result<String, ConfigError> {
    let host = value.trim();
    if host.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: "host must not be empty".to_string(),
        });
    }

    Ok(host.to_string())
}
