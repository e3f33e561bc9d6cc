// Copyright 2025 Irreducible Inc.

const TRUE_VALUES: [&str; 4] = ["1", "on", "true", "yes"];
const FALSE_VALUES: [&str; 4] = ["0", "off", "false", "no"];

/// Parses a boolean flag value, case-insensitively. Unrecognized values yield `None`.
pub fn parse_flag(value: &str) -> Option<bool> {
	let value = value.trim().to_ascii_lowercase();
	if TRUE_VALUES.contains(&value.as_str()) {
		Some(true)
	} else if FALSE_VALUES.contains(&value.as_str()) {
		Some(false)
	} else {
		None
	}
}

/// Read boolean flag from the environment variable. Unset or unrecognized means `false`.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match std::env::var(flag) {
		Ok(val) => parse_flag(&val).unwrap_or_else(|| {
			tracing::warn!(flag, value = %val, "ignoring unrecognized boolean flag value");
			false
		}),
		Err(_) => false,
	}
}
