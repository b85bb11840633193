//! Robot operating modes.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use desk_protocol::{EXECUTION_MODE, PROGRAMMING_MODE};
use serde::{Deserialize, Serialize};

/// Robot operating mode as reported by Desk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OperatingMode {
	/// Ready for motion; required before FCI can drive the arm.
	Execution,
	/// Hand-guiding and teaching.
	Programming,
	/// Any mode name this client does not know.
	Other(String),
}

impl OperatingMode {
	pub fn as_str(&self) -> &str {
		match self {
			OperatingMode::Execution => EXECUTION_MODE,
			OperatingMode::Programming => PROGRAMMING_MODE,
			OperatingMode::Other(name) => name,
		}
	}
}

impl From<String> for OperatingMode {
	fn from(name: String) -> Self {
		match name.as_str() {
			EXECUTION_MODE => OperatingMode::Execution,
			PROGRAMMING_MODE => OperatingMode::Programming,
			_ => OperatingMode::Other(name),
		}
	}
}

impl From<OperatingMode> for String {
	fn from(mode: OperatingMode) -> Self {
		match mode {
			OperatingMode::Other(name) => name,
			known => known.as_str().to_string(),
		}
	}
}

impl FromStr for OperatingMode {
	type Err = Infallible;

	/// Case-insensitive for the known modes, verbatim otherwise.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s.to_lowercase().as_str() {
			"execution" => OperatingMode::Execution,
			"programming" => OperatingMode::Programming,
			_ => OperatingMode::Other(s.to_string()),
		})
	}
}

impl fmt::Display for OperatingMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
