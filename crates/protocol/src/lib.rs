//! Wire types for the Franka Desk HTTP API.
//!
//! Desk is the web control panel served by the robot controller. Every request
//! is authenticated with HTTP Basic credentials; requests that change robot
//! state additionally carry the control token handed out by
//! [`endpoints::TAKE_CONTROL`] in the [`CONTROL_TOKEN_HEADER`] header.
//!
//! # Main Types
//!
//! - [`TakeControlRequest`] / [`TakeControlResponse`] - control token exchange
//! - [`ChangeOperatingModeRequest`] - operating mode switch
//! - [`OperatingModeResponse`] - current operating mode
//! - [`JointState`] - per-joint brake status

pub mod endpoints;

use serde::{Deserialize, Serialize};

/// Header carrying the control token on control-gated requests.
pub const CONTROL_TOKEN_HEADER: &str = "X-Control-Token";

/// Operating mode name Desk reports once the robot is ready to move.
pub const EXECUTION_MODE: &str = "Execution";

/// Operating mode name for hand-guided programming.
pub const PROGRAMMING_MODE: &str = "Programming";

/// Body of [`endpoints::TAKE_CONTROL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeControlRequest {
	/// Name shown in Desk as the current owner of the robot.
	pub owner: String,
}

/// Response of [`endpoints::TAKE_CONTROL`].
///
/// Desk omits `token` when control could not be granted even though the
/// request itself succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeControlResponse {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub token: Option<String>,
}

/// Body of [`endpoints::CHANGE_OPERATING_MODE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeOperatingModeRequest {
	/// Target mode, e.g. [`EXECUTION_MODE`].
	pub desired_operating_mode: String,
}

/// Response of [`endpoints::OPERATING_MODE`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingModeResponse {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
}

/// One element of the [`endpoints::JOINTS`] array.
///
/// Only the brake status is modelled; remaining fields are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JointState {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub brake_status: Option<String>,
	#[serde(flatten)]
	pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn take_control_response_without_token() {
		let resp: TakeControlResponse = serde_json::from_value(json!({})).unwrap();
		assert_eq!(resp.token, None);

		let resp: TakeControlResponse = serde_json::from_value(json!({ "token": "abc" })).unwrap();
		assert_eq!(resp.token.as_deref(), Some("abc"));
	}

	#[test]
	fn change_mode_uses_camel_case() {
		let body = ChangeOperatingModeRequest {
			desired_operating_mode: EXECUTION_MODE.to_string(),
		};
		assert_eq!(
			serde_json::to_value(&body).unwrap(),
			json!({ "desiredOperatingMode": "Execution" })
		);
	}

	#[test]
	fn joint_state_keeps_unknown_fields() {
		let joints: Vec<JointState> = serde_json::from_value(json!([
			{ "brakeStatus": "Open", "index": 0 },
			{ "index": 1 }
		]))
		.unwrap();

		assert_eq!(joints[0].brake_status.as_deref(), Some("Open"));
		assert_eq!(joints[0].extra.get("index"), Some(&json!(0)));
		assert_eq!(joints[1].brake_status, None);
	}
}
