//! In-process fake of the Desk HTTP API.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use desk::{Credentials, DeskClient, DeskConfig};
use desk_protocol::{CONTROL_TOKEN_HEADER, endpoints};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::{Mutex, MutexGuard};
use tokio::task::JoinHandle;

pub const USERNAME: &str = "franka";
pub const PASSWORD: &str = "correct horse";
pub const JOINT_COUNT: usize = 7;

#[derive(Debug)]
pub struct DeskState {
	pub username: String,
	pub password: String,
	pub owner: Option<String>,
	pub token: Option<String>,
	pub tokens_issued: u32,
	pub brakes_open: bool,
	pub fci_active: bool,
	pub mode: String,
	/// `METHOD path` of every request, in arrival order.
	pub requests: Vec<String>,
	/// Paths answered with a fixed status before any other check.
	pub failures: HashMap<&'static str, StatusCode>,
	pub omit_token: bool,
	/// Operating mode reads answered 503 after a reboot.
	pub boot_polls: u32,
	pub boot_polls_remaining: u32,
}

impl Default for DeskState {
	fn default() -> Self {
		Self {
			username: USERNAME.into(),
			password: PASSWORD.into(),
			owner: None,
			token: None,
			tokens_issued: 0,
			brakes_open: false,
			fci_active: false,
			mode: "Execution".into(),
			requests: Vec::new(),
			failures: HashMap::new(),
			omit_token: false,
			boot_polls: 2,
			boot_polls_remaining: 0,
		}
	}
}

impl DeskState {
	pub fn paths(&self) -> Vec<&str> {
		self.requests
			.iter()
			.filter_map(|r| r.split_once(' ').map(|(_, path)| path))
			.collect()
	}
}

type Shared = Arc<Mutex<DeskState>>;

pub struct FakeDesk {
	pub addr: SocketAddr,
	state: Shared,
	server: JoinHandle<()>,
}

impl FakeDesk {
	pub async fn start() -> Self {
		let state: Shared = Arc::new(Mutex::new(DeskState::default()));
		let app = Router::new().fallback(handle).with_state(state.clone());

		let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind fake desk");
		let addr = listener.local_addr().expect("fake desk address");
		let server = tokio::spawn(async move {
			axum::serve(listener, app).await.expect("fake desk server");
		});

		Self { addr, state, server }
	}

	pub async fn state(&self) -> MutexGuard<'_, DeskState> {
		self.state.lock().await
	}

	pub fn base_url(&self) -> String {
		format!("http://{}", self.addr)
	}

	pub fn config(&self, robot: &str) -> DeskConfig {
		DeskConfig::new(robot, Credentials::new(USERNAME, PASSWORD)).base_url(self.base_url())
	}

	pub fn client(&self, robot: &str) -> DeskClient {
		DeskClient::new(self.config(robot)).expect("client")
	}

	pub fn client_with(&self, robot: &str, credentials: Credentials) -> DeskClient {
		let config = DeskConfig::new(robot, credentials).base_url(self.base_url());
		DeskClient::new(config).expect("client")
	}
}

impl Drop for FakeDesk {
	fn drop(&mut self) {
		self.server.abort();
	}
}

fn authorized(headers: &HeaderMap, desk: &DeskState) -> bool {
	let Some(value) = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) else {
		return false;
	};
	let Some(encoded) = value.strip_prefix("Basic ") else {
		return false;
	};
	let Ok(decoded) = STANDARD.decode(encoded) else {
		return false;
	};
	let expected = format!("{}:{}", desk.username, desk.password);
	String::from_utf8(decoded).is_ok_and(|pair| pair == expected)
}

fn holds_control(headers: &HeaderMap, desk: &DeskState) -> bool {
	let sent = headers.get(CONTROL_TOKEN_HEADER).and_then(|v| v.to_str().ok());
	sent.is_some() && sent == desk.token.as_deref()
}

async fn handle(
	State(state): State<Shared>,
	method: Method,
	uri: Uri,
	headers: HeaderMap,
	body: Bytes,
) -> Response {
	let mut desk = state.lock().await;
	let path = uri.path().to_string();
	desk.requests.push(format!("{method} {path}"));

	if let Some(status) = desk.failures.get(path.as_str()) {
		return (*status, "forced failure").into_response();
	}
	if !authorized(&headers, &desk) {
		return StatusCode::UNAUTHORIZED.into_response();
	}

	let gated = [
		endpoints::UNLOCK_JOINTS,
		endpoints::LOCK_JOINTS,
		endpoints::ACTIVATE_FCI,
		endpoints::DEACTIVATE_FCI,
		endpoints::CHANGE_OPERATING_MODE,
	];
	if gated.contains(&path.as_str()) && !holds_control(&headers, &desk) {
		return (StatusCode::FORBIDDEN, "control token required").into_response();
	}

	let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

	match (method.as_str(), path.as_str()) {
		("GET", endpoints::OPERATING_MODE) => {
			if desk.boot_polls_remaining > 0 {
				desk.boot_polls_remaining -= 1;
				return StatusCode::SERVICE_UNAVAILABLE.into_response();
			}
			Json(json!({ "status": desk.mode })).into_response()
		}
		("GET", endpoints::JOINTS) => {
			let brake = if desk.brakes_open { "Open" } else { "Closed" };
			let joints: Vec<Value> = (0..JOINT_COUNT)
				.map(|index| json!({ "index": index, "brakeStatus": brake }))
				.collect();
			Json(Value::Array(joints)).into_response()
		}
		("POST", endpoints::TAKE_CONTROL) => {
			desk.tokens_issued += 1;
			let token = format!("token-{}", desk.tokens_issued);
			desk.token = Some(token.clone());
			desk.owner = body["owner"].as_str().map(str::to_string);
			if desk.omit_token {
				Json(json!({})).into_response()
			} else {
				Json(json!({ "token": token })).into_response()
			}
		}
		("POST", endpoints::UNLOCK_JOINTS) => {
			if desk.brakes_open {
				return (StatusCode::INTERNAL_SERVER_ERROR, "brakes already open").into_response();
			}
			desk.brakes_open = true;
			StatusCode::OK.into_response()
		}
		("POST", endpoints::LOCK_JOINTS) => {
			desk.brakes_open = false;
			StatusCode::OK.into_response()
		}
		("POST", endpoints::ACTIVATE_FCI) => {
			if desk.fci_active {
				return (StatusCode::INTERNAL_SERVER_ERROR, "FCI already active").into_response();
			}
			desk.fci_active = true;
			StatusCode::OK.into_response()
		}
		("POST", endpoints::DEACTIVATE_FCI) => {
			desk.fci_active = false;
			StatusCode::OK.into_response()
		}
		("POST", endpoints::CHANGE_OPERATING_MODE) => {
			match body["desiredOperatingMode"].as_str() {
				Some(mode) => {
					desk.mode = mode.to_string();
					StatusCode::OK.into_response()
				}
				None => (StatusCode::BAD_REQUEST, "missing desiredOperatingMode").into_response(),
			}
		}
		("POST", endpoints::REBOOT) => {
			desk.token = None;
			desk.owner = None;
			desk.brakes_open = false;
			desk.fci_active = false;
			desk.failures.clear();
			desk.mode = "Execution".into();
			desk.boot_polls_remaining = desk.boot_polls;
			StatusCode::OK.into_response()
		}
		_ => StatusCode::NOT_FOUND.into_response(),
	}
}
