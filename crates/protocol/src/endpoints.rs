//! Desk API paths, relative to `https://<robot>`.

/// `POST`, body [`TakeControlRequest`](crate::TakeControlRequest).
pub const TAKE_CONTROL: &str = "/api/system/control-token:take";

/// `POST`, control-gated. Releases the joint brakes.
pub const UNLOCK_JOINTS: &str = "/api/arm/joints:unlock";

/// `POST`, control-gated. Engages the joint brakes.
pub const LOCK_JOINTS: &str = "/api/arm/joints:lock";

/// `POST`, control-gated. Enables the Franka Control Interface.
pub const ACTIVATE_FCI: &str = "/api/fci:activate";

/// `POST`, control-gated.
pub const DEACTIVATE_FCI: &str = "/api/fci:deactivate";

/// `GET`, returns [`OperatingModeResponse`](crate::OperatingModeResponse).
pub const OPERATING_MODE: &str = "/api/system/operating-mode";

/// `POST`, control-gated, body [`ChangeOperatingModeRequest`](crate::ChangeOperatingModeRequest).
pub const CHANGE_OPERATING_MODE: &str = "/api/system/operating-mode:change";

/// `POST`. Restarts the controller.
pub const REBOOT: &str = "/api/system:reboot";

/// `GET`, returns an array of [`JointState`](crate::JointState).
pub const JOINTS: &str = "/api/arm/joints";
