//! Element ids, tag names, and class names shared with the flasher page.

// ── Page template ───────────────────────────────────────────────

/// Warning notice revealed when Web Serial is unavailable.
pub const WARNING_ID: &str = "no-support-warning";

/// Container the board options are appended to.
pub const CONTAINER_ID: &str = "device-selection";

/// Tag name of the ESP Web Tools install button.
pub const INSTALLER_TAG: &str = "esp-web-install-button";

/// Optional inline JSON registry replacing the compiled-in table.
pub const REGISTRY_SCRIPT_ID: &str = "board-registry";

// ── Installer attributes ────────────────────────────────────────

pub const MANIFEST_ATTR: &str = "manifest";

/// Class that keeps an element out of view until it is revealed.
pub const HIDDEN_CLASS: &str = "hidden";

// ── Option markup ───────────────────────────────────────────────

/// Radio group shared by every board option.
pub const GROUP_NAME: &str = "board";

pub const OPTION_CLASS: &str = "device-option";
pub const LABEL_CLASS: &str = "device-label";
pub const ICON_CLASS: &str = "device-icon";
pub const NAME_CLASS: &str = "device-name";
pub const DESC_CLASS: &str = "device-desc";
