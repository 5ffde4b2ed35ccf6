// Front-end wiring constants: DOM hooks and frame pacing.
// Scene tuning lives in `helix_core::constants`.

// Element ids the page template must provide
pub const CANVAS_ID: &str = "app-canvas";
pub const SPACER_ID: &str = "scroll-spacer";
pub const INFO_PANEL_ID: &str = "info-panel";
pub const INFO_TITLE_ID: &str = "info-title";
pub const INFO_SUBTITLE_ID: &str = "info-subtitle";
pub const INFO_DESCRIPTION_ID: &str = "info-description";
pub const INFO_TAGS_ID: &str = "info-tags";
pub const NAVBAR_ID: &str = "navbar";

// Class names toggled by the front-end
pub const NAV_SCROLLED_CLASS: &str = "scrolled";
pub const TAG_CLASS: &str = "tag";

// DOM event fired when the active card changes; detail = entry id
pub const ACTIVE_CHANGE_EVENT: &str = "activeitemchange";

// Longest frame step fed to the smoothers (seconds)
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
