//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Publish shortcut display for form help text
/// Ctrl+S works on all platforms
pub const PUBLISH_SHORTCUT: &str = "Ctrl+S";

/// Save as draft shortcut display
/// - macOS: "Cmd+D"
/// - Linux/Windows: "Ctrl+D"
#[cfg(target_os = "macos")]
pub const DRAFT_SHORTCUT: &str = "Cmd+D";

#[cfg(not(target_os = "macos"))]
pub const DRAFT_SHORTCUT: &str = "Ctrl+D";
