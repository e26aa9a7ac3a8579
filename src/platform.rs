//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for copy/save shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Send shortcut display
/// Ctrl+S works on all platforms
pub const SEND_SHORTCUT: &str = "^S";

/// Copy owner email shortcut display
#[cfg(target_os = "macos")]
pub const COPY_EMAIL_SHORTCUT: &str = "Cmd+Y";

#[cfg(not(target_os = "macos"))]
pub const COPY_EMAIL_SHORTCUT: &str = "^Y";
