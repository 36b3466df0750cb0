// =============================================================================
// Bexa Web - Content Shield Policy
// =============================================================================
// Pure decision logic for the shield: which inputs get suppressed, which
// messages go out, and when a hidden tab counts as a suspected capture.
// Keeping this free of DOM types makes it testable off-browser.
// =============================================================================

// -----------------------------------------------------------------------------
// Messages & Constants
// -----------------------------------------------------------------------------

pub const CONTEXT_MENU_WARNING: &str = "Right-click is disabled for security reasons";
pub const SHORTCUT_WARNING: &str = "This action is disabled for security reasons";
pub const CLIPBOARD_WARNING: &str = "Copying content is disabled for security reasons";
pub const CAPTURE_WARNING: &str = "Possible screen capture detected. Content was hidden.";

/// Class applied to the shield wrapper while a capture window is open.
pub const OBFUSCATION_CLASS: &str = "shield-obscured";

/// How long the wrapper stays obscured after the tab goes hidden before we
/// decide whether the hide looked like a capture.
pub const CAPTURE_GRACE_MS: u32 = 300;

/// Poll period for the developer-tools probe.
pub const DEVTOOLS_POLL_MS: u32 = 1000;

// -----------------------------------------------------------------------------
// Keyboard Policy
// -----------------------------------------------------------------------------

/// Keyboard shortcuts the shield intercepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockedAction {
    Copy,
    Cut,
    Print,
    Save,
    PrintScreen,
    DevTools,
}

impl BlockedAction {
    /// Toast to show when the action is suppressed. DevTools suppression is
    /// best-effort and stays silent: the key cannot actually be blocked in
    /// every browser, so announcing it would overpromise.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            BlockedAction::DevTools => None,
            _ => Some(SHORTCUT_WARNING),
        }
    }
}

/// Classify a key-down event. Letter matching is ASCII case-insensitive so
/// an active Caps Lock or Shift does not bypass the filter.
pub fn blocked_action(key: &str, ctrl: bool) -> Option<BlockedAction> {
    if ctrl {
        if key.eq_ignore_ascii_case("c") {
            return Some(BlockedAction::Copy);
        }
        if key.eq_ignore_ascii_case("x") {
            return Some(BlockedAction::Cut);
        }
        if key.eq_ignore_ascii_case("p") {
            return Some(BlockedAction::Print);
        }
        if key.eq_ignore_ascii_case("s") {
            return Some(BlockedAction::Save);
        }
    }
    match key {
        "PrintScreen" => Some(BlockedAction::PrintScreen),
        "F12" => Some(BlockedAction::DevTools),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// Capture Sentinel
// -----------------------------------------------------------------------------

/// Tracks the obfuscation window opened by a hide transition.
///
/// Each hide arms a new epoch; the delayed check only fires for the epoch it
/// was scheduled with, so a newer hide transition invalidates older timers
/// even if one slips through cancellation.
#[derive(Debug, Default)]
pub struct CaptureSentinel {
    epoch: u64,
    armed: bool,
}

impl CaptureSentinel {
    /// The tab went hidden: open (or replace) a capture window.
    /// Returns the epoch to hand to the delayed check.
    pub fn arm(&mut self) -> u64 {
        self.epoch += 1;
        self.armed = true;
        self.epoch
    }

    /// The grace delay for `epoch` elapsed. Stale epochs return `None`.
    /// Otherwise the window closes and `Some(warn)` says whether the tab was
    /// still hidden, i.e. whether to raise the capture warning.
    pub fn elapse(&mut self, epoch: u64, still_hidden: bool) -> Option<bool> {
        if !self.armed || epoch != self.epoch {
            return None;
        }
        self.armed = false;
        Some(still_hidden)
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_combos_are_blocked() {
        assert_eq!(blocked_action("c", true), Some(BlockedAction::Copy));
        assert_eq!(blocked_action("x", true), Some(BlockedAction::Cut));
        assert_eq!(blocked_action("p", true), Some(BlockedAction::Print));
        assert_eq!(blocked_action("s", true), Some(BlockedAction::Save));
        assert_eq!(blocked_action("C", true), Some(BlockedAction::Copy));
    }

    #[test]
    fn test_plain_keys_pass_through() {
        assert_eq!(blocked_action("c", false), None);
        assert_eq!(blocked_action("a", true), None);
        assert_eq!(blocked_action("Enter", false), None);
    }

    #[test]
    fn test_function_and_capture_keys() {
        assert_eq!(blocked_action("PrintScreen", false), Some(BlockedAction::PrintScreen));
        assert_eq!(blocked_action("F12", false), Some(BlockedAction::DevTools));
        assert_eq!(blocked_action("F12", true), Some(BlockedAction::DevTools));
    }

    #[test]
    fn test_devtools_suppression_is_silent() {
        assert_eq!(BlockedAction::DevTools.warning(), None);
        assert_eq!(BlockedAction::Copy.warning(), Some(SHORTCUT_WARNING));
        assert_eq!(BlockedAction::PrintScreen.warning(), Some(SHORTCUT_WARNING));
    }

    #[test]
    fn test_sentinel_warns_when_still_hidden() {
        let mut sentinel = CaptureSentinel::default();
        let epoch = sentinel.arm();
        assert!(sentinel.is_armed());

        assert_eq!(sentinel.elapse(epoch, true), Some(true));
        assert!(!sentinel.is_armed());

        // The window is closed; a duplicate check is ignored.
        assert_eq!(sentinel.elapse(epoch, true), None);
    }

    #[test]
    fn test_sentinel_quiet_when_tab_returned() {
        let mut sentinel = CaptureSentinel::default();
        let epoch = sentinel.arm();

        // Tab came back before the grace delay: clear, but no warning.
        assert_eq!(sentinel.elapse(epoch, false), Some(false));
    }

    #[test]
    fn test_new_hide_replaces_pending_window() {
        let mut sentinel = CaptureSentinel::default();
        let first = sentinel.arm();
        let second = sentinel.arm();

        assert_eq!(sentinel.elapse(first, true), None);
        assert_eq!(sentinel.elapse(second, true), Some(true));
    }
}
