//! Viewport Controller: sidebar visibility and debounced resize notification.
//!
//! Collapsing or opening the sidebar changes the map surface's width via
//! an animated layout transition. The map must re-measure itself once the
//! transition is visually complete, so the controller arms a single-shot
//! delayed notification on every toggle. Rapid toggling collapses to one
//! notification, fired after the *last* toggle's delay elapses; a
//! superseded deadline is cancelled, never left to fire stale.
//!
//! The timer is a plain deadline polled once per frame (no background
//! thread), which keeps everything single-threaded and lets tests inject
//! instants instead of sleeping.

use std::time::{Duration, Instant};

/// Delay between the last sidebar toggle and the resize notification.
///
/// Must be at least the sidebar layout transition duration so the
/// notification fires strictly after the transition is visually complete.
pub const DEFAULT_RESIZE_DELAY: Duration = Duration::from_millis(500);

/// Sidebar visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarState {
    Open,
    Closed,
}

impl SidebarState {
    fn toggled(self) -> Self {
        match self {
            SidebarState::Open => SidebarState::Closed,
            SidebarState::Closed => SidebarState::Open,
        }
    }
}

/// Owns sidebar visibility and the pending resize notification.
///
/// Responsibilities:
/// - Tracking sidebar open/closed state
/// - Arming the debounce deadline on every toggle (superseding any
///   pending one)
/// - Reporting exactly one notification per toggle burst via [`poll`]
/// - Releasing the pending deadline on teardown via [`cancel_pending`]
///
/// [`poll`]: ViewportController::poll
/// [`cancel_pending`]: ViewportController::cancel_pending
#[derive(Debug, Clone)]
pub struct ViewportController {
    sidebar: SidebarState,
    delay: Duration,
    /// Deadline of the pending notification, if one is armed.
    pending: Option<Instant>,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportController {
    /// Creates a controller with the sidebar open and the default delay.
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_RESIZE_DELAY)
    }

    /// Creates a controller with a custom debounce delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            sidebar: SidebarState::Open,
            delay,
            pending: None,
        }
    }

    // ===== Queries =====

    /// Returns the current sidebar state.
    pub fn sidebar_state(&self) -> SidebarState {
        self.sidebar
    }

    /// Returns true if the sidebar is open.
    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar == SidebarState::Open
    }

    /// Returns true if a resize notification is armed but not yet fired.
    pub fn has_pending_notification(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the time remaining until the pending notification fires.
    ///
    /// `Some(Duration::ZERO)` means the deadline has passed and the next
    /// [`poll`](ViewportController::poll) will fire. Useful for scheduling
    /// a repaint instead of polling busily.
    pub fn time_until_fire(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|deadline| deadline.saturating_duration_since(now))
    }

    // ===== Mutations =====

    /// Flips sidebar visibility and (re)arms the resize notification.
    ///
    /// Any previously pending notification is superseded: the deadline is
    /// replaced, so a burst of toggles yields exactly one notification,
    /// `delay` after the last toggle.
    pub fn toggle_sidebar(&mut self, now: Instant) {
        self.sidebar = self.sidebar.toggled();
        self.pending = Some(now + self.delay);
        log::debug!(
            "sidebar toggled to {:?}; resize notification armed for +{:?}",
            self.sidebar,
            self.delay
        );
    }

    /// Checks the pending deadline, consuming it if elapsed.
    ///
    /// Returns `true` exactly once per toggle burst, the first time it is
    /// called at or after the deadline. The caller forwards the
    /// notification to the map surface.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deadline) if now >= deadline => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Releases the pending notification without firing it.
    ///
    /// Called on teardown so no callback outlives the view it targets.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn test_toggle_flips_state_both_ways() {
        let base = Instant::now();
        let mut ctrl = ViewportController::new();
        assert!(ctrl.is_sidebar_open());

        ctrl.toggle_sidebar(base);
        assert_eq!(ctrl.sidebar_state(), SidebarState::Closed);

        ctrl.toggle_sidebar(at(base, 10));
        assert_eq!(ctrl.sidebar_state(), SidebarState::Open);
    }

    #[test]
    fn test_notification_fires_once_after_delay() {
        let base = Instant::now();
        let mut ctrl = ViewportController::with_delay(Duration::from_millis(500));

        ctrl.toggle_sidebar(base);
        assert!(!ctrl.poll(at(base, 499)));
        assert!(ctrl.poll(at(base, 500)));
        // Consumed: no second fire.
        assert!(!ctrl.poll(at(base, 501)));
        assert!(!ctrl.has_pending_notification());
    }

    #[test]
    fn test_rapid_toggles_collapse_to_one_notification() {
        let base = Instant::now();
        let mut ctrl = ViewportController::with_delay(Duration::from_millis(500));

        ctrl.toggle_sidebar(base);
        ctrl.toggle_sidebar(at(base, 200));

        // The first toggle's deadline (base + 500) must not fire.
        assert!(!ctrl.poll(at(base, 500)));
        // The second toggle's deadline does.
        assert!(ctrl.poll(at(base, 700)));
        assert!(!ctrl.poll(at(base, 1200)));
    }

    #[test]
    fn test_cancel_releases_pending_notification() {
        let base = Instant::now();
        let mut ctrl = ViewportController::with_delay(Duration::from_millis(500));

        ctrl.toggle_sidebar(base);
        ctrl.cancel_pending();
        assert!(!ctrl.has_pending_notification());
        assert!(!ctrl.poll(at(base, 1000)));
    }

    #[test]
    fn test_time_until_fire_counts_down() {
        let base = Instant::now();
        let mut ctrl = ViewportController::with_delay(Duration::from_millis(500));
        assert_eq!(ctrl.time_until_fire(base), None);

        ctrl.toggle_sidebar(base);
        assert_eq!(
            ctrl.time_until_fire(at(base, 200)),
            Some(Duration::from_millis(300))
        );
        assert_eq!(ctrl.time_until_fire(at(base, 600)), Some(Duration::ZERO));
    }
}
