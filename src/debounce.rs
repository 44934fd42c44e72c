//! Cancellable trailing-edge debounce timer.

use std::time::{Duration, Instant};

/// Quiescence window before a scheduled recomputation fires.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// A deferred-execution handle with trailing-edge semantics.
///
/// At most one deadline is armed at a time. Touching while armed resets the
/// deadline instead of stacking a second one, so only the last state within
/// a burst is ever applied. The owner polls [`fire_at`](Self::fire_at) on its
/// own timeline; a cancelled or dropped debouncer never fires.
#[derive(Debug, Clone)]
pub struct Debouncer {
  window: Duration,
  deadline: Option<Instant>,
}

impl Debouncer {
  /// Creates a debouncer with the given quiescence window.
  pub fn new(window: Duration) -> Self {
    Self {
      window,
      deadline: None,
    }
  }

  /// Arms (or re-arms) the deadline at `now + window`.
  pub fn touch_at(&mut self, now: Instant) {
    self.deadline = Some(now + self.window);
  }

  /// Arms the deadline relative to the current time.
  pub fn touch(&mut self) {
    self.touch_at(Instant::now());
  }

  /// Consumes the deadline if it has passed, returning whether it fired.
  pub fn fire_at(&mut self, now: Instant) -> bool {
    match self.deadline {
      Some(deadline) if now >= deadline => {
        self.deadline = None;
        true
      }
      _ => false,
    }
  }

  /// Polls the deadline against the current time.
  pub fn fire(&mut self) -> bool {
    self.fire_at(Instant::now())
  }

  /// Clears any armed deadline; a cancelled run never executes.
  pub fn cancel(&mut self) {
    self.deadline = None;
  }

  /// True while a deadline is armed but has not fired.
  pub fn is_pending(&self) -> bool {
    self.deadline.is_some()
  }
}

impl Default for Debouncer {
  fn default() -> Self {
    Self::new(DEBOUNCE_WINDOW)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fires_once_after_the_window() {
    let mut debouncer = Debouncer::default();
    let t0 = Instant::now();

    debouncer.touch_at(t0);
    assert!(!debouncer.fire_at(t0 + Duration::from_millis(299)));
    assert!(debouncer.fire_at(t0 + Duration::from_millis(300)));
    // The deadline is consumed; it does not fire again.
    assert!(!debouncer.fire_at(t0 + Duration::from_millis(600)));
  }

  #[test]
  fn touching_resets_the_deadline() {
    let mut debouncer = Debouncer::default();
    let t0 = Instant::now();

    // Five touches 50ms apart collapse into one trailing deadline.
    for i in 0..5 {
      debouncer.touch_at(t0 + Duration::from_millis(50 * i));
    }
    assert!(!debouncer.fire_at(t0 + Duration::from_millis(350)));
    assert!(debouncer.fire_at(t0 + Duration::from_millis(500)));
  }

  #[test]
  fn cancel_clears_the_pending_run() {
    let mut debouncer = Debouncer::default();
    let t0 = Instant::now();

    debouncer.touch_at(t0);
    assert!(debouncer.is_pending());
    debouncer.cancel();
    assert!(!debouncer.is_pending());
    assert!(!debouncer.fire_at(t0 + Duration::from_secs(10)));
  }

  #[test]
  fn idle_debouncer_never_fires() {
    let mut debouncer = Debouncer::default();
    assert!(!debouncer.is_pending());
    assert!(!debouncer.fire());
  }
}
