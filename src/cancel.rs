use std::sync::{
  Arc, atomic::{AtomicBool, Ordering}
};

/// Shared stop flag, checked by the packing loop once per iteration.
///
/// Clones observe the same flag, so one can be handed to a signal handler while the engine
/// keeps another.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn cancel(&self) {
    self.0.store(true, Ordering::SeqCst);
  }

  pub fn is_cancelled(&self) -> bool {
    self.0.load(Ordering::SeqCst)
  }
}

#[cfg(test)] mod tests {
  use super::*;

  #[test] fn clones_share_state() {
    let token = CancellationToken::new();
    let handle = token.clone();
    assert!(!token.is_cancelled());
    handle.cancel();
    assert!(token.is_cancelled());
  }

  #[test] fn cancel_from_another_thread() {
    let token = CancellationToken::new();
    let handle = token.clone();
    std::thread::spawn(move || handle.cancel())
      .join()
      .unwrap();
    assert!(token.is_cancelled());
  }
}
