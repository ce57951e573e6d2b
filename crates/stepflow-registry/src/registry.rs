use std::collections::HashMap;
use std::sync::Arc;

use crate::error::RegistryError;
use crate::handler::StepHandler;

/// Maps step kinds to handlers.
///
/// Registering a kind that already has a handler replaces it: the last
/// registration wins and the previous handler is returned. This is how tests
/// swap in fakes and how plugins layer over built-in handlers.
#[derive(Default, Clone)]
pub struct StepRegistry {
  handlers: HashMap<String, Arc<dyn StepHandler>>,
}

impl StepRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Register `handler` under `kind`, returning the handler it replaced, if any.
  pub fn register<H>(&mut self, kind: impl Into<String>, handler: H) -> Option<Arc<dyn StepHandler>>
  where
    H: StepHandler + 'static,
  {
    self.register_arc(kind, Arc::new(handler))
  }

  /// Same as [`StepRegistry::register`] for an already shared handler.
  pub fn register_arc(
    &mut self,
    kind: impl Into<String>,
    handler: Arc<dyn StepHandler>,
  ) -> Option<Arc<dyn StepHandler>> {
    self.handlers.insert(kind.into(), handler)
  }

  /// Look up the handler for `kind`.
  pub fn get_handler(&self, kind: &str) -> Result<Arc<dyn StepHandler>, RegistryError> {
    self
      .handlers
      .get(kind)
      .cloned()
      .ok_or_else(|| RegistryError::HandlerNotFound {
        kind: kind.to_string(),
      })
  }

  pub fn contains(&self, kind: &str) -> bool {
    self.handlers.contains_key(kind)
  }

  /// Registered kinds, sorted.
  pub fn kinds(&self) -> Vec<&str> {
    let mut kinds: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
    kinds.sort_unstable();
    kinds
  }

  pub fn len(&self) -> usize {
    self.handlers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.handlers.is_empty()
  }
}

impl std::fmt::Debug for StepRegistry {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("StepRegistry")
      .field("kinds", &self.kinds())
      .finish()
  }
}
