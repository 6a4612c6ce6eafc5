//! Request-scoped context: deadline, cancellation, and opaque values.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// The deadline, cancellation signal, and opaque key/value pairs a request
/// carries to its transport.
///
/// The library only stores and transfers the context; it never interprets
/// it. Transports are expected to honour the deadline and cancellation flag
/// the request carries at dispatch time.
///
/// Deriving a child (`with_value`, `with_deadline`, `with_cancellation`)
/// never mutates the parent, so a context captured in a base pipeline can be
/// shared across dispatches.
#[derive(Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancelled: Option<Arc<AtomicBool>>,
    values: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl Context {
    /// An empty context: no deadline, no cancellation, no values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a child context that expires at `deadline`.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let mut child = self.clone();
        child.deadline = Some(deadline);
        child
    }

    /// Derive a child context that expires `timeout` from now.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derive a child context with one extra key binding.
    pub fn with_value(&self, key: impl Into<String>, value: impl Any + Send + Sync) -> Self {
        let mut child = self.clone();
        child.values.insert(key.into(), Arc::new(value));
        child
    }

    /// Derive a child context wired to a new cancellation handle.
    pub fn with_cancellation(&self) -> (Self, CancelToken) {
        let flag = Arc::new(AtomicBool::new(false));
        let mut child = self.clone();
        child.cancelled = Some(Arc::clone(&flag));
        (child, CancelToken { flag })
    }

    /// The deadline, if one is set.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the context has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Look up a value bound with `with_value`, downcast to `T`.
    pub fn value<T: Any + Send + Sync>(&self, key: &str) -> Option<&T> {
        self.values.get(key).and_then(|value| value.downcast_ref())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("deadline", &self.deadline)
            .field("cancelled", &self.is_cancelled())
            .field("values", &self.values.len())
            .finish()
    }
}

/// A handle that cancels the context it was derived from.
#[derive(Clone)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Flip the context to cancelled. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

impl fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelToken")
            .field("cancelled", &self.flag.load(Ordering::SeqCst))
            .finish()
    }
}
