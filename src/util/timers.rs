//! Debounce, throttle and teardown helpers with explicit handles.
//!
//! DESIGN
//! ======
//! Every deferred action is owned by a handle. Rescheduling drops the previous
//! `gloo_timers` timeout, which cancels it; page teardown runs registered
//! cleanups instead of scanning for live timer ids.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Shared cancellation flag for long-running async loops.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Leading-edge gate: the first trigger arms it, later triggers are dropped
/// until the deferred run releases it.
#[derive(Clone, Debug, Default)]
pub struct ThrottleGate(Rc<Cell<bool>>);

impl ThrottleGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the gate. Returns `false` when a run is already pending.
    pub fn try_arm(&self) -> bool {
        if self.0.get() {
            return false;
        }
        self.0.set(true);
        true
    }

    pub fn release(&self) {
        self.0.set(false);
    }

    pub fn is_armed(&self) -> bool {
        self.0.get()
    }
}

/// Cleanups to run when a page is torn down.
#[derive(Default)]
pub struct Teardown {
    tasks: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl Teardown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defer(&self, task: impl FnOnce() + 'static) {
        self.tasks.borrow_mut().push(Box::new(task));
    }

    /// Keep `value` alive until teardown, then drop it.
    pub fn hold<T: 'static>(&self, value: T) {
        self.defer(move || drop(value));
    }

    /// Register a token that is cancelled at teardown.
    pub fn token(&self) -> CancelToken {
        let token = CancelToken::new();
        let for_teardown = token.clone();
        self.defer(move || for_teardown.cancel());
        token
    }

    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    /// Run every cleanup in reverse registration order.
    pub fn run(&self) {
        let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
        for task in tasks.into_iter().rev() {
            task();
        }
    }
}

/// Trailing-edge debouncer: each call cancels the pending run.
#[cfg(feature = "csr")]
#[derive(Clone)]
pub struct Debouncer {
    wait_ms: u32,
    pending: Rc<RefCell<Option<gloo_timers::callback::Timeout>>>,
}

#[cfg(feature = "csr")]
impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn schedule(&self, action: impl FnOnce() + 'static) {
        let timeout = gloo_timers::callback::Timeout::new(self.wait_ms, action);
        // Replacing the handle drops, and so cancels, the previous timeout.
        *self.pending.borrow_mut() = Some(timeout);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

/// Runs `action` at most once per `delay_ms`, on the trailing edge.
#[cfg(feature = "csr")]
#[derive(Clone)]
pub struct Throttle {
    delay_ms: u32,
    gate: ThrottleGate,
}

#[cfg(feature = "csr")]
impl Throttle {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            gate: ThrottleGate::new(),
        }
    }

    pub fn trigger(&self, action: impl FnOnce() + 'static) {
        if !self.gate.try_arm() {
            return;
        }
        let gate = self.gate.clone();
        gloo_timers::callback::Timeout::new(self.delay_ms, move || {
            gate.release();
            action();
        })
        .forget();
    }
}
