//! Global state management for triplot.

use std::sync::{OnceLock, RwLock};

use crate::error::{Result, TriplotError};
use crate::options::Options;
use crate::registry::Registry;

/// Global context singleton.
static CONTEXT: OnceLock<RwLock<Context>> = OnceLock::new();

/// The global context containing all triplot state.
pub struct Context {
    /// Whether triplot has been initialized.
    pub initialized: bool,

    /// The figure registry.
    pub registry: Registry,

    /// Global options.
    pub options: Options,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            initialized: false,
            registry: Registry::new(),
            options: Options::default(),
        }
    }
}

/// Initializes the global context.
///
/// This should be called once at the start of the program. After
/// [`shutdown_context`] the context may be initialized again; the registry
/// and options start fresh each time.
pub fn init_context() -> Result<()> {
    let lock = CONTEXT.get_or_init(|| RwLock::new(Context::default()));

    {
        let guard = lock.read().expect("context lock poisoned");
        if guard.initialized {
            return Err(TriplotError::AlreadyInitialized);
        }
    }

    with_context_mut(|ctx| {
        *ctx = Context::default();
        ctx.initialized = true;
    });

    Ok(())
}

/// Returns whether the context has been initialized.
pub fn is_initialized() -> bool {
    CONTEXT
        .get()
        .and_then(|lock| lock.read().ok())
        .is_some_and(|ctx| ctx.initialized)
}

/// Access the global context for reading.
///
/// # Panics
///
/// Panics if triplot has not been initialized.
pub fn with_context<F, R>(f: F) -> R
where
    F: FnOnce(&Context) -> R,
{
    let lock = CONTEXT.get().expect("triplot not initialized");
    let guard = lock.read().expect("context lock poisoned");
    f(&guard)
}

/// Access the global context for writing.
///
/// # Panics
///
/// Panics if triplot has not been initialized.
pub fn with_context_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Context) -> R,
{
    let lock = CONTEXT.get().expect("triplot not initialized");
    let mut guard = lock.write().expect("context lock poisoned");
    f(&mut guard)
}

/// Try to access the global context for reading.
///
/// Returns `None` if triplot has not been initialized.
pub fn try_with_context<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&Context) -> R,
{
    let lock = CONTEXT.get()?;
    let guard = lock.read().ok()?;
    Some(f(&guard))
}

/// Try to access the global context for writing.
///
/// Returns `None` if triplot has not been initialized.
pub fn try_with_context_mut<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut Context) -> R,
{
    let lock = CONTEXT.get()?;
    let mut guard = lock.write().ok()?;
    Some(f(&mut guard))
}

/// Shuts down the global context.
///
/// Clears all registered figures and marks the context uninitialized so
/// that [`init_context`] can be called again.
pub fn shutdown_context() {
    if let Some(lock) = CONTEXT.get() {
        if let Ok(mut ctx) = lock.write() {
            ctx.initialized = false;
            ctx.registry.clear();
        }
    }
}
