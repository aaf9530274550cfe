//! The persistence capabilities an entity must provide.

/// Storage, locking and callback dispatch for one entity.
///
/// Implemented by the entity handle itself. The engine never retries or
/// reinterprets a failure from any of these operations; it propagates the
/// error as [`TransitionError::Host`](super::TransitionError::Host).
pub trait HostAdapter {
    type Error: std::error::Error + Send + Sync + 'static;

    /// The stored state code, or `None` if the entity has none yet.
    fn read_raw_state(&self) -> Result<Option<i64>, Self::Error>;

    /// Durably store a new state code.
    fn write_raw_state(&self, code: i64) -> Result<(), Self::Error>;

    /// Record that the entity was modified. Called once per successful
    /// transition, after the state is written.
    fn mark_modified(&self) -> Result<(), Self::Error>;

    /// Run `body` while holding an exclusive lock on the entity.
    ///
    /// The outer `Err` is a failure to take the lock; `body` did not run.
    /// When `body` returns `Err`, every write it made must be rolled back
    /// before the lock is released, as a transaction would be.
    ///
    /// The lock must be released on every exit path of `body`, including
    /// unwinding. `read_raw_state` and `write_raw_state` are called from
    /// inside `body` and must not try to take the same lock.
    fn with_exclusive_lock<T, E, F>(&self, body: F) -> Result<Result<T, E>, Self::Error>
    where
        F: FnOnce() -> Result<T, E>;

    /// Invoke the zero-argument entity operation `name`, e.g. `on_move`.
    ///
    /// Undefined callbacks are an error, not a silent no-op.
    fn invoke_callback(&self, name: &str) -> Result<(), Self::Error>;
}
