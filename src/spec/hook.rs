//! Keyword-argument callables supplied as transition hooks.

use super::symbol::Symbol;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Callable invoked with the `from` and `to` states of a transition.
///
/// Either side is `None` when the entity's stored code maps to no declared
/// state.
pub type TransitionHook = Arc<dyn Fn(Option<&Symbol>, Option<&Symbol>) + Send + Sync>;

/// A callable together with the keyword parameters it declares.
///
/// The parameter list is what the validator inspects: a hook is only
/// accepted for `on_successful_transition` / `on_failed_transition` when it
/// declares exactly `from` and `to`.
///
/// # Example
///
/// ```rust
/// use argonaut::spec::Hook;
///
/// let good = Hook::transition(|from, to| println!("{from:?} -> {to:?}"));
/// assert!(good.accepts_transition());
///
/// let bad = Hook::new(["test"], |_, _| {});
/// assert!(!bad.accepts_transition());
/// ```
#[derive(Clone)]
pub struct Hook {
    params: Vec<String>,
    func: TransitionHook,
}

impl Hook {
    /// Create a hook declaring an arbitrary keyword parameter list.
    pub fn new<I, P, F>(params: I, func: F) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
        F: Fn(Option<&Symbol>, Option<&Symbol>) + Send + Sync + 'static,
    {
        Self {
            params: params.into_iter().map(Into::into).collect(),
            func: Arc::new(func),
        }
    }

    /// Create a hook with the `(from:, to:)` signature.
    pub fn transition<F>(func: F) -> Self
    where
        F: Fn(Option<&Symbol>, Option<&Symbol>) + Send + Sync + 'static,
    {
        Self::new(["from", "to"], func)
    }

    /// A `(from:, to:)` hook that does nothing.
    pub fn noop() -> Self {
        Self::transition(|_, _| {})
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// True when the declared parameters are exactly `from` and `to`, in any order.
    pub fn accepts_transition(&self) -> bool {
        let declared: BTreeSet<&str> = self.params.iter().map(String::as_str).collect();
        self.params.len() == 2 && declared == BTreeSet::from(["from", "to"])
    }

    pub fn call(&self, from: Option<&Symbol>, to: Option<&Symbol>) {
        (self.func)(from, to)
    }

    pub(crate) fn function(&self) -> TransitionHook {
        Arc::clone(&self.func)
    }

    pub(crate) fn same_callable(&self, other: &Hook) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn transition_signature_is_order_insensitive() {
        assert!(Hook::new(["to", "from"], |_, _| {}).accepts_transition());
        assert!(Hook::noop().accepts_transition());
    }

    #[test]
    fn rejects_other_signatures() {
        assert!(!Hook::new(Vec::<String>::new(), |_, _| {}).accepts_transition());
        assert!(!Hook::new(["from"], |_, _| {}).accepts_transition());
        assert!(!Hook::new(["from", "to", "via"], |_, _| {}).accepts_transition());
        assert!(!Hook::new(["from", "from"], |_, _| {}).accepts_transition());
    }

    #[test]
    fn call_forwards_arguments() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let hook = Hook::transition(move |from, to| {
            sink.lock()
                .unwrap()
                .push((from.cloned(), to.cloned()));
        });

        hook.call(Some(&Symbol::new("abc")), None);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![(Some(Symbol::new("abc")), None)]
        );
    }
}
