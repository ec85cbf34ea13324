//! The asynchronous refresh handler handed to the component.

use futures::future::{FutureExt, LocalBoxFuture};
use std::fmt;
use std::future::Future;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshError {
    #[error("{0}")]
    Failed(String),
    #[error("promise rejected: {0}")]
    Rejected(String),
}

impl From<JsValue> for RefreshError {
    fn from(value: JsValue) -> Self {
        let msg = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        RefreshError::Rejected(msg)
    }
}

pub type RefreshFuture = LocalBoxFuture<'static, Result<(), RefreshError>>;

/// Shared, clonable `on_refresh` callback. Two handlers are equal only if they
/// wrap the same closure, which is what Yew needs for prop diffing.
#[derive(Clone)]
pub struct RefreshHandler(Rc<dyn Fn() -> RefreshFuture>);

impl RefreshHandler {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<(), RefreshError>> + 'static,
    {
        Self(Rc::new(move || f().boxed_local()))
    }

    pub fn invoke(&self) -> RefreshFuture {
        (self.0)()
    }
}

impl PartialEq for RefreshHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for RefreshHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RefreshHandler(..)")
    }
}

/// Runs the handler to completion. A missing handler completes immediately.
pub async fn run_refresh(handler: Option<&RefreshHandler>) -> Result<(), RefreshError> {
    match handler {
        Some(h) => h.invoke().await,
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn missing_handler_succeeds() {
        assert_eq!(block_on(run_refresh(None)), Ok(()));
    }

    #[test]
    fn handler_outcome_is_forwarded() {
        let ok = RefreshHandler::new(|| async { Ok(()) });
        let bad = RefreshHandler::new(|| async { Err(RefreshError::Failed("down".into())) });
        assert_eq!(block_on(run_refresh(Some(&ok))), Ok(()));
        let err = block_on(run_refresh(Some(&bad))).unwrap_err();
        assert_eq!(err.to_string(), "down");
    }

    #[test]
    fn handlers_compare_by_identity() {
        let a = RefreshHandler::new(|| async { Ok(()) });
        let b = RefreshHandler::new(|| async { Ok(()) });
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
