//! Cancellable handles for in-flight calls.
//!
//! # Design
//! A `Call<T>` is created when an operation is invoked; the transport request
//! is already running on a tokio task by then. Awaiting the handle yields the
//! single terminal outcome. `cancel` consumes the handle and aborts the task,
//! which drops the transport future and with it the in-flight request; no
//! value or error can be observed afterwards. Dropping an un-awaited handle
//! cancels the same way.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use endpoint_core::NetworkError;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::warn;

/// Handle to one call. Resolves to exactly one `Result`.
#[must_use = "dropping a Call cancels it"]
pub struct Call<T> {
    state: State<T>,
}

enum State<T> {
    Ready(Option<Result<T, NetworkError>>),
    Running(JoinHandle<Result<T, NetworkError>>),
}

impl<T> Call<T> {
    /// A call that failed before anything was dispatched.
    pub(crate) fn ready(result: Result<T, NetworkError>) -> Self {
        Self {
            state: State::Ready(Some(result)),
        }
    }

    /// Start `future` on the current tokio runtime.
    ///
    /// Outside a runtime nothing can be dispatched and the call resolves to
    /// `UnknownError`.
    pub(crate) fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, NetworkError>> + Send + 'static,
        T: Send + 'static,
    {
        match Handle::try_current() {
            Ok(runtime) => Self {
                state: State::Running(runtime.spawn(future)),
            },
            Err(e) => {
                warn!(error = %e, "no tokio runtime available to dispatch call");
                Self::ready(Err(NetworkError::UnknownError))
            }
        }
    }

    /// Abort the call. The in-flight transport request is dropped.
    pub fn cancel(self) {
        drop(self);
    }

    /// Whether the terminal event has already happened.
    pub fn is_finished(&self) -> bool {
        match &self.state {
            State::Ready(_) => true,
            State::Running(handle) => handle.is_finished(),
        }
    }
}

impl<T> Drop for Call<T> {
    fn drop(&mut self) {
        if let State::Running(handle) = &self.state {
            handle.abort();
        }
    }
}

// `T` is only ever moved out of the join handle, never pinned.
impl<T> Unpin for Call<T> {}

impl<T> Future for Call<T> {
    type Output = Result<T, NetworkError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let outcome = match &mut this.state {
            State::Ready(result) => {
                return Poll::Ready(result.take().unwrap_or(Err(NetworkError::UnknownError)))
            }
            State::Running(handle) => match Pin::new(handle).poll(cx) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Ok(result)) => result,
                Poll::Ready(Err(e)) => {
                    warn!(error = %e, "call task ended abnormally");
                    Err(NetworkError::UnknownError)
                }
            },
        };
        this.state = State::Ready(None);
        Poll::Ready(outcome)
    }
}
