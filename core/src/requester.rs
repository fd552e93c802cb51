use std::fmt::Debug;
use std::future::Future;

use anyhow::anyhow;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::runtime::{Handle, RuntimeFlavor};

use crate::{Error, Result};

/// Requester executes authenticated requests against Toss Payments.
///
/// Every operation takes a path relative to the configured endpoint and decodes the
/// response body into `R`. Implementors only provide the async operations; the
/// blocking ones wait for them on the calling thread, so both forms share the same
/// semantics and error kinds.
///
/// ```no_run
/// use tosspayments_core::{Requester, Result};
///
/// fn fetch(requester: &impl Requester) -> Result<serde_json::Value> {
///     requester.get("/api/test")
/// }
/// ```
#[async_trait]
pub trait Requester: Debug + Send + Sync + 'static {
    /// Send a GET request to `path`.
    async fn get_async<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned + Send + 'static;

    /// Send a POST request to `path` with `body` encoded as json.
    async fn post_async<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned + Send + 'static;

    /// Send a GET request to `path`, blocking the current thread until it completes.
    fn get<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned + Send + 'static,
    {
        block_on(self.get_async(path))?
    }

    /// Send a POST request to `path`, blocking the current thread until it completes.
    fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned + Send + 'static,
    {
        block_on(self.post_async(path, body))?
    }
}

/// Park the current thread until `fut` completes.
///
/// - Outside of any runtime, a current-thread runtime is built for the wait.
/// - Inside a multi-thread runtime, the worker is handed over with `block_in_place`.
/// - Inside a current-thread runtime, `fut` is driven by a fresh runtime on a scoped
///   helper thread while the caller waits for it. This covers both the runtime's own
///   thread and `spawn_blocking` threads.
///
/// A wait that never produces an output, because the helper runtime can't be built or
/// the helper thread dies, fails with `ExecutionFailure` "Request was interrupted".
fn block_on<F>(fut: F) -> Result<F::Output>
where
    F: Future + Send,
    F::Output: Send,
{
    match Handle::try_current() {
        Ok(handle) => match handle.runtime_flavor() {
            RuntimeFlavor::CurrentThread => std::thread::scope(|s| {
                s.spawn(|| block_on_fresh_runtime(fut))
                    .join()
                    .map_err(|_| {
                        Error::execution_failure("Request was interrupted")
                            .with_source(anyhow!("blocking request helper thread panicked"))
                    })?
            }),
            _ => Ok(tokio::task::block_in_place(|| handle.block_on(fut))),
        },
        Err(_) => block_on_fresh_runtime(fut),
    }
}

fn block_on_fresh_runtime<F: Future>(fut: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::execution_failure("Request was interrupted").with_source(e))?;

    Ok(runtime.block_on(fut))
}
