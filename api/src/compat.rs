// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use crate::ApiError;
    use futures::future::{select, Either};
    use std::future::Future;
    use std::time::Duration;

    /// Runs `fut`, giving up after `duration`. The request future is dropped
    /// on timeout, which aborts the underlying fetch.
    pub async fn with_timeout<T, F>(duration: Duration, fut: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let fut = std::pin::pin!(fut);
        let timer = std::pin::pin!(gloo_timers::future::sleep(duration));
        match select(fut, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ApiError::Timeout(duration)),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use crate::ApiError;
    use std::future::Future;
    use std::time::Duration;

    /// Runs `fut`, giving up after `duration`. The request future is dropped
    /// on timeout, which aborts the underlying request.
    pub async fn with_timeout<T, F>(duration: Duration, fut: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        tokio::time::timeout(duration, fut)
            .await
            .map_err(|_| ApiError::Timeout(duration))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiError;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn slow_future_times_out() {
        let result: Result<(), ApiError> = with_timeout(Duration::from_secs(6), async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(())
        })
        .await;
        assert_eq!(result, Err(ApiError::Timeout(Duration::from_secs(6))));
    }

    #[tokio::test(start_paused = true)]
    async fn fast_future_passes_through() {
        let result = with_timeout(Duration::from_secs(6), async { Ok::<_, ApiError>(7) }).await;
        assert_eq!(result, Ok(7));
    }
}
