//! Timer primitives shared by the tool engines.
//!
//! Web builds sleep on browser timeouts; native builds sleep on the tokio
//! runtime the desktop launcher already drives.

pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

/// Calls `tick` once every `period_ms` until it returns `false`.
///
/// The first call happens one full period after the loop starts.
pub async fn run_interval<F>(period_ms: u64, mut tick: F)
where
    F: FnMut() -> bool,
{
    loop {
        sleep_ms(period_ms).await;
        if !tick() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn interval_ticks_once_per_period() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();
        let handle = tokio::spawn(run_interval(2_000, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        }));

        tokio::time::sleep(Duration::from_millis(1_999)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(4_100)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 3);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn interval_stops_when_tick_declines() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();
        let handle = tokio::spawn(run_interval(500, move || {
            counter.fetch_add(1, Ordering::SeqCst) < 1
        }));

        tokio::time::sleep(Duration::from_millis(5_000)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);
        assert!(handle.is_finished());
    }
}
