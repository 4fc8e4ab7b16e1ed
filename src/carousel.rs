// Featured-vehicle carousel: a bounded-index state machine plus a
// cancellable auto-advance timer.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{Mutex, Notify};
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant};

/// How many slides are visible at once.
pub const VISIBLE_SLIDES: usize = 3;
/// Auto-advance period.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);
/// Manual navigation is suppressed for this long after a transition,
/// matching the slide animation length.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(500);

/// Pure bounded-index state: `index` always stays within
/// `[0, max_index]` where `max_index = max(0, total - visible)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    total: usize,
    visible: usize,
}

impl CarouselState {
    pub fn new(total: usize, visible: usize) -> Self {
        CarouselState {
            index: 0,
            total,
            visible,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn max_index(&self) -> usize {
        self.total.saturating_sub(self.visible)
    }

    /// Advance one slide, clamped at the upper bound. Returns whether
    /// the index actually moved.
    pub fn next(&mut self) -> bool {
        let target = (self.index + 1).min(self.max_index());
        let moved = target != self.index;
        self.index = target;
        moved
    }

    /// Step back one slide, clamped at zero.
    pub fn prev(&mut self) -> bool {
        let target = self.index.saturating_sub(1);
        let moved = target != self.index;
        self.index = target;
        moved
    }

    /// Jump to a slide, clamped into range.
    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.max_index());
    }

    /// Timer transition: advance by one, wrapping to the start once the
    /// last window is showing.
    pub fn auto_advance(&mut self) {
        if self.index < self.max_index() {
            self.index += 1;
        } else {
            self.index = 0;
        }
    }

    /// The half-open slice bounds of the visible window.
    pub fn window(&self) -> (usize, usize) {
        let end = (self.index + self.visible).min(self.total);
        (self.index, end)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSnapshot {
    pub index: usize,
    pub max_index: usize,
}

struct CarouselInner {
    state: CarouselState,
    // Manual next/prev are no-ops until this instant passes.
    cooldown_until: Option<Instant>,
    timer: Option<JoinHandle<()>>,
}

struct CarouselShared {
    inner: Mutex<CarouselInner>,
    reset: Notify,
    interval: Duration,
    cooldown: Duration,
}

/// Shared carousel handle. All transitions take the single state lock, so
/// each user action is applied atomically; the auto-advance timer runs as
/// one tokio task which every manual navigation reschedules, so the
/// interval always restarts relative to the last user action.
#[derive(Clone)]
pub struct Carousel {
    shared: Arc<CarouselShared>,
}

impl Carousel {
    pub fn new(total: usize, visible: usize, interval: Duration, cooldown: Duration) -> Self {
        Carousel {
            shared: Arc::new(CarouselShared {
                inner: Mutex::new(CarouselInner {
                    state: CarouselState::new(total, visible),
                    cooldown_until: None,
                    timer: None,
                }),
                reset: Notify::new(),
                interval,
                cooldown,
            }),
        }
    }

    /// Spawns the auto-advance loop. Idempotent per handle lifetime: the
    /// task runs until `shutdown`.
    pub async fn start(&self) {
        let mut inner = self.shared.inner.lock().await;
        if inner.timer.is_some() {
            return;
        }
        let shared = Arc::clone(&self.shared);
        inner.timer = Some(tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = time::sleep(shared.interval) => {
                        let mut inner = shared.inner.lock().await;
                        inner.state.auto_advance();
                        tracing::debug!(index = inner.state.index(), "carousel auto-advance");
                    }
                    // A manual navigation happened; restart the interval.
                    _ = shared.reset.notified() => {}
                }
            }
        }));
    }

    /// Cancels the auto-advance timer so no transition fires after the
    /// owning view is torn down.
    pub async fn shutdown(&self) {
        let mut inner = self.shared.inner.lock().await;
        if let Some(timer) = inner.timer.take() {
            timer.abort();
        }
    }

    pub async fn snapshot(&self) -> CarouselSnapshot {
        let inner = self.shared.inner.lock().await;
        CarouselSnapshot {
            index: inner.state.index(),
            max_index: inner.state.max_index(),
        }
    }

    pub async fn state(&self) -> CarouselState {
        self.shared.inner.lock().await.state
    }

    pub async fn next(&self) -> CarouselSnapshot {
        self.navigate(|state| {
            state.next();
        })
        .await
    }

    pub async fn prev(&self) -> CarouselSnapshot {
        self.navigate(|state| {
            state.prev();
        })
        .await
    }

    /// Indicator-dot jump. Not gated by the transition cool-down, but it
    /// still restarts the auto-advance interval.
    pub async fn go_to(&self, index: usize) -> CarouselSnapshot {
        let mut inner = self.shared.inner.lock().await;
        inner.state.go_to(index);
        self.shared.reset.notify_one();
        CarouselSnapshot {
            index: inner.state.index(),
            max_index: inner.state.max_index(),
        }
    }

    async fn navigate(&self, transition: impl FnOnce(&mut CarouselState)) -> CarouselSnapshot {
        let mut inner = self.shared.inner.lock().await;
        let now = Instant::now();
        let in_cooldown = inner.cooldown_until.is_some_and(|until| now < until);
        if !in_cooldown {
            transition(&mut inner.state);
            inner.cooldown_until = Some(now + self.shared.cooldown);
            self.shared.reset.notify_one();
        } else {
            tracing::debug!("carousel navigation ignored during cool-down");
        }
        CarouselSnapshot {
            index: inner.state.index(),
            max_index: inner.state.max_index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_never_leaves_bounds() {
        // 7 featured items, 3 visible -> max index 4.
        let mut state = CarouselState::new(7, 3);
        assert_eq!(state.max_index(), 4);
        for _ in 0..10 {
            state.next();
        }
        assert_eq!(state.index(), 4);
        for _ in 0..20 {
            state.prev();
        }
        assert_eq!(state.index(), 0);
        state.go_to(99);
        assert_eq!(state.index(), 4);
    }

    #[test]
    fn auto_advance_wraps_at_the_last_window() {
        let mut state = CarouselState::new(5, 3);
        assert_eq!(state.max_index(), 2);
        state.auto_advance();
        state.auto_advance();
        assert_eq!(state.index(), 2);
        state.auto_advance();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn fewer_items_than_visible_pins_index_to_zero() {
        let mut state = CarouselState::new(2, 3);
        assert_eq!(state.max_index(), 0);
        state.next();
        state.auto_advance();
        assert_eq!(state.index(), 0);
        assert_eq!(state.window(), (0, 2));
    }

    #[tokio::test(start_paused = true)]
    async fn manual_navigation_respects_the_cooldown() {
        let carousel = Carousel::new(8, 3, DEFAULT_INTERVAL, Duration::from_millis(500));
        let first = carousel.next().await;
        assert_eq!(first.index, 1);
        // Second call lands inside the cool-down window and is a no-op.
        let second = carousel.next().await;
        assert_eq!(second.index, 1);
        time::advance(Duration::from_millis(501)).await;
        let third = carousel.next().await;
        assert_eq!(third.index, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn timer_advances_and_wraps() {
        let carousel = Carousel::new(4, 3, Duration::from_secs(5), Duration::ZERO);
        carousel.start().await;
        // Let the timer task register its sleep before moving the paused clock.
        tokio::task::yield_now().await;
        time::advance(Duration::from_millis(5_001)).await;
        tokio::task::yield_now().await;
        assert_eq!(carousel.snapshot().await.index, 1);
        time::advance(Duration::from_millis(5_001)).await;
        tokio::task::yield_now().await;
        // max index is 1, so the next tick wraps to the start.
        assert_eq!(carousel.snapshot().await.index, 0);
        carousel.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn manual_navigation_reschedules_the_timer() {
        let carousel = Carousel::new(8, 3, Duration::from_secs(5), Duration::ZERO);
        carousel.start().await;
        time::advance(Duration::from_secs(4)).await;
        tokio::task::yield_now().await;
        carousel.next().await;
        tokio::task::yield_now().await;
        // Without the reset the old timer would fire one second later.
        time::advance(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(carousel.snapshot().await.index, 1);
        time::advance(Duration::from_millis(3_001)).await;
        tokio::task::yield_now().await;
        assert_eq!(carousel.snapshot().await.index, 2);
        carousel.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_the_timer() {
        let carousel = Carousel::new(8, 3, Duration::from_secs(5), Duration::ZERO);
        carousel.start().await;
        carousel.shutdown().await;
        time::advance(Duration::from_secs(30)).await;
        tokio::task::yield_now().await;
        assert_eq!(carousel.snapshot().await.index, 0);
    }
}
