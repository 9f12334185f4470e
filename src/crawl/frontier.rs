// src/crawl/frontier.rs
// =============================================================================
// The shared traversal state of a crawl:
// - the frontier: a FIFO queue of URLs waiting to be fetched
// - the visited registry: every URL ever admitted (including the seed)
//
// Both live behind ONE mutex. That is what makes `try_admit` atomic: the
// "have we seen it?" check and the "remember it + queue it" insert happen
// while holding the same lock, so two workers racing on the same new URL can
// never both win.
//
// We also track how many URLs are currently claimed by workers (popped but
// not yet finished). A worker that finds the queue empty uses this to decide
// between "the crawl is over" and "someone else may still add work".
//
// Rust concepts:
// - Mutex<T>: interior mutability shared across tasks
// - Notify: lightweight async wake-up signal from tokio
// =============================================================================

use std::collections::{HashSet, VecDeque};
use std::sync::{Mutex, MutexGuard};
use tokio::sync::futures::Notified;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct FrontierState {
    queue: VecDeque<String>,
    visited: HashSet<String>,
    in_flight: usize,
}

/// FIFO frontier plus visited registry, safe to share between workers.
#[derive(Debug, Default)]
pub struct Frontier {
    state: Mutex<FrontierState>,
    changed: Notify,
}

impl Frontier {
    /// Creates a frontier whose queue and visited set contain only the seed.
    pub fn with_seed(seed: impl Into<String>) -> Self {
        let frontier = Frontier::default();
        frontier.try_admit(seed);
        frontier
    }

    fn lock(&self) -> MutexGuard<'_, FrontierState> {
        // Critical sections are plain collection ops; poisoning leaves them consistent.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Admits a URL if it has never been seen.
    ///
    /// Returns true and queues the URL when it is new; returns false and
    /// changes nothing when it was already admitted earlier.
    pub fn try_admit(&self, url: impl Into<String>) -> bool {
        let url = url.into();
        let admitted = {
            let mut state = self.lock();
            if state.visited.insert(url.clone()) {
                state.queue.push_back(url);
                true
            } else {
                false
            }
        };

        if admitted {
            self.changed.notify_waiters();
        }
        admitted
    }

    /// Pops the next URL from the front of the queue.
    ///
    /// A returned URL counts as "in flight" until [`Frontier::complete`] is
    /// called for it.
    pub fn pop_next(&self) -> Option<String> {
        let mut state = self.lock();
        let url = state.queue.pop_front()?;
        state.in_flight += 1;
        Some(url)
    }

    /// Marks one previously popped URL as finished.
    pub fn complete(&self) {
        {
            let mut state = self.lock();
            state.in_flight = state.in_flight.saturating_sub(1);
        }
        self.changed.notify_waiters();
    }

    /// True when the queue is empty and no worker holds a popped URL,
    /// i.e. nothing can ever be added again.
    pub fn is_drained(&self) -> bool {
        let state = self.lock();
        state.queue.is_empty() && state.in_flight == 0
    }

    pub fn pending(&self) -> usize {
        self.lock().queue.len()
    }

    pub fn in_flight(&self) -> usize {
        self.lock().in_flight
    }

    pub fn visited_count(&self) -> usize {
        self.lock().visited.len()
    }

    /// Copy of every URL admitted so far, in no particular order.
    pub fn visited_snapshot(&self) -> Vec<String> {
        self.lock().visited.iter().cloned().collect()
    }

    /// A future that resolves the next time the frontier changes
    /// (URL admitted or a popped URL completed).
    ///
    /// Call `enable()` on the pinned future BEFORE checking the frontier,
    /// otherwise a change between the check and the await can be missed.
    pub fn changed(&self) -> Notified<'_> {
        self.changed.notified()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_seed_is_visited_and_queued() {
        let frontier = Frontier::with_seed("https://example.com/");
        assert_eq!(frontier.visited_count(), 1);
        assert_eq!(frontier.pending(), 1);
        assert_eq!(frontier.visited_snapshot(), vec!["https://example.com/"]);
    }

    #[test]
    fn test_try_admit_rejects_duplicates() {
        let frontier = Frontier::with_seed("https://example.com/");
        assert!(frontier.try_admit("https://example.com/a"));
        assert!(!frontier.try_admit("https://example.com/a"));
        assert!(!frontier.try_admit("https://example.com/"));
        assert_eq!(frontier.visited_count(), 2);
        assert_eq!(frontier.pending(), 2);
    }

    #[test]
    fn test_pop_is_fifo() {
        let frontier = Frontier::with_seed("s");
        frontier.try_admit("a");
        frontier.try_admit("b");
        assert_eq!(frontier.pop_next().as_deref(), Some("s"));
        assert_eq!(frontier.pop_next().as_deref(), Some("a"));
        assert_eq!(frontier.pop_next().as_deref(), Some("b"));
        assert_eq!(frontier.pop_next(), None);
    }

    #[test]
    fn test_visited_never_shrinks_after_pop() {
        let frontier = Frontier::with_seed("s");
        frontier.pop_next();
        assert_eq!(frontier.pending(), 0);
        assert_eq!(frontier.visited_count(), 1);
        assert!(!frontier.try_admit("s"));
    }

    #[test]
    fn test_drained_tracks_in_flight() {
        let frontier = Frontier::with_seed("s");
        assert!(!frontier.is_drained());

        frontier.pop_next();
        assert_eq!(frontier.in_flight(), 1);
        assert!(!frontier.is_drained());

        frontier.complete();
        assert_eq!(frontier.in_flight(), 0);
        assert!(frontier.is_drained());
    }

    #[test]
    fn test_concurrent_admit_has_exactly_one_winner() {
        let frontier = Arc::new(Frontier::with_seed("https://example.com/"));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let frontier = Arc::clone(&frontier);
                std::thread::spawn(move || frontier.try_admit("https://example.com/new"))
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|admitted| *admitted)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(frontier.visited_count(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_admit_across_tasks() {
        let frontier = Arc::new(Frontier::with_seed("https://example.com/"));

        let tasks = (0..32).map(|_| {
            let frontier = Arc::clone(&frontier);
            tokio::spawn(async move { frontier.try_admit("https://example.com/race") })
        });

        let results = futures::future::join_all(tasks).await;
        let winners = results.into_iter().filter(|r| *r.as_ref().unwrap()).count();

        assert_eq!(winners, 1);
        assert_eq!(frontier.visited_count(), 2);
    }

    #[tokio::test]
    async fn test_changed_wakes_on_admit() {
        let frontier = Arc::new(Frontier::with_seed("s"));
        frontier.pop_next();

        let notified = frontier.changed();
        tokio::pin!(notified);
        notified.as_mut().enable();

        let other = Arc::clone(&frontier);
        tokio::spawn(async move {
            other.try_admit("t");
        });

        tokio::time::timeout(std::time::Duration::from_secs(5), notified)
            .await
            .expect("admit should notify waiters");
        assert_eq!(frontier.pending(), 1);
    }
}
