//! In-memory watchlist store.
//!
//! Single source of truth for all watchlists during a session. Every
//! state-changing mutation notifies subscribed observers with a full
//! snapshot. Callbacks run outside both the state lock and the observer
//! lock, so an observer may read the store, mutate it, or manage
//! subscriptions from inside its callback.
//!
//! Absence is never an error: deleting a missing list, adding to a
//! missing list, or removing a missing stock are silent no-ops, and
//! no-ops do not notify.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::{Stock, Symbol, ValidationError, Watchlist, WatchlistId};

type Observer = Arc<dyn Fn(&[Watchlist]) + Send + Sync>;

/// Handle returned by [`WatchlistStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct WatchlistStore {
    watchlists: RwLock<Vec<Watchlist>>,
    observers: Mutex<Vec<(u64, Observer)>>,
    next_subscription: AtomicU64,
}

impl WatchlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a watchlist with a fresh id, appended in creation order.
    /// Names are trimmed and must be non-empty; this is the single
    /// validation point, callers need no guard of their own.
    pub fn create_watchlist(&self, name: &str) -> Result<Watchlist, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyWatchlistName);
        }

        let watchlist = Watchlist {
            id: WatchlistId::generate(),
            name: trimmed.to_owned(),
            stocks: Vec::new(),
        };

        let snapshot = {
            let mut guard = self
                .watchlists
                .write()
                .expect("watchlist store should not be poisoned");
            guard.push(watchlist.clone());
            guard.clone()
        };
        self.notify(&snapshot);

        Ok(watchlist)
    }

    /// Remove a watchlist and all its stocks. Returns whether anything
    /// changed.
    pub fn delete_watchlist(&self, id: &WatchlistId) -> bool {
        let snapshot = {
            let mut guard = self
                .watchlists
                .write()
                .expect("watchlist store should not be poisoned");
            let before = guard.len();
            guard.retain(|watchlist| &watchlist.id != id);
            if guard.len() == before {
                return false;
            }
            guard.clone()
        };
        self.notify(&snapshot);
        true
    }

    /// Append a stock to a watchlist. Idempotent on the stock's symbol;
    /// returns whether anything changed.
    pub fn add_stock(&self, id: &WatchlistId, stock: Stock) -> bool {
        let snapshot = {
            let mut guard = self
                .watchlists
                .write()
                .expect("watchlist store should not be poisoned");
            let Some(watchlist) = guard.iter_mut().find(|watchlist| &watchlist.id == id) else {
                return false;
            };
            if watchlist.contains(&stock.symbol) {
                return false;
            }
            watchlist.stocks.push(stock);
            guard.clone()
        };
        self.notify(&snapshot);
        true
    }

    /// Remove a stock by symbol. Returns whether anything changed.
    pub fn remove_stock(&self, id: &WatchlistId, symbol: &Symbol) -> bool {
        let snapshot = {
            let mut guard = self
                .watchlists
                .write()
                .expect("watchlist store should not be poisoned");
            let Some(watchlist) = guard.iter_mut().find(|watchlist| &watchlist.id == id) else {
                return false;
            };
            let before = watchlist.stocks.len();
            watchlist.stocks.retain(|stock| &stock.symbol != symbol);
            if watchlist.stocks.len() == before {
                return false;
            }
            guard.clone()
        };
        self.notify(&snapshot);
        true
    }

    /// Snapshot of the current state, in creation order.
    pub fn watchlists(&self) -> Vec<Watchlist> {
        self.watchlists
            .read()
            .expect("watchlist store should not be poisoned")
            .clone()
    }

    pub fn find(&self, id: &WatchlistId) -> Option<Watchlist> {
        self.watchlists
            .read()
            .expect("watchlist store should not be poisoned")
            .iter()
            .find(|watchlist| &watchlist.id == id)
            .cloned()
    }

    /// Locate a watchlist by its (not necessarily unique) name; returns
    /// the first match in creation order.
    pub fn find_by_name(&self, name: &str) -> Option<Watchlist> {
        let trimmed = name.trim();
        self.watchlists
            .read()
            .expect("watchlist store should not be poisoned")
            .iter()
            .find(|watchlist| watchlist.name == trimmed)
            .cloned()
    }

    pub fn subscribe(
        &self,
        observer: impl Fn(&[Watchlist]) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = self.next_subscription.fetch_add(1, Ordering::Relaxed);
        self.observers
            .lock()
            .expect("observer list should not be poisoned")
            .push((id, Arc::new(observer)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, subscription: SubscriptionId) -> bool {
        let mut observers = self
            .observers
            .lock()
            .expect("observer list should not be poisoned");
        let before = observers.len();
        observers.retain(|(id, _)| *id != subscription.0);
        observers.len() != before
    }

    // Callbacks run with the observer lock released; a callback that
    // mutates the store or subscribes/unsubscribes must not deadlock.
    fn notify(&self, snapshot: &[Watchlist]) {
        let observers: Vec<Observer> = self
            .observers
            .lock()
            .expect("observer list should not be poisoned")
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            observer(snapshot);
        }
    }
}
