//! In-memory catalog API for tests.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use super::{CatalogTransport, FetchError};
use crate::config::AppConfig;

pub(crate) const BASE: &str = "https://api.test/pokemon";

/// Pending once, so sibling requests in a batch overlap
#[derive(Default)]
struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

#[derive(Default)]
struct FakeState {
    bodies: HashMap<String, Value>,
    statuses: HashMap<String, u16>,
    requests: Vec<String>,
    /// Completed detail count observed when each detail request started
    completed_at_start: Vec<usize>,
    in_flight: Cell<usize>,
    max_in_flight: Cell<usize>,
    completed: Cell<usize>,
}

/// In-memory API; clones share recorded requests
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    state: Rc<RefCell<FakeState>>,
}

impl FakeTransport {
    /// Catalog of `count` items named "mon-<id>"
    pub(crate) fn with_catalog(count: u32) -> Self {
        let fake = Self::default();
        let results: Vec<Value> = (1..=count)
            .map(|id| json!({ "name": format!("mon-{id}"), "url": detail_url(id) }))
            .collect();
        fake.respond(&list_url(), json!({ "count": count, "results": results }));
        for id in 1..=count {
            fake.respond(
                &detail_url(id),
                json!({
                    "id": id,
                    "name": format!("mon-{id}"),
                    "sprites": { "front_default": format!("https://img.test/{id}.png") }
                }),
            );
        }
        fake
    }

    pub(crate) fn respond(&self, url: &str, body: Value) {
        self.state.borrow_mut().bodies.insert(url.to_string(), body);
    }

    pub(crate) fn fail(&self, url: &str, status: u16) {
        self.state.borrow_mut().statuses.insert(url.to_string(), status);
    }

    pub(crate) fn heal(&self, url: &str) {
        self.state.borrow_mut().statuses.remove(url);
    }

    pub(crate) fn requests_to(&self, url: &str) -> usize {
        self.state.borrow().requests.iter().filter(|r| *r == url).count()
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.state.borrow().max_in_flight.get()
    }

    /// Completed detail count seen by each detail request when it started
    pub(crate) fn completed_at_start(&self) -> Vec<usize> {
        self.state.borrow().completed_at_start.clone()
    }
}

impl CatalogTransport for FakeTransport {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        {
            let mut state = self.state.borrow_mut();
            state.requests.push(url.to_string());
            if url != list_url() {
                let completed = state.completed.get();
                state.completed_at_start.push(completed);
            }
            let now = state.in_flight.get() + 1;
            state.in_flight.set(now);
            state.max_in_flight.set(state.max_in_flight.get().max(now));
        }

        YieldNow::default().await;

        let state = self.state.borrow();
        state.in_flight.set(state.in_flight.get() - 1);
        if url != list_url() {
            state.completed.set(state.completed.get() + 1);
        }
        if let Some(status) = state.statuses.get(url) {
            return Err(FetchError::Status { status: *status, url: url.to_string() });
        }
        let body = state.bodies.get(url).cloned().ok_or(FetchError::Status {
            status: 404,
            url: url.to_string(),
        })?;
        serde_json::from_value(body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

pub(crate) fn test_config() -> AppConfig {
    AppConfig {
        api_base_url: BASE,
        catalog_size: 45,
        batch_size: 20,
        ..AppConfig::default()
    }
}

pub(crate) fn list_url() -> String {
    test_config().list_url()
}

pub(crate) fn detail_url(id: u32) -> String {
    format!("{BASE}/{id}/")
}
