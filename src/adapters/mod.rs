//! Site adapters
//!
//! Each adapter knows the markup dialect of one source site and locates the
//! recipe fields in its pages. The registry maps canonical hosts to adapters.

pub mod chefkoch;

use std::collections::BTreeMap;
use std::sync::Arc;

use scraper::Html;

use crate::tools::locate::{FieldNotFound, LocatedFields};
use crate::types::Domain;

pub use chefkoch::ChefkochAdapter;

pub trait SiteAdapter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Hosts this adapter parses, e.g. `www.chefkoch.de`.
    fn hosts(&self) -> &[&'static str];

    /// Find the title, description, ingredient table and directions block.
    fn locate<'a>(&self, doc: &'a Html) -> Result<LocatedFields<'a>, FieldNotFound>;
}

/// Host allowlist and adapter lookup.
#[derive(Clone, Default)]
pub struct AdapterRegistry {
    by_host: BTreeMap<Domain, Arc<dyn SiteAdapter>>,
}

impl AdapterRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with every built-in adapter.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(ChefkochAdapter));
        registry
    }

    /// Register `adapter` for all of its hosts; later registrations win.
    pub fn register(&mut self, adapter: Arc<dyn SiteAdapter>) {
        for host in adapter.hosts() {
            self.by_host
                .insert(Domain::from_raw(host), Arc::clone(&adapter));
        }
    }

    pub fn get(&self, host: &Domain) -> Option<&Arc<dyn SiteAdapter>> {
        self.by_host.get(host)
    }

    pub fn supports(&self, host: &Domain) -> bool {
        self.by_host.contains_key(host)
    }

    /// Supported hosts in sorted order.
    pub fn hosts(&self) -> Vec<String> {
        self.by_host.keys().map(|d| d.0.clone()).collect()
    }
}
