//! Crawl core
//!
//! Ties the URL, robots, fetch, and extraction collaborators into one
//! breadth-first loop: a FIFO [`Frontier`] with a visited set, a
//! [`ScopeFilter`] that keeps the crawl on one site, a [`FetchDispatcher`]
//! that picks the static or rendered path per URL, and the [`Coordinator`]
//! that drives them under a page budget with a politeness delay.

mod coordinator;
mod dispatcher;
mod frontier;
mod scope;

pub use coordinator::{crawl, Coordinator};
pub use dispatcher::{FetchDispatcher, UrlClassifier};
pub use frontier::Frontier;
pub use scope::ScopeFilter;
