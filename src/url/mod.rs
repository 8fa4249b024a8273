//! URL handling module for SiteHarvest
//!
//! Link canonicalization and domain extraction. Normalization here is
//! deliberately minimal: the visited set and the frontier deduplicate on the
//! exact canonical strings this module produces, so every rule it applies (or
//! refuses to apply) is part of the crawl's identity contract.

mod domain;
mod normalize;

pub use domain::extract_domain;
pub use normalize::normalize_link;
