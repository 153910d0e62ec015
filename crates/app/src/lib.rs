//! Back-office entity store: typed collections of educational content and
//! restaurant records, persisted as snapshots or documents.

pub mod config;
pub mod context;
pub mod domain;
pub mod ids;
pub mod persistence;
pub mod store;
pub mod validation;

#[cfg(test)]
mod test;
