//! In-memory fixtures for service-level tests.

mod context;
mod helpers;

pub(crate) use context::TestContext;
pub(crate) use helpers::*;
