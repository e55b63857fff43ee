//! Shared test support.

mod db;

pub(crate) use context::TestContext;
pub(crate) use upstream::CannedUpstream;
