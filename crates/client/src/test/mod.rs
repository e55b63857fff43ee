
pub(crate) use server::{CannedServer, unreachable_base_url};
