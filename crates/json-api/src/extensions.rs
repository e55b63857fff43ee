//! Depot lookups that fail as HTTP errors.

use std::any::{Any, type_name};

use salvo::prelude::Depot;
use tracing::error;

use crate::errors::ApiError;

pub(crate) trait DepotExt {
    /// Borrow an injected value, or answer 500 when the hoop that provides it is missing.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_missing| {
            error!(value = type_name::<T>(), "depot lookup failed");

            ApiError::internal()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn injected_values_are_returned() {
        let mut depot = Depot::new();

        depot.inject(Arc::new(7_u8));

        assert!(matches!(depot.obtain_or_500::<Arc<u8>>(), Ok(value) if **value == 7));
    }

    #[test]
    fn missing_values_become_internal_errors() {
        let depot = Depot::new();

        let result = depot.obtain_or_500::<Arc<u8>>();

        assert!(result.is_err(), "expected a missing value to fail");
    }
}
