use std::sync::Arc;

use figi::{FigiError, OpenFigi, OpenFigiBuilder};

/// Build a client; uses the fixture mock when `FIGI_EXAMPLES_USE_MOCK` is set.
///
/// # Errors
/// Propagates builder errors, e.g. a bad `OPENFIGI_API_URL`.
pub fn get_client() -> Result<OpenFigi, FigiError> {
    let builder = OpenFigiBuilder::from_env();
    if std::env::var("FIGI_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using mock transport for CI) ---");
        builder
            .with_transport(Arc::new(figi_mock::MockTransport::new()))
            .build()
    } else {
        builder.build()
    }
}
