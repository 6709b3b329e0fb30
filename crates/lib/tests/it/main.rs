/*! Integration tests for keypath.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * - store: Tests for the Store API (put/get/contains/remove, builders, case folding)
 * - json: Tests for document loading and JSON export
 * - errors: Tests for error classification across the public API
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("keypath=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod json;
mod store;
