//! Shared configuration for domain property tests.

use proptest::prelude::ProptestConfig;

/// Default proptest config: enough cases to matter, fast enough for CI.
pub fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    }
}
