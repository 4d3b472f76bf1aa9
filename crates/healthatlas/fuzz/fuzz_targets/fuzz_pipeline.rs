//! Fuzz target for the ingestion pipeline.
//!
//! Checks that parsing, normalization and resolution never panic, that
//! every surviving record carries an African code, and that no view
//! panics for any indicator.

#![no_main]

use healthatlas::geo::is_allowed;
use healthatlas::{HealthAtlas, Indicator, export_csv};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(loaded) = HealthAtlas::new().load_bytes(data) else {
        return;
    };

    for row in 0..loaded.dataset.len() {
        assert!(is_allowed(loaded.dataset.iso_a3(row)));
    }

    let mut dashboard = loaded.dashboard(Indicator::default());
    for indicator in Indicator::ALL {
        let _ = dashboard.select(indicator);
    }

    let _ = export_csv(&loaded.dataset);
});
