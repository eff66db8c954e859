//! Snapshot tests using the insta crate.
//!
//! Snapshot testing captures complex output and stores it in `.snap` files,
//! making it easy to verify and update expected values. Here it pins the
//! configuration wire format and the exact block sequence a layout pass
//! produces for a known grid.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use pulseboard::layout;
use pulseboard::{GridConfig, Measure};

#[test]
fn snapshot_default_config() {
    let config = GridConfig::default();
    insta::assert_json_snapshot!("default_config", config);
}

#[test]
fn snapshot_measure_defaults() {
    let measure = Measure::default();
    insta::assert_json_snapshot!("measure_defaults", measure);
}

#[test]
fn snapshot_block_sequence() {
    let config = GridConfig {
        frequencies: 2,
        ..GridConfig::default()
    };
    let pass = layout::compute(&config, &[Measure::new(2, 1)], 0.0, 0.0, &[]);
    insta::assert_json_snapshot!("block_sequence", pass.blocks);
}
