//! Unit tests for pulseboard.

mod layout_tests;
mod snapshot_tests;
