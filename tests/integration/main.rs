//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the siren against mock
//! adapters.  All tests run on the host (x86_64) with no real hardware.

mod adapter_tests;
mod mock_hw;
mod scenario_tests;
