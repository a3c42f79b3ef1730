//! Shared test harness modules for the Loadwise CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use crate::optimise::{
    OptimiseConfig, config_from_layers_for_test, load_load_request, run_optimise_with,
};

mod helpers;
