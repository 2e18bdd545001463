// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subscriber setup for the binary. The library only emits events.
//!
//! `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
//! Logs go to stderr so `--json` output on stdout stays parseable.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool, json: bool) {
    let default = if verbose { "tahqiq=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
