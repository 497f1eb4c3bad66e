// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![forbid(unsafe_code)]

mod stream;

use crate::stream::{stream_ticks, ticks};
use anyhow as ah;
use clap::Parser;
use std::{
    io::{self, Write as _},
    time::Duration,
};

#[derive(Parser, Debug, Clone)]
struct Opts {
    /// The pacing delay between ticks, in milliseconds.
    #[arg(long, default_value = "1000")]
    interval_ms: u64,
}

fn main() -> ah::Result<()> {
    let opts = Opts::parse();
    let mut f = io::stdout().lock();

    // The streaming response must not be cached, and the headers must be
    // on the wire before the first tick.
    f.write_all(b"Content-Type: text/plain\r\nCache-Control: no-cache\r\n\r\n")?;
    f.flush()?;

    match stream_ticks(&mut f, ticks(), Duration::from_millis(opts.interval_ms)) {
        // The consumer hung up. That is the regular way this
        // never-terminating response ends.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => Ok(result?),
    }
}

// vim: ts=4 sw=4 expandtab
