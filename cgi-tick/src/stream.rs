// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::{io, thread, time::Duration};

/// The unbounded tick sequence, counting from zero.
///
/// Lazy, so a consumer (or a test) can take as much of it as it wants.
pub fn ticks() -> impl Iterator<Item = u64> {
    0_u64..
}

/// Stream one `tick <n>` line per element of `ticks` to `w`.
///
/// Each line is flushed before the pacing sleep, so the consumer sees
/// every tick before the next interval starts. The first failing write
/// or flush ends the stream; with an infinite tick sequence that is the
/// only way out, and it is how a disconnected consumer shows up.
pub fn stream_ticks<W, I>(w: &mut W, ticks: I, interval: Duration) -> io::Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = u64>,
{
    for n in ticks {
        writeln!(w, "tick {n}")?;
        w.flush()?;
        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }
    Ok(())
}


// vim: ts=4 sw=4 expandtab
