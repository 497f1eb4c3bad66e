// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![forbid(unsafe_code)]

mod page;

use anyhow as ah;
use cgi_page::Response;
use chrono::prelude::*;

fn main() -> ah::Result<()> {
    let now = Local::now();
    let utc = now.with_timezone(&Utc);
    Response::html(page::render(&now, &utc)?).emit()?;
    Ok(())
}

// vim: ts=4 sw=4 expandtab
