// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![forbid(unsafe_code)]

mod compute;
mod page;

use anyhow as ah;
use cgi_page::Response;
use cgi_request::CgiRequest;

fn main() -> ah::Result<()> {
    let request = CgiRequest::from_process_env();
    Response::html(page::render(&request.query())?).emit()?;
    Ok(())
}

// vim: ts=4 sw=4 expandtab
