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
use cgi_request::{CgiRequest, Query};

fn main() -> ah::Result<()> {
    let mut request = CgiRequest::from_process_env();
    let content_length = request.content_length();
    let body = request.read_body();
    let form = Query::parse(&body);
    Response::html(page::render(&form, &body, content_length)?).emit()?;
    Ok(())
}

// vim: ts=4 sw=4 expandtab
