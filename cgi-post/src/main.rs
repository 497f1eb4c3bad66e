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
use cgi_request::CgiRequest;

fn main() -> ah::Result<()> {
    let mut request = CgiRequest::from_process_env();
    let content_length = request.content_length();
    let method = request.method().to_string();
    let content_type = request.content_type().map(str::to_string);
    let body = request.read_body();
    let html = page::render(content_type.as_deref(), content_length, &method, &body)?;
    Response::html(html).emit()?;
    Ok(())
}

// vim: ts=4 sw=4 expandtab
