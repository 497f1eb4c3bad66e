// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![forbid(unsafe_code)]

mod query;
mod request;

pub use crate::{
    query::{percent_decode, Query},
    request::CgiRequest,
};

// vim: ts=4 sw=4 expandtab
