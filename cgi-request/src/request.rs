// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::query::Query;
use std::{collections::HashMap, env, io};

const MAX_CGIENV_USIZE_LEN: usize = 10;
const BODY_CHUNK_LEN: usize = 4096;

/// One CGI invocation's inbound data: the variable bag handed over by the
/// web server plus the request body stream.
///
/// Handlers receive this as an explicit value instead of reading ambient
/// process state, so they stay pure and testable. `from_process_env()`
/// wires up the real environment and stdin in `main`.
pub struct CgiRequest<R> {
    env: HashMap<String, String>,
    body: R,
}

impl CgiRequest<io::Stdin> {
    /// Build the request context from the live CGI process environment.
    pub fn from_process_env() -> Self {
        Self::new(env::vars().collect(), io::stdin())
    }
}

impl<R: io::Read> CgiRequest<R> {
    pub fn new(env: HashMap<String, String>, body: R) -> Self {
        Self { env, body }
    }

    pub fn var(&self, name: &str) -> Option<&str> {
        self.env.get(name).map(|v| v.as_str())
    }

    /// All CGI variables, in unspecified order.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.env.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn method(&self) -> &str {
        self.var("REQUEST_METHOD").unwrap_or_default()
    }

    pub fn query_string(&self) -> &str {
        self.var("QUERY_STRING").unwrap_or_default()
    }

    /// The parsed `QUERY_STRING`.
    pub fn query(&self) -> Query {
        Query::parse(self.query_string())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.var("CONTENT_TYPE")
    }

    /// The declared body length.
    ///
    /// A missing or non-numeric `CONTENT_LENGTH` counts as zero.
    pub fn content_length(&self) -> usize {
        let value = self.var("CONTENT_LENGTH").unwrap_or_default().trim();
        if value.len() <= MAX_CGIENV_USIZE_LEN {
            value.parse::<usize>().unwrap_or_default()
        } else {
            0
        }
    }

    /// Read the request body, bounded by the declared `CONTENT_LENGTH`.
    ///
    /// Stops early at end-of-stream, so an over-declared length cannot
    /// hang the request. A read error likewise degrades to whatever has
    /// been read so far. The bytes are decoded lossily as UTF-8.
    pub fn read_body(&mut self) -> String {
        let mut remaining = self.content_length();
        let mut data = Vec::with_capacity(remaining.min(BODY_CHUNK_LEN * 16));
        let mut chunk = [0_u8; BODY_CHUNK_LEN];
        while remaining > 0 {
            let want = remaining.min(chunk.len());
            match self.body.read(&mut chunk[..want]) {
                Ok(0) => break,
                Ok(n) => {
                    data.extend_from_slice(&chunk[..n]);
                    remaining -= n;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => (),
                Err(_) => break,
            }
        }
        String::from_utf8_lossy(&data).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(vars: &[(&str, &str)], body: &'static str) -> CgiRequest<&'static [u8]> {
        let env = vars
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect();
        CgiRequest::new(env, body.as_bytes())
    }

    #[test]
    fn test_vars() {
        let r = request(&[("REQUEST_METHOD", "GET"), ("QUERY_STRING", "a=1")], "");
        assert_eq!(r.method(), "GET");
        assert_eq!(r.query_string(), "a=1");
        assert_eq!(r.query().first("a"), Some("1"));
        assert_eq!(r.var("SERVER_NAME"), None);
        assert_eq!(r.content_type(), None);
    }

    #[test]
    fn test_missing_vars_default() {
        let r = request(&[], "");
        assert_eq!(r.method(), "");
        assert_eq!(r.query_string(), "");
        assert!(r.query().is_empty());
    }

    #[test]
    fn test_content_length() {
        assert_eq!(request(&[("CONTENT_LENGTH", "42")], "").content_length(), 42);
        assert_eq!(request(&[("CONTENT_LENGTH", " 7 ")], "").content_length(), 7);
        assert_eq!(request(&[], "").content_length(), 0);
        assert_eq!(request(&[("CONTENT_LENGTH", "")], "").content_length(), 0);
        assert_eq!(request(&[("CONTENT_LENGTH", "xyz")], "").content_length(), 0);
        assert_eq!(request(&[("CONTENT_LENGTH", "-5")], "").content_length(), 0);
        assert_eq!(
            request(&[("CONTENT_LENGTH", "99999999999999999999")], "").content_length(),
            0
        );
    }

    #[test]
    fn test_read_body_exact() {
        let mut r = request(&[("CONTENT_LENGTH", "5")], "name=value");
        assert_eq!(r.read_body(), "name=");
    }

    #[test]
    fn test_read_body_short_stream() {
        // Declared length longer than the stream must not hang.
        let mut r = request(&[("CONTENT_LENGTH", "100")], "abc");
        assert_eq!(r.read_body(), "abc");
    }

    #[test]
    fn test_read_body_zero_length() {
        let mut r = request(&[], "ignored");
        assert_eq!(r.read_body(), "");
        let mut r = request(&[("CONTENT_LENGTH", "0")], "ignored");
        assert_eq!(r.read_body(), "");
    }
}

// vim: ts=4 sw=4 expandtab
