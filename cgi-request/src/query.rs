// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[inline]
fn hex_nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Lenient percent-decoding of one query string component.
///
/// `+` decodes to a space.
/// An invalid or truncated `%XX` sequence is not an error.
/// The `%` passes through as literal text instead.
/// Byte sequences that do not form valid UTF-8 are decoded lossily.
pub fn percent_decode(s: &str) -> String {
    let raw = s.as_bytes();
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        match raw[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                if i + 2 < raw.len() {
                    if let (Some(hi), Some(lo)) = (hex_nibble(raw[i + 1]), hex_nibble(raw[i + 2]))
                    {
                        out.push((hi << 4) | lo);
                        i += 3;
                        continue;
                    }
                }
                out.push(b'%');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Parsed query string or urlencoded form body.
///
/// Parsing is total. There is no malformed input,
/// only input that decodes to fewer pairs.
pub struct Query {
    /// All decoded pairs in submission order, duplicates included.
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Parse a query string or urlencoded form body.
    ///
    /// Pairs without a `=` and pairs with a blank raw value are dropped
    /// entirely: a blank value behaves like an absent parameter for
    /// defaulting lookups and also produces no row in parameter
    /// listings ([`pairs`](Self::pairs)).
    pub fn parse(raw: &str) -> Self {
        let mut pairs = Vec::new();
        for group in raw.split('&') {
            let Some((name, value)) = group.split_once('=') else {
                continue;
            };
            // A blank value behaves like an absent parameter.
            if value.is_empty() {
                continue;
            }
            pairs.push((percent_decode(name), percent_decode(value)));
        }
        Self { pairs }
    }

    /// Get the first value submitted under `name`.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Total lookup: absent names resolve to `default`, never to an error.
    pub fn first_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.first(name).unwrap_or(default)
    }

    /// All pairs in submission order, duplicates included.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}


// vim: ts=4 sw=4 expandtab
