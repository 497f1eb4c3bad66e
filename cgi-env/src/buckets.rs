// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// CGI protocol variables, as defined by the gateway interface.
const CGI_VARS: [&str; 14] = [
    "GATEWAY_INTERFACE",
    "SERVER_PROTOCOL",
    "SERVER_SOFTWARE",
    "REQUEST_METHOD",
    "SCRIPT_NAME",
    "SCRIPT_FILENAME",
    "PATH_INFO",
    "PATH_TRANSLATED",
    "QUERY_STRING",
    "REQUEST_URI",
    "CONTENT_TYPE",
    "CONTENT_LENGTH",
    "DOCUMENT_ROOT",
    "REDIRECT_STATUS",
];

/// Server and connection variables.
const SERVER_VARS: [&str; 4] = ["SERVER_NAME", "SERVER_PORT", "REMOTE_ADDR", "REMOTE_PORT"];

/// Inbound request headers arrive with this name prefix.
const HTTP_PREFIX: &str = "HTTP_";

/// The residual bucket is capped to this many entries.
const OTHER_LIMIT: usize = 20;

/// One category of environment variables, ready for rendering.
pub struct Bucket {
    pub title: &'static str,
    pub css_class: &'static str,
    /// Rows sorted case-sensitively by name.
    pub rows: Vec<(String, String)>,
}

impl Bucket {
    fn new(title: &'static str, css_class: &'static str) -> Self {
        Self {
            title,
            css_class,
            rows: Vec::new(),
        }
    }
}

/// Partition the variable bag into the four fixed buckets.
///
/// Rows within each bucket are sorted by name regardless of input order.
/// The "Other Variables" bucket is truncated to the first [`OTHER_LIMIT`]
/// entries after sorting.
pub fn partition<'a>(vars: impl Iterator<Item = (&'a str, &'a str)>) -> [Bucket; 4] {
    let mut cgi = Bucket::new("CGI Variables", "cgi-var");
    let mut server = Bucket::new("Server Variables", "server-var");
    let mut http = Bucket::new("HTTP Headers", "http-var");
    let mut other = Bucket::new("Other Variables", "");

    for (name, value) in vars {
        let bucket = if CGI_VARS.contains(&name) {
            &mut cgi
        } else if SERVER_VARS.contains(&name) {
            &mut server
        } else if name.starts_with(HTTP_PREFIX) {
            &mut http
        } else {
            &mut other
        };
        bucket.rows.push((name.to_string(), value.to_string()));
    }

    for bucket in [&mut cgi, &mut server, &mut http, &mut other] {
        bucket.rows.sort();
    }
    other.rows.truncate(OTHER_LIMIT);

    [cgi, server, http, other]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(bucket: &Bucket) -> Vec<&str> {
        bucket.rows.iter().map(|(n, _)| n.as_str()).collect()
    }

    #[test]
    fn test_partition() {
        let vars = [
            ("PATH", "/usr/bin"),
            ("HTTP_USER_AGENT", "curl"),
            ("SERVER_NAME", "localhost"),
            ("QUERY_STRING", "a=1"),
            ("HTTP_ACCEPT", "*/*"),
            ("REQUEST_METHOD", "GET"),
        ];
        let [cgi, server, http, other] = partition(vars.into_iter());
        assert_eq!(names(&cgi), ["QUERY_STRING", "REQUEST_METHOD"]);
        assert_eq!(names(&server), ["SERVER_NAME"]);
        assert_eq!(names(&http), ["HTTP_ACCEPT", "HTTP_USER_AGENT"]);
        assert_eq!(names(&other), ["PATH"]);
    }

    #[test]
    fn test_rows_sorted_case_sensitively() {
        let vars = [("zeta", "1"), ("Alpha", "2"), ("beta", "3")];
        let [_, _, _, other] = partition(vars.into_iter());
        // Uppercase sorts before lowercase.
        assert_eq!(names(&other), ["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_other_truncated_after_sort() {
        let keys: Vec<String> = (0..30).map(|i| format!("VAR_{i:02}")).collect();
        // Feed in reverse order; the cap must apply to the sorted rows.
        let vars: Vec<(&str, &str)> = keys.iter().rev().map(|k| (k.as_str(), "v")).collect();
        let [_, _, _, other] = partition(vars.into_iter());
        assert_eq!(other.rows.len(), 20);
        assert_eq!(other.rows[0].0, "VAR_00");
        assert_eq!(other.rows[19].0, "VAR_19");
    }

    #[test]
    fn test_empty_input() {
        let [cgi, server, http, other] = partition(std::iter::empty());
        assert!(cgi.rows.is_empty());
        assert!(server.rows.is_empty());
        assert!(http.rows.is_empty());
        assert!(other.rows.is_empty());
    }
}

// vim: ts=4 sw=4 expandtab
