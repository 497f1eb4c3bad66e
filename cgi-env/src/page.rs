// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::buckets::{partition, Bucket};
use anyhow as ah;
use cgi_page::{escape_text, Document};
use std::{fmt::Write as _, writeln as ln};

const CSS: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #1a1a2e;
            color: #eee;
            margin: 0;
            padding: 20px;
        }
        .container {
            max-width: 1000px;
            margin: 0 auto;
        }
        h1 {
            color: #00d4ff;
            text-align: center;
            margin-bottom: 30px;
        }
        table {
            width: 100%;
            border-collapse: collapse;
            background: rgba(255,255,255,0.05);
            border-radius: 10px;
            overflow: hidden;
        }
        th, td {
            padding: 12px 15px;
            text-align: left;
            border-bottom: 1px solid rgba(255,255,255,0.1);
        }
        th {
            background: rgba(0,212,255,0.2);
            color: #00d4ff;
            font-weight: 600;
        }
        tr:hover {
            background: rgba(255,255,255,0.05);
        }
        td:first-child {
            font-family: 'Monaco', 'Consolas', monospace;
            color: #7b2ff7;
            font-weight: 500;
        }
        td:last-child {
            font-family: 'Monaco', 'Consolas', monospace;
            word-break: break-all;
            color: #aaa;
        }
        .cgi-var td:first-child { color: #00c853; }
        .http-var td:first-child { color: #ff9800; }
        .server-var td:first-child { color: #00d4ff; }
        a {
            color: #00d4ff;
            text-decoration: none;
            display: inline-block;
            margin-top: 20px;
        }
        a:hover { text-decoration: underline; }
        .section { margin-top: 30px; }
        .section h2 { color: #888; font-size: 1em; margin-bottom: 10px; }
    "#;

#[rustfmt::skip]
fn render_bucket(b: &mut String, bucket: &Bucket) -> ah::Result<()> {
    // A bucket with nothing to show renders no table at all.
    if bucket.rows.is_empty() {
        return Ok(());
    }

    let title = bucket.title;
    let cls = bucket.css_class;

    ln!(b, r#"        <div class="section"><h2>{title}</h2>"#)?;
    ln!(b, r#"        <table>"#)?;
    ln!(b, r#"        <tr><th>Variable</th><th>Value</th></tr>"#)?;
    for (name, value) in &bucket.rows {
        let name = escape_text(name);
        let value = escape_text(value);
        ln!(b, r#"        <tr class="{cls}"><td>{name}</td><td>{value}</td></tr>"#)?;
    }
    ln!(b, r#"        </table></div>"#)?;
    Ok(())
}

pub fn render<'a>(vars: impl Iterator<Item = (&'a str, &'a str)>) -> ah::Result<String> {
    let buckets = partition(vars);

    let mut doc = Document::new("CGI Environment Variables", CSS).with_charset("UTF-8");
    let d = doc.body();

    ln!(d, r#"    <div class="container">"#)?;
    ln!(d, r#"        <h1>&#x1F50D; CGI Environment Variables</h1>"#)?;
    for bucket in &buckets {
        render_bucket(d, bucket)?;
    }
    ln!(d)?;
    ln!(d, r#"        <a href="/">&lt;- Back to Test Suite</a>"#)?;
    ln!(d, r#"    </div>"#)?;

    Ok(doc.render())
}


// vim: ts=4 sw=4 expandtab
