// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow as ah;
use cgi_page::Document;
use chrono::prelude::*;
use std::{fmt::Display, fmt::Write as _, writeln as ln};

const CSS: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: linear-gradient(135deg, #0f0c29 0%, #302b63 50%, #24243e 100%);
            min-height: 100vh;
            display: flex;
            justify-content: center;
            align-items: center;
            margin: 0;
            color: #fff;
        }
        .container {
            text-align: center;
            padding: 40px;
        }
        .time-display {
            font-size: 5em;
            font-weight: 300;
            margin: 20px 0;
            font-family: 'Monaco', 'Consolas', monospace;
            text-shadow: 0 0 20px rgba(0,212,255,0.5);
        }
        .date-display {
            font-size: 1.5em;
            color: #888;
            margin-bottom: 40px;
        }
        .info {
            background: rgba(255,255,255,0.1);
            padding: 20px 40px;
            border-radius: 10px;
            display: inline-block;
        }
        .info p {
            margin: 10px 0;
            color: #aaa;
        }
        .info strong {
            color: #00d4ff;
        }
        a {
            color: #00d4ff;
            text-decoration: none;
            display: inline-block;
            margin-top: 30px;
        }
        a:hover { text-decoration: underline; }
    "#;

/// Render the clock page from one timestamp sample.
///
/// The timestamps come in as parameters so tests can pin them.
#[rustfmt::skip]
pub fn render<Tz: TimeZone>(now: &DateTime<Tz>, utc: &DateTime<Utc>) -> ah::Result<String>
where
    Tz::Offset: Display,
{
    let clock = now.format("%H:%M:%S");
    let date = now.format("%A, %B %d, %Y");
    let local_full = now.format("%Y-%m-%d %H:%M:%S");
    let utc_full = utc.format("%Y-%m-%d %H:%M:%S");
    let timestamp = now.timestamp();
    let offset = now.offset();

    let mut doc = Document::new("Current Server Time", CSS);
    let d = doc.body();

    ln!(d, r#"    <div class="container">"#)?;
    ln!(d, r#"        <h1>&#x1F550; Current Server Time</h1>"#)?;
    ln!(d, r#"        <div class="time-display">{clock}</div>"#)?;
    ln!(d, r#"        <div class="date-display">{date}</div>"#)?;
    ln!(d)?;
    ln!(d, r#"        <div class="info">"#)?;
    ln!(d, r#"            <p><strong>Local Time:</strong> {local_full}</p>"#)?;
    ln!(d, r#"            <p><strong>UTC Time:</strong> {utc_full}</p>"#)?;
    ln!(d, r#"            <p><strong>Timestamp:</strong> {timestamp}</p>"#)?;
    ln!(d, r#"            <p><strong>Timezone:</strong> UTC{offset}</p>"#)?;
    ln!(d, r#"        </div>"#)?;
    ln!(d)?;
    ln!(d, r#"        <a href="/">&larr; Back to Test Suite</a>"#)?;
    ln!(d, r#"    </div>"#)?;

    Ok(doc.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fixed_time() {
        let now = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 4, 13, 2, 1)
            .unwrap();
        let utc = now.with_timezone(&Utc);
        let html = render(&now, &utc).unwrap();

        assert!(html.contains(r#"<div class="time-display">13:02:01</div>"#));
        assert!(html.contains(r#"<div class="date-display">Saturday, May 04, 2024</div>"#));
        assert!(html.contains("<strong>Local Time:</strong> 2024-05-04 13:02:01"));
        assert!(html.contains("<strong>UTC Time:</strong> 2024-05-04 12:02:01"));
        assert!(html.contains(&format!("<strong>Timestamp:</strong> {}", now.timestamp())));
        assert!(html.contains("<strong>Timezone:</strong> UTC+01:00"));
    }
}

// vim: ts=4 sw=4 expandtab
