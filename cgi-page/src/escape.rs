// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Escape untrusted text for embedding in HTML element content.
///
/// Replaces `&`, `<` and `>`. Every request-sourced value must pass
/// through this (or [`escape_attr`]) before it reaches the page.
pub fn escape_text(text: &str) -> String {
    html_escape::encode_text(text).to_string()
}

/// Escape untrusted text for embedding in a double-quoted HTML attribute.
///
/// Replaces `&`, `<`, `>` and `"`.
pub fn escape_attr(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text(""), "");
        assert_eq!(escape_text("plain"), "plain");
        assert_eq!(escape_text("<script>"), "&lt;script&gt;");
        assert_eq!(escape_text("a & b"), "a &amp; b");
        // Already-escaped entities are escaped again, not passed through.
        assert_eq!(escape_text("&lt;"), "&amp;lt;");
        // Quotes stay literal in text context.
        assert_eq!(escape_text(r#"say "hi""#), r#"say "hi""#);
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_attr("<b>&"), "&lt;b&gt;&amp;");
    }
}

// vim: ts=4 sw=4 expandtab
