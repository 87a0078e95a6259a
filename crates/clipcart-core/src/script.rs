//! Generation of the page script injected into the Mariano's coupon page.
//!
//! The script runs inside the embedded page's own document context, so
//! the search term must be escaped against breaking out of its string
//! literal before it is embedded. Failure to do so would let a typed
//! grocery item execute as script in that page.

use std::fmt::Write;

/// Builds the deferred search snippet for the Mariano's coupon page.
///
/// After `delay_ms`, the snippet looks up the coupon search input by its
/// placeholder text, fills in `term`, dispatches a bubbling `input` event
/// so the page's delegated listeners observe the change, and clicks the
/// input's next sibling to submit. If the input or the sibling is missing
/// the snippet does nothing; there is no retry and no signal back to the
/// host.
pub(crate) fn coupon_search_snippet(term: &str, delay_ms: u64) -> String {
    let escaped = js_string_literal(term);
    format!(
        r#"setTimeout(() => {{
  const input = document.querySelector('input[placeholder="Search Coupons"]');
  if (input) {{
    input.value = "{escaped}";
    input.dispatchEvent(new Event('input', {{ bubbles: true }}));
    const button = input.nextElementSibling;
    if (button) {{
      button.click();
    }}
  }}
}}, {delay_ms});"#
    )
}

/// Escapes `raw` for embedding inside a double-quoted JavaScript string
/// literal.
///
/// Covers the quote characters, backslash, `<` (so `</script>` cannot
/// terminate an inline script block), ASCII control characters, and the
/// line separators U+2028/U+2029, which are line terminators in
/// JavaScript source even though they are valid in JSON strings.
#[must_use]
pub fn js_string_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '`' => out.push_str("\\u0060"),
            '<' => out.push_str("\\u003C"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 => {
                // Remaining C0 controls have no short escape.
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
