//! Failure message templates
//!
//! Default and custom messages may reference values known only at
//! evaluation time (`{index}`, `{count}`, `{keys}`, `{property}`, ...).
//! [`render`] substitutes them. Placeholders without a matching argument are
//! left in the output as written, and `{{` / `}}` produce literal braces.
//! Custom messages are rendered too, so a literal brace in one must be doubled.
//!
//! ```
//! use cohort::message::render;
//!
//! let text = render("duplicate at {index} by {keys}", &[("index", &3), ("keys", &"id")]);
//! assert_eq!(text, "duplicate at 3 by id");
//! ```

use std::fmt::{Display, Write};

/// Substitute `{name}` placeholders in `template` with the matching argument.
pub fn render(template: &str, args: &[(&str, &dyn Display)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find(['{', '}']) {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        match tail.find('}') {
            Some(close) => {
                let name = &tail[1..close];
                match args.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => {
                        // Writing into a String cannot fail.
                        let _ = write!(out, "{}", value);
                    }
                    None => out.push_str(&tail[..=close]),
                }
                rest = &tail[close + 1..];
            }
            None => {
                out.push_str(tail);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
