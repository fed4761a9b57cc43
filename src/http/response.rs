//! Text responses for the logging endpoint.
//!
//! # Layout
//! ```text
//! error: <message>          (failures only)
//!
//! usage: ...                (failures only)
//! levels: trace debug ...   (failures only)
//! active loggers:
//!   <name>: <level>
//!
//! ```

use std::fmt::Write;

use crate::error::ChangeError;
use crate::levels::all_level_names;

const USAGE: &[&str] = &[
    "usage: /logging?<name>=<level> (change single level)",
    "usage: /logging?paths=name1:level1,name2:level2,... (change multiple levels)",
    "usage: /logging?level=<level> (change all levels)",
];

/// Error line, usage summary and the valid level names.
pub fn render_error(out: &mut String, error: &ChangeError) {
    let _ = write!(out, "error: {}\n\n", error);
    for line in USAGE {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("levels: ");
    for name in all_level_names() {
        out.push_str(name);
        out.push(' ');
    }
    out.push('\n');
}

/// `active loggers:` followed by one indented line per logger.
pub fn render_loggers(out: &mut String, loggers: &[(String, String)]) {
    out.push_str("active loggers:\n");
    for (name, level) in loggers {
        let _ = writeln!(out, "  {}: {}", name, level);
    }
    out.push('\n');
}
