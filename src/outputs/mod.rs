//! Presentation boundary: rendering reported items to the terminal.
//!
//! Two formats are available, chosen once at startup:
//!
//! - [`console`]: a human-readable block per item, the default
//! - [`json`]: one JSON object per line, for piping into other tools
//!
//! Both omit absent optional fields entirely: no placeholders, no nulls.

use crate::models::NewsItem;
use tracing::error;

pub mod console;
pub mod json;

/// Output format selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Console,
    JsonLines,
}

/// Render one reported item to stdout in the selected format.
pub fn emit(item: &NewsItem, format: Format) {
    match format {
        Format::Console => println!("{}", console::render(item)),
        Format::JsonLines => match json::render(item) {
            Ok(line) => println!("{line}"),
            Err(e) => error!(title = %item.title, error = %e, "failed to serialize item"),
        },
    }
}
