//! Declaration text for the view factory
//!
//! The generated lines are meant to be pasted by hand: the `#define` block
//! into a shared header, the registration block into the app delegate.

use crate::entry::Entry;
use crate::schema::ParsedSchema;

/// Every n-th line carries its ordinal as a trailing comment
const ORDINAL_EVERY: usize = 5;

/// Width the `#define NAME` token is padded to
const DEFINE_WIDTH: usize = 30;

const HEADER_BANNER: &str = "// Include the following lines in a reusable header file";
const REGISTER_BANNER: &str =
    "// Include the following lines in application:didFinishLaunchingWithOptions:";
const FACTORY_LINE: &str = "MCViewFactory *factory = [MCViewFactory sharedFactory];";

fn ordinal_comment(index: usize) -> String {
    if index % ORDINAL_EVERY == 0 {
        format!(" // {index}")
    } else {
        String::new()
    }
}

/// One `#define` line per entry, e.g. `#define VIEW_LOGIN  @"WMLoginViewController" `
pub fn emit_definitions(entries: &[Entry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let define = format!("#define {}", entry.constant_name);
        out.push_str(&format!(
            "{define:<width$} @\"{}\" {}\n",
            entry.display_name,
            ordinal_comment(i + 1),
            width = DEFINE_WIDTH
        ));
    }
    out
}

/// One `[factory registerView:...]` line per entry
pub fn emit_registrations(entries: &[Entry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "[factory registerView:{}];{}\n",
            entry.constant_name,
            ordinal_comment(i + 1)
        ));
    }
    out
}

/// Full stdout report: definitions then registrations, sections before
/// views. Ordinals restart for each list.
pub fn render_report(parsed: &ParsedSchema) -> String {
    let mut out = String::new();

    out.push_str(HEADER_BANNER);
    out.push('\n');
    out.push_str(&emit_definitions(&parsed.sections));
    out.push_str(&emit_definitions(&parsed.views));
    out.push('\n');

    out.push_str(REGISTER_BANNER);
    out.push('\n');
    out.push_str(FACTORY_LINE);
    out.push('\n');
    out.push_str(&emit_registrations(&parsed.sections));
    out.push_str(&emit_registrations(&parsed.views));

    out
}

#[cfg(test)]
#[path = "emit/emit_tests.rs"]
mod emit_tests;
