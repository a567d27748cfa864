//! Colored terminal output for command results
//!
//! Data goes to stdout, diagnostics to stderr. `colored` honors NO_COLOR.

use std::fmt::Display;

use colored::Colorize;

/// `error: <msg>` on stderr.
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Section title, e.g. the shape being drawn.
pub fn heading(title: &(impl Display + ?Sized)) {
    println!("{}", title.to_string().cyan().bold());
}

/// Indented body line under a heading.
pub fn body(line: &(impl Display + ?Sized)) {
    println!("  {line}");
}

/// `name: value` with the name highlighted.
pub fn value(name: &str, value: &(impl Display + ?Sized)) {
    println!("{}: {}", name.green(), value);
}

/// Round-trip summary line.
pub fn summary(msg: &(impl Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// A line read back that matches what was written.
pub fn matched(line: &(impl Display + ?Sized)) {
    println!("  {} {}", "✓".green(), line);
}

/// A line read back that differs from what was written.
pub fn mismatch(expected: &(impl Display + ?Sized), actual: &(impl Display + ?Sized)) {
    println!(
        "  {} expected {}, read {}",
        "✗".red(),
        format!("'{expected}'").bold(),
        format!("'{actual}'").bold()
    );
}

/// Plain data, no decoration.
pub fn plain(msg: &(impl Display + ?Sized)) {
    println!("{msg}");
}
