use std::{cell::Cell, fmt::Display};

use crate::terminal::{colors, format};
use colored::*;
use rackmap_common::config::PRINT_TARGET;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
}

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Columns left and right of `text` to center it in [`TOTAL_WIDTH`].
fn padding(text: &str) -> (usize, usize) {
    let fill: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(text));
    let left: usize = fill / 2;
    (left, fill - left)
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ RACKMAP v{} ⟧", env!("CARGO_PKG_VERSION"));
    let (left, _) = padding(&text_content);
    let text: ColoredString = text_content.color(colors::PRIMARY).bold();
    let sep: ColoredString = "═".repeat(left).color(colors::SEPARATOR);
    let output: String = format!("{}{}{}", sep, text, sep);

    print(&output);
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg).to_uppercase();
    let (left, right) = padding(&formatted);

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

/// Prints a rendered inventory block line by line, dimming the tree glyphs.
pub fn tree(block: &str) {
    for line in block.lines() {
        let (glyphs, label) = format::split_glyphs(line);
        print(&format!(
            "{}{}",
            glyphs.color(colors::BRANCH),
            label.color(colors::TEXT_DEFAULT)
        ));
    }
}

pub fn aligned_line<V>(key: &str, value: V)
where
    V: Display + WithDefaultColor,
{
    let whitespace: String = ".".repeat((GLOBAL_KEY_WIDTH.get() + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        whitespace.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::ACCENT), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

pub fn no_results() {
    let msg: String = format!("{}", "NO MATCHING HOST".red().bold());
    centerln(&msg);
}

pub fn end_of_program(q_level: u8) {
    if q_level > 0 {
        return;
    }
    fat_separator();
}
