//! `themes` command: list supported themes.

use owo_colors::OwoColorize;

use crate::config::{ThemeKind, ThemePackage};

/// One line per supported theme, marking the active one.
pub fn theme_lines(active: ThemeKind) -> Vec<String> {
    ThemeKind::ALL
        .iter()
        .map(|&kind| {
            let package = match kind.package() {
                ThemePackage::Bundled => "bundled",
                ThemePackage::External => "external",
            };
            let marker = if kind == active { "*" } else { " " };
            format!("{marker} {:<18} {package}", kind.name())
        })
        .collect()
}

pub fn list_themes(active: ThemeKind) {
    for line in theme_lines(active) {
        if line.starts_with('*') {
            println!("{}", line.bold());
        } else {
            println!("{line}");
        }
    }
}
