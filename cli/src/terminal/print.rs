use colored::*;
use granulation_common::Star;
use granulation_common::config::Config;
use granulation_core::report::{StarReport, format_value};
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

type Detail = (String, ColoredString);

pub fn print(msg: &str) {
    println!("{msg}");
}

/// Section header, shown only in pretty mode so plain output stays parseable.
pub fn header(msg: &str, cfg: &Config) {
    if !cfg.pretty {
        return;
    }
    rule(msg);
}

pub fn rule(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str, plain_width: usize) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(plain_width) / 2);
    print(&format!("{}{}", space, msg));
}

pub fn star_report(idx: usize, report: &StarReport, cfg: &Config) {
    if !cfg.pretty {
        print!("{}", report.render(cfg.precision));
        return;
    }

    let scaled = report.scaled();
    tree_head(idx, &report.star.name);

    let mut details: Vec<Detail> = star_details(&report.star);
    details.push((
        "Blueshift".to_string(),
        with_error(scaled.blueshift, scaled.blueshift_error, cfg),
    ));
    details.push((
        "Sigma RV".to_string(),
        with_error(scaled.dispersion, scaled.dispersion_error, cfg),
    ));
    as_tree_one_level(details);
    print("");
}

fn with_error(value: f64, error: f64, cfg: &Config) -> ColoredString {
    let value: ColoredString = format_value(value, cfg.precision).color(colors::VALUE);
    let error: ColoredString = format_value(error, cfg.precision).color(colors::UNCERTAINTY);
    format!("{} {} {} {}", value, "±".color(colors::SEPARATOR), error, "m/s".color(colors::SEPARATOR)).normal()
}

pub fn star_details(star: &Star) -> Vec<Detail> {
    vec![
        ("Teff".to_string(), format!("{} K", star.teff).color(colors::STELLAR_PARAM)),
        ("log g".to_string(), star.log_g.to_string().color(colors::STELLAR_PARAM)),
        ("Mass".to_string(), format!("{} M☉", star.mass).color(colors::STELLAR_PARAM)),
        ("Radius".to_string(), format!("{} R☉", star.radius).color(colors::STELLAR_PARAM)),
    ]
}

pub fn summary(reported: usize, total: usize, cfg: &Config) {
    if !cfg.pretty {
        return;
    }

    let text: String = format!("Report complete: {reported} of {total} stars evaluated");
    let width: usize = UnicodeWidthStr::width(text.as_str());
    let output: ColoredString = if reported == total {
        text.bold().green()
    } else {
        text.bold().yellow()
    };

    fat_separator();
    centerln(&format!("{}", output), width);
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    let output: String = format!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
    print(&output);
}

pub fn as_tree_one_level(key_value_pair: Vec<Detail>) {
    let key_width: usize = key_value_pair
        .iter()
        .map(|(key, _)| UnicodeWidthStr::width(key.as_str()))
        .max()
        .unwrap_or(0);

    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let dots: usize = key_width + 1 - UnicodeWidthStr::width(key.as_str());
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(dots).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
        print(&output);
    }
}
