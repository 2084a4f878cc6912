use colored::*;
use granulation_common::catalog::{EXTENDED_STAR_DATA, STAR_DATA};

use crate::terminal::{colors, print};

pub fn catalog() {
    print::rule("star catalogue");

    for (idx, star) in EXTENDED_STAR_DATA.iter().enumerate() {
        let in_default = STAR_DATA.iter().any(|s| s.name == star.name);
        print::tree_head(idx, &star.name);

        let mut details = print::star_details(star);
        let table = if in_default { "default, all" } else { "all" };
        details.push(("Tables".to_string(), table.color(colors::ACCENT)));
        print::as_tree_one_level(details);
    }
}
