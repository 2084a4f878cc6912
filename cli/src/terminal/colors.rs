use colored::Color;

pub const PRIMARY: Color = Color::BrightWhite;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const VALUE: Color = Color::BrightGreen;
pub const UNCERTAINTY: Color = Color::Yellow;
pub const STELLAR_PARAM: Color = Color::Cyan;
