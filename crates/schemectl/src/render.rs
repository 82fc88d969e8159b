use material_scheme::hct::parse_hex;
use owo_colors::{OwoColorize as _, Stream};

/// A two-cell block painted in `hex`, or blank when stdout takes no color.
pub(crate) fn swatch(hex: &str) -> String {
    match parse_hex(hex) {
        Ok(rgb) => "  "
            .if_supports_color(Stream::Stdout, |s| {
                s.on_truecolor(rgb.red, rgb.green, rgb.blue)
            })
            .to_string(),
        Err(_) => "  ".to_string(),
    }
}

pub(crate) fn heading(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |s| s.bold()).to_string()
}
