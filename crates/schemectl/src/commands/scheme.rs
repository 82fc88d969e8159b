use crate::render::{heading, swatch};
use crate::Result;

use material_scheme::ThemeState;

pub struct SchemeArgs<'a, W: std::io::Write> {
    pub state: &'a ThemeState,
    pub stdout: &'a mut W,
}

/// Prints every role of the resolved scheme with a swatch and its hex value.
pub fn run<W: std::io::Write>(args: SchemeArgs<W>) -> Result<()> {
    let output = args.state.resolve();

    let title = format!(
        "Scheme for {} ({}{})",
        args.state.seeds().primary,
        if output.is_dark { "dark" } else { "light" },
        if output.high_contrast {
            ", high contrast"
        } else {
            ""
        },
    );
    writeln!(args.stdout, "{}", heading(&title))?;
    writeln!(args.stdout)?;

    for (role, hex) in &output.roles {
        writeln!(args.stdout, "{} {:<26}{}", swatch(hex), role, hex)?;
    }

    Ok(())
}
