use crate::render::{heading, swatch};
use crate::Result;

use material_scheme::ThemeState;

pub struct TonesArgs<'a, W: std::io::Write> {
    pub state: &'a ThemeState,
    pub stdout: &'a mut W,
}

/// Prints the tone ramp of each of the six palettes.
pub fn run<W: std::io::Write>(args: TonesArgs<W>) -> Result<()> {
    let output = args.state.resolve();

    for (index, (name, ramp)) in output.palettes.iter().enumerate() {
        if index > 0 {
            writeln!(args.stdout)?;
        }
        writeln!(args.stdout, "{}", heading(name))?;

        for (tone, hex) in ramp {
            writeln!(args.stdout, "{} {:>3}  {}", swatch(hex), tone, hex)?;
        }
    }

    Ok(())
}
