use crate::Result;

use material_scheme::ThemeState;

pub struct JsonArgs<'a, W: std::io::Write> {
    pub state: &'a ThemeState,
    pub stdout: &'a mut W,
}

/// Writes the resolved roles and tone ramps as pretty JSON.
pub fn run<W: std::io::Write>(args: JsonArgs<W>) -> Result<()> {
    let output = args.state.resolve();
    serde_json::to_writer_pretty(&mut *args.stdout, &output)?;
    writeln!(args.stdout)?;
    Ok(())
}
