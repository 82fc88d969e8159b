use crate::config::THEME_FILE_NAME;
use crate::{Error, Result};
use owo_colors::{OwoColorize as _, Stream};

use indoc::formatdoc;
use material_scheme::theme::DEFAULT_PRIMARY;

use std::path::Path;

pub struct InitArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    pub primary: Option<&'a str>,
    pub force: bool,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: InitArgs<W>) -> Result<()> {
    let theme_yaml_path = args.working_dir.join(THEME_FILE_NAME);

    if theme_yaml_path.exists() && !args.force {
        return Err(Error::General(format!(
            "{} already exists. Pass --force to overwrite it",
            theme_yaml_path.display()
        )));
    }

    let primary = match args.primary {
        Some(hex) => material_scheme::SeedColor::parse(hex)?.to_hex(),
        None => DEFAULT_PRIMARY.to_string(),
    };

    write!(args.stdout, "Creating {}...", THEME_FILE_NAME)?;
    let contents = formatdoc!(
        r#"
        ---
        # Seed colors. Anything left empty is derived from the primary seed.
        primary: "{}"
        secondary: ~
        tertiary: ~
        neutral: ~
        neutral_variant: ~
        error: ~

        # light, dark or highContrast
        mode: light
        # Picks the dark high contrast scheme when mode is highContrast
        prefers_dark: false
        "#,
        primary,
    );

    std::fs::write(theme_yaml_path, contents)?;
    writeln!(
        args.stdout,
        "{}",
        "✓".if_supports_color(Stream::Stdout, |s| s.green())
    )?;

    writeln!(
        args.stdout,
        "Done! Run `schemectl scheme` to preview your color scheme",
    )?;

    Ok(())
}
