use crate::Result;
use owo_colors::{OwoColorize as _, Stream};

use material_scheme::{PaletteKind, ThemeOutput, ThemeState};

use std::path::Path;

pub struct CssArgs<'a, W: std::io::Write> {
    pub state: &'a ThemeState,
    pub selector: &'a str,
    /// Write the stylesheet here instead of to stdout.
    pub out_file: Option<&'a Path>,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: CssArgs<W>) -> Result<()> {
    let output = args.state.resolve();
    let css = stylesheet(&output, args.selector);

    match args.out_file {
        Some(path) => {
            write!(args.stdout, "Writing {}...", path.display())?;
            std::fs::write(path, css)?;
            writeln!(
                args.stdout,
                "{}",
                "✓".if_supports_color(Stream::Stdout, |s| s.green())
            )?;
        }
        None => write!(args.stdout, "{}", css)?,
    }

    Ok(())
}

/// Palette tones exposed next to the roles, as `--mat-sys-<palette><tone>`.
const EXTRA_SYSTEM_TONES: [(PaletteKind, u8); 2] =
    [(PaletteKind::Neutral, 10), (PaletteKind::NeutralVariant, 20)];

/// Custom properties for every role (`--mat-sys-<role>`) and every listed
/// palette tone (`--mat-<palette>-<tone>`).
pub fn stylesheet(output: &ThemeOutput, selector: &str) -> String {
    let mut lines = vec![
        format!("{} {{", selector),
        format!(
            "  color-scheme: {};",
            if output.is_dark { "dark" } else { "light" }
        ),
    ];

    for (role, hct) in output.scheme.iter() {
        lines.push(format!("  --mat-sys-{}: {};", role.css_name(), hct.to_hex()));
    }

    for (kind, tone) in EXTRA_SYSTEM_TONES {
        if let Some(hex) = output.palettes.get(kind.name()).and_then(|ramp| ramp.get(&tone)) {
            lines.push(format!("  --mat-sys-{}{}: {};", kind.css_name(), tone, hex));
        }
    }

    for kind in PaletteKind::ALL {
        if let Some(ramp) = output.palettes.get(kind.name()) {
            for (tone, hex) in ramp {
                lines.push(format!("  --mat-{}-{}: {};", kind.css_name(), tone, hex));
            }
        }
    }

    lines.push("}".to_string());

    let mut css = lines.join("\n");
    css.push('\n');
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use material_scheme::{Mode, SeedColors};
    use std::fs::read_to_string;
    use temp_dir::TempDir;

    fn light_output() -> ThemeOutput {
        ThemeState::default().resolve()
    }

    #[test]
    fn declares_every_role_and_tone() {
        let output = light_output();
        let css = stylesheet(&output, ":root");

        assert!(css.starts_with(":root {\n  color-scheme: light;\n"));
        assert!(css.ends_with("}\n"));

        let roles = css.lines().filter(|l| l.contains("--mat-sys-")).count();
        assert_eq!(roles, output.roles.len() + 2);

        let tones = css
            .lines()
            .filter(|l| l.starts_with("  --mat-") && !l.contains("--mat-sys-"))
            .count();
        assert_eq!(tones, 6 * 16 + 10);
    }

    #[test]
    fn uses_kebab_case_names() {
        let output = light_output();
        let css = stylesheet(&output, ":root");

        let expected = format!(
            "  --mat-sys-on-primary-container: {};",
            output.roles["onPrimaryContainer"]
        );
        assert!(css.contains(&expected), "{css}");
        assert!(css.contains("  --mat-neutral-variant-50: "));
        assert!(css.contains("  --mat-neutral-24: "));
        assert!(!css.contains("--mat-primary-24:"));
    }

    #[test]
    fn declares_the_neutral_text_tones() {
        let output = light_output();
        let css = stylesheet(&output, ":root");

        let neutral10 = format!("  --mat-sys-neutral10: {};", output.palettes["neutral"][&10]);
        let variant20 = format!(
            "  --mat-sys-neutral-variant20: {};",
            output.palettes["neutralVariant"][&20]
        );
        assert!(css.contains(&neutral10), "{css}");
        assert!(css.contains(&variant20), "{css}");

        let neutral = output.scheme.palettes().neutral.tone(10.0).unwrap();
        assert!(css.contains(&format!("--mat-sys-neutral10: {};", neutral.to_hex())));
    }

    #[test]
    fn dark_schemes_declare_a_dark_color_scheme() {
        let state = ThemeState::new(SeedColors::default(), Mode::Dark, false);
        let css = stylesheet(&state.resolve(), "[data-theme=dark]");
        assert!(css.starts_with("[data-theme=dark] {\n  color-scheme: dark;\n"));
    }

    #[test]
    fn prints_to_stdout_without_an_out_file() {
        let mut fake_stdout = std::io::Cursor::new(Vec::new());
        run(CssArgs {
            state: &ThemeState::default(),
            selector: ":root",
            out_file: None,
            stdout: &mut fake_stdout,
        })
        .unwrap();

        let printed = String::from_utf8(fake_stdout.into_inner()).unwrap();
        assert_eq!(printed, stylesheet(&light_output(), ":root"));
    }

    #[test]
    fn writes_the_out_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("theme.css");
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        run(CssArgs {
            state: &ThemeState::default(),
            selector: ":root",
            out_file: Some(&path),
            stdout: &mut fake_stdout,
        })
        .unwrap();

        let contents = read_to_string(&path).unwrap();
        assert_eq!(contents, stylesheet(&light_output(), ":root"));

        let printed = String::from_utf8(fake_stdout.into_inner()).unwrap();
        assert!(printed.contains("Writing"));
        assert!(printed.contains("theme.css"));
    }
}
