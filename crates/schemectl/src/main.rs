use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use material_scheme::{Mode, ThemeState};
use schemectl::commands::css::{run as css, CssArgs};
use schemectl::commands::init::{run as init, InitArgs};
use schemectl::commands::json::{run as json, JsonArgs};
use schemectl::commands::scheme::{run as scheme, SchemeArgs};
use schemectl::commands::tones::{run as tones, TonesArgs};
use schemectl::config::ThemeConfig;

#[derive(Parser, Debug, Clone)]
#[command(about = "Schemectl, Material 3 color schemes from seed colors", long_about = None)]
#[command(version, about, long_about = None)]
struct Args {
    #[clap(long, global = true, default_value = "auto")]
    color: Color,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Color {
    Always,
    Auto,
    Never,
}

impl Color {
    fn init(self) {
        // Set a supports-color override based on the variable passed in.
        match self {
            Color::Always => owo_colors::set_override(true),
            Color::Auto => {}
            Color::Never => owo_colors::set_override(false),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Light,
    Dark,
    #[value(alias = "highContrast")]
    HighContrast,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Mode {
        match mode {
            ModeArg::Light => Mode::Light,
            ModeArg::Dark => Mode::Dark,
            ModeArg::HighContrast => Mode::HighContrast,
        }
    }
}

/// Seeds and mode, read from the theme file and overridden by flags.
#[derive(clap::Args, Debug, Clone)]
struct ThemeFlags {
    /// Theme file to read. Defaults to theme.yaml in the current directory, if present
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    primary: Option<String>,
    #[arg(long)]
    secondary: Option<String>,
    #[arg(long)]
    tertiary: Option<String>,
    #[arg(long)]
    neutral: Option<String>,
    #[arg(long)]
    neutral_variant: Option<String>,
    #[arg(long)]
    error: Option<String>,
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// Use the dark scheme in high contrast mode. Pass `false` to override the theme file
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    prefers_dark: Option<bool>,
}

impl ThemeFlags {
    /// The flags that were given, as a config to lay over the theme file.
    fn overrides(&self) -> ThemeConfig {
        ThemeConfig {
            primary: self.primary.clone(),
            secondary: self.secondary.clone(),
            tertiary: self.tertiary.clone(),
            neutral: self.neutral.clone(),
            neutral_variant: self.neutral_variant.clone(),
            error: self.error.clone(),
            mode: self.mode.map(Mode::from),
            prefers_dark: self.prefers_dark,
        }
    }

    fn into_state(self) -> schemectl::Result<ThemeState> {
        let file = ThemeConfig::discover(self.config.as_deref(), &std::env::current_dir()?)?;
        file.overlay(self.overrides()).into_state()
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Create a theme.yaml. Defaults to the current directory.
    Init {
        #[arg(default_value = ".")]
        working_dir: PathBuf,
        /// Primary seed to write into the file
        #[arg(long)]
        primary: Option<String>,
        /// Overwrite an existing theme.yaml
        #[arg(long)]
        force: bool,
    },
    /// Show every color role of the resolved scheme
    Scheme {
        #[command(flatten)]
        theme: ThemeFlags,
    },
    /// Show the tone ramps of the six palettes
    Tones {
        #[command(flatten)]
        theme: ThemeFlags,
    },
    /// Print the scheme as CSS custom properties
    Css {
        #[command(flatten)]
        theme: ThemeFlags,
        /// Selector the properties are declared on
        #[arg(long, default_value = ":root")]
        selector: String,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Print the scheme and tone ramps as JSON
    Json {
        #[command(flatten)]
        theme: ThemeFlags,
    },
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::new("warn"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let args = Args::parse();
    args.color.init();
    init_tracing();

    let mut stdout = std::io::stdout();

    let result = match args.command {
        Some(Commands::Init {
            working_dir,
            primary,
            force,
        }) => init(InitArgs {
            working_dir: &working_dir,
            primary: primary.as_deref(),
            force,
            stdout: &mut stdout,
        }),
        Some(Commands::Scheme { theme }) => theme.into_state().and_then(|state| {
            scheme(SchemeArgs {
                state: &state,
                stdout: &mut stdout,
            })
        }),
        Some(Commands::Tones { theme }) => theme.into_state().and_then(|state| {
            tones(TonesArgs {
                state: &state,
                stdout: &mut stdout,
            })
        }),
        Some(Commands::Css {
            theme,
            selector,
            out,
        }) => theme.into_state().and_then(|state| {
            css(CssArgs {
                state: &state,
                selector: &selector,
                out_file: out.as_deref(),
                stdout: &mut stdout,
            })
        }),
        Some(Commands::Json { theme }) => theme.into_state().and_then(|state| {
            json(JsonArgs {
                state: &state,
                stdout: &mut stdout,
            })
        }),
        None => {
            let _ = Args::command().print_help();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
