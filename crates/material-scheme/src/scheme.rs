//! Resolution of a palette set into concrete color roles.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dynamic::{
    contrasting_tone, solve_pair, ContrastCurve, ContrastLevel, PairTones, ToneDeltaPair,
};
use crate::palettes::{ColorPaletteSet, PaletteKind};
use crate::{Hct, Result};

/// A named slot of a color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    InversePrimary,
    PrimaryFixed,
    PrimaryFixedDim,
    OnPrimaryFixed,
    OnPrimaryFixedVariant,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    SecondaryFixed,
    SecondaryFixedDim,
    OnSecondaryFixed,
    OnSecondaryFixedVariant,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    TertiaryFixed,
    TertiaryFixedDim,
    OnTertiaryFixed,
    OnTertiaryFixedVariant,
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,
    Background,
    OnBackground,
    Surface,
    OnSurface,
    SurfaceDim,
    SurfaceBright,
    SurfaceContainerLowest,
    SurfaceContainerLow,
    SurfaceContainer,
    SurfaceContainerHigh,
    SurfaceContainerHighest,
    SurfaceVariant,
    OnSurfaceVariant,
    InverseSurface,
    InverseOnSurface,
    Outline,
    OutlineVariant,
    Shadow,
    Scrim,
    SurfaceTint,
}

impl Role {
    pub const ALL: [Role; 49] = [
        Role::Primary,
        Role::OnPrimary,
        Role::PrimaryContainer,
        Role::OnPrimaryContainer,
        Role::InversePrimary,
        Role::PrimaryFixed,
        Role::PrimaryFixedDim,
        Role::OnPrimaryFixed,
        Role::OnPrimaryFixedVariant,
        Role::Secondary,
        Role::OnSecondary,
        Role::SecondaryContainer,
        Role::OnSecondaryContainer,
        Role::SecondaryFixed,
        Role::SecondaryFixedDim,
        Role::OnSecondaryFixed,
        Role::OnSecondaryFixedVariant,
        Role::Tertiary,
        Role::OnTertiary,
        Role::TertiaryContainer,
        Role::OnTertiaryContainer,
        Role::TertiaryFixed,
        Role::TertiaryFixedDim,
        Role::OnTertiaryFixed,
        Role::OnTertiaryFixedVariant,
        Role::Error,
        Role::OnError,
        Role::ErrorContainer,
        Role::OnErrorContainer,
        Role::Background,
        Role::OnBackground,
        Role::Surface,
        Role::OnSurface,
        Role::SurfaceDim,
        Role::SurfaceBright,
        Role::SurfaceContainerLowest,
        Role::SurfaceContainerLow,
        Role::SurfaceContainer,
        Role::SurfaceContainerHigh,
        Role::SurfaceContainerHighest,
        Role::SurfaceVariant,
        Role::OnSurfaceVariant,
        Role::InverseSurface,
        Role::InverseOnSurface,
        Role::Outline,
        Role::OutlineVariant,
        Role::Shadow,
        Role::Scrim,
        Role::SurfaceTint,
    ];

    /// camelCase name, e.g. `onPrimaryContainer`.
    pub fn name(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::OnPrimary => "onPrimary",
            Role::PrimaryContainer => "primaryContainer",
            Role::OnPrimaryContainer => "onPrimaryContainer",
            Role::InversePrimary => "inversePrimary",
            Role::PrimaryFixed => "primaryFixed",
            Role::PrimaryFixedDim => "primaryFixedDim",
            Role::OnPrimaryFixed => "onPrimaryFixed",
            Role::OnPrimaryFixedVariant => "onPrimaryFixedVariant",
            Role::Secondary => "secondary",
            Role::OnSecondary => "onSecondary",
            Role::SecondaryContainer => "secondaryContainer",
            Role::OnSecondaryContainer => "onSecondaryContainer",
            Role::SecondaryFixed => "secondaryFixed",
            Role::SecondaryFixedDim => "secondaryFixedDim",
            Role::OnSecondaryFixed => "onSecondaryFixed",
            Role::OnSecondaryFixedVariant => "onSecondaryFixedVariant",
            Role::Tertiary => "tertiary",
            Role::OnTertiary => "onTertiary",
            Role::TertiaryContainer => "tertiaryContainer",
            Role::OnTertiaryContainer => "onTertiaryContainer",
            Role::TertiaryFixed => "tertiaryFixed",
            Role::TertiaryFixedDim => "tertiaryFixedDim",
            Role::OnTertiaryFixed => "onTertiaryFixed",
            Role::OnTertiaryFixedVariant => "onTertiaryFixedVariant",
            Role::Error => "error",
            Role::OnError => "onError",
            Role::ErrorContainer => "errorContainer",
            Role::OnErrorContainer => "onErrorContainer",
            Role::Background => "background",
            Role::OnBackground => "onBackground",
            Role::Surface => "surface",
            Role::OnSurface => "onSurface",
            Role::SurfaceDim => "surfaceDim",
            Role::SurfaceBright => "surfaceBright",
            Role::SurfaceContainerLowest => "surfaceContainerLowest",
            Role::SurfaceContainerLow => "surfaceContainerLow",
            Role::SurfaceContainer => "surfaceContainer",
            Role::SurfaceContainerHigh => "surfaceContainerHigh",
            Role::SurfaceContainerHighest => "surfaceContainerHighest",
            Role::SurfaceVariant => "surfaceVariant",
            Role::OnSurfaceVariant => "onSurfaceVariant",
            Role::InverseSurface => "inverseSurface",
            Role::InverseOnSurface => "inverseOnSurface",
            Role::Outline => "outline",
            Role::OutlineVariant => "outlineVariant",
            Role::Shadow => "shadow",
            Role::Scrim => "scrim",
            Role::SurfaceTint => "surfaceTint",
        }
    }

    /// kebab-case name, e.g. `on-primary-container`.
    pub fn css_name(self) -> String {
        let mut out = String::with_capacity(self.name().len() + 4);
        for c in self.name().chars() {
            if c.is_ascii_uppercase() {
                out.push('-');
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c);
            }
        }
        out
    }

    pub fn palette(self) -> PaletteKind {
        self.def().palette
    }

    /// Whether the role's tone changes with the contrast level.
    pub fn is_contrast_sensitive(self) -> bool {
        self.def().rule.is_some()
    }

    fn def(self) -> RoleDef {
        use PaletteKind as P;

        match self {
            Role::Primary => accent(P::Primary, Role::PrimaryContainer, Role::Primary),
            Role::OnPrimary => on_accent(P::Primary, Role::Primary),
            Role::PrimaryContainer => container(P::Primary, Role::PrimaryContainer, Role::Primary),
            Role::OnPrimaryContainer => on_container(P::Primary, Role::PrimaryContainer),
            Role::InversePrimary => fixed(P::Primary, 80.0, 40.0),
            Role::PrimaryFixed => fixed(P::Primary, 90.0, 90.0),
            Role::PrimaryFixedDim => fixed(P::Primary, 80.0, 80.0),
            Role::OnPrimaryFixed => fixed(P::Primary, 10.0, 10.0),
            Role::OnPrimaryFixedVariant => fixed(P::Primary, 30.0, 30.0),

            Role::Secondary => accent(P::Secondary, Role::SecondaryContainer, Role::Secondary),
            Role::OnSecondary => on_accent(P::Secondary, Role::Secondary),
            Role::SecondaryContainer => {
                container(P::Secondary, Role::SecondaryContainer, Role::Secondary)
            }
            Role::OnSecondaryContainer => on_container(P::Secondary, Role::SecondaryContainer),
            Role::SecondaryFixed => fixed(P::Secondary, 90.0, 90.0),
            Role::SecondaryFixedDim => fixed(P::Secondary, 80.0, 80.0),
            Role::OnSecondaryFixed => fixed(P::Secondary, 10.0, 10.0),
            Role::OnSecondaryFixedVariant => fixed(P::Secondary, 30.0, 30.0),

            Role::Tertiary => accent(P::Tertiary, Role::TertiaryContainer, Role::Tertiary),
            Role::OnTertiary => on_accent(P::Tertiary, Role::Tertiary),
            Role::TertiaryContainer => {
                container(P::Tertiary, Role::TertiaryContainer, Role::Tertiary)
            }
            Role::OnTertiaryContainer => on_container(P::Tertiary, Role::TertiaryContainer),
            Role::TertiaryFixed => fixed(P::Tertiary, 90.0, 90.0),
            Role::TertiaryFixedDim => fixed(P::Tertiary, 80.0, 80.0),
            Role::OnTertiaryFixed => fixed(P::Tertiary, 10.0, 10.0),
            Role::OnTertiaryFixedVariant => fixed(P::Tertiary, 30.0, 30.0),

            Role::Error => accent(P::Error, Role::ErrorContainer, Role::Error),
            Role::OnError => on_accent(P::Error, Role::Error),
            Role::ErrorContainer => container(P::Error, Role::ErrorContainer, Role::Error),
            Role::OnErrorContainer => on_container(P::Error, Role::ErrorContainer),

            Role::Background => fixed(P::Neutral, 98.0, 6.0),
            Role::OnBackground => fixed(P::Neutral, 10.0, 90.0),
            Role::Surface => fixed(P::Neutral, 98.0, 6.0),
            Role::OnSurface => fixed(P::Neutral, 10.0, 90.0),
            Role::SurfaceDim => fixed(P::Neutral, 87.0, 6.0),
            Role::SurfaceBright => fixed(P::Neutral, 98.0, 24.0),
            Role::SurfaceContainerLowest => fixed(P::Neutral, 100.0, 4.0),
            Role::SurfaceContainerLow => fixed(P::Neutral, 96.0, 10.0),
            Role::SurfaceContainer => fixed(P::Neutral, 94.0, 12.0),
            Role::SurfaceContainerHigh => fixed(P::Neutral, 92.0, 17.0),
            Role::SurfaceContainerHighest => fixed(P::Neutral, 90.0, 22.0),
            Role::SurfaceVariant => fixed(P::NeutralVariant, 90.0, 30.0),
            Role::OnSurfaceVariant => fixed(P::NeutralVariant, 30.0, 80.0),
            Role::InverseSurface => fixed(P::Neutral, 20.0, 90.0),
            Role::InverseOnSurface => fixed(P::Neutral, 95.0, 20.0),
            Role::Outline => fixed(P::NeutralVariant, 50.0, 60.0),
            Role::OutlineVariant => fixed(P::NeutralVariant, 80.0, 30.0),
            Role::Shadow => fixed(P::Neutral, 0.0, 0.0),
            Role::Scrim => fixed(P::Neutral, 0.0, 0.0),
            Role::SurfaceTint => fixed(P::Primary, 40.0, 80.0),
        }
    }
}

/// Where a role reads its tone from.
#[derive(Debug, Clone, Copy)]
struct RoleDef {
    palette: PaletteKind,
    light: f64,
    dark: f64,
    is_background: bool,
    rule: Option<ContrastRule>,
}

impl RoleDef {
    fn table_tone(&self, is_dark: bool) -> f64 {
        if is_dark {
            self.dark
        } else {
            self.light
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ContrastRule {
    background: Background,
    curve: ContrastCurve,
    pair: Option<ToneDeltaPair<Role>>,
}

#[derive(Debug, Clone, Copy)]
enum Background {
    /// `surfaceDim` in light schemes, `surfaceBright` in dark ones.
    HighestSurface,
    Role(Role),
}

impl Background {
    fn role(self, is_dark: bool) -> Role {
        match self {
            Background::HighestSurface if is_dark => Role::SurfaceBright,
            Background::HighestSurface => Role::SurfaceDim,
            Background::Role(role) => role,
        }
    }
}

const ACCENT_CURVE: ContrastCurve = ContrastCurve::new(3.0, 4.5, 7.0, 7.0);
const CONTAINER_CURVE: ContrastCurve = ContrastCurve::new(1.0, 1.0, 3.0, 4.5);
const TEXT_CURVE: ContrastCurve = ContrastCurve::new(4.5, 7.0, 11.0, 21.0);

fn fixed(palette: PaletteKind, light: f64, dark: f64) -> RoleDef {
    RoleDef {
        palette,
        light,
        dark,
        is_background: false,
        rule: None,
    }
}

fn accent_pair(container: Role, accent: Role) -> Option<ToneDeltaPair<Role>> {
    Some(ToneDeltaPair {
        nearer: container,
        farther: accent,
        delta: 10.0,
        stay_together: false,
    })
}

fn accent(palette: PaletteKind, container: Role, role: Role) -> RoleDef {
    RoleDef {
        palette,
        light: 40.0,
        dark: 80.0,
        is_background: true,
        rule: Some(ContrastRule {
            background: Background::HighestSurface,
            curve: ACCENT_CURVE,
            pair: accent_pair(container, role),
        }),
    }
}

fn on_accent(palette: PaletteKind, accent: Role) -> RoleDef {
    RoleDef {
        palette,
        light: 100.0,
        dark: 20.0,
        is_background: false,
        rule: Some(ContrastRule {
            background: Background::Role(accent),
            curve: TEXT_CURVE,
            pair: None,
        }),
    }
}

fn container(palette: PaletteKind, role: Role, accent: Role) -> RoleDef {
    RoleDef {
        palette,
        light: 90.0,
        dark: 30.0,
        is_background: true,
        rule: Some(ContrastRule {
            background: Background::HighestSurface,
            curve: CONTAINER_CURVE,
            pair: accent_pair(role, accent),
        }),
    }
}

fn on_container(palette: PaletteKind, container: Role) -> RoleDef {
    RoleDef {
        palette,
        light: 10.0,
        dark: 90.0,
        is_background: false,
        rule: Some(ContrastRule {
            background: Background::Role(container),
            curve: TEXT_CURVE,
            pair: None,
        }),
    }
}

/// Tone lookup for one (palette set, darkness, contrast) combination.
struct Resolver<'a> {
    palettes: &'a ColorPaletteSet,
    is_dark: bool,
    contrast: ContrastLevel,
}

impl Resolver<'_> {
    fn tone(&self, role: Role) -> f64 {
        let def = role.def();
        let table = def.table_tone(self.is_dark);

        let rule = match (def.rule, self.contrast) {
            (Some(rule), ContrastLevel::High) => rule,
            _ => return table,
        };

        let level = self.contrast.value();
        let bg_tone = self.tone(rule.background.role(self.is_dark));

        if let Some(pair) = rule.pair {
            let nearer = pair.nearer.def();
            let farther = pair.farther.def();
            let (n_tone, f_tone) = solve_pair(
                PairTones {
                    background: bg_tone,
                    nearer_initial: nearer.table_tone(self.is_dark),
                    nearer_ratio: curve_of(&nearer).get(level),
                    farther_initial: farther.table_tone(self.is_dark),
                    farther_ratio: curve_of(&farther).get(level),
                },
                pair.delta,
                pair.stay_together,
                self.is_dark,
            );
            return if role == pair.nearer { n_tone } else { f_tone };
        }

        contrasting_tone(table, bg_tone, rule.curve.get(level), def.is_background)
    }

    fn color(&self, role: Role) -> Hct {
        self.palettes.get(role.palette()).at(self.tone(role))
    }
}

fn curve_of(def: &RoleDef) -> ContrastCurve {
    def.rule.map(|rule| rule.curve).unwrap_or(TEXT_CURVE)
}

/// Every role resolved to a concrete color.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedScheme {
    is_dark: bool,
    contrast: ContrastLevel,
    palettes: ColorPaletteSet,
    colors: IndexMap<Role, Hct>,
}

impl ResolvedScheme {
    pub fn get(&self, role: Role) -> Hct {
        self.colors[&role]
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn contrast(&self) -> ContrastLevel {
        self.contrast
    }

    pub fn palettes(&self) -> &ColorPaletteSet {
        &self.palettes
    }

    /// Roles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Hct)> + '_ {
        self.colors.iter().map(|(role, hct)| (*role, *hct))
    }

    /// Role name to `#rrggbb`, in declaration order.
    pub fn to_hex_map(&self) -> IndexMap<&'static str, String> {
        self.iter()
            .map(|(role, hct)| (role.name(), hct.to_hex()))
            .collect()
    }
}

/// Resolves every role of `palettes`.
///
/// `contrast_level` must be 0 (standard) or 1 (high); any other value is a
/// domain error.
pub fn resolve_scheme(
    palettes: &ColorPaletteSet,
    is_dark: bool,
    contrast_level: f64,
) -> Result<ResolvedScheme> {
    let contrast = ContrastLevel::try_from(contrast_level)?;
    Ok(resolve_scheme_with(palettes, is_dark, contrast))
}

pub fn resolve_scheme_with(
    palettes: &ColorPaletteSet,
    is_dark: bool,
    contrast: ContrastLevel,
) -> ResolvedScheme {
    let resolver = Resolver {
        palettes,
        is_dark,
        contrast,
    };

    let colors = Role::ALL
        .into_iter()
        .map(|role| (role, resolver.color(role)))
        .collect();

    tracing::trace!(is_dark, ?contrast, "resolved scheme");

    ResolvedScheme {
        is_dark,
        contrast,
        palettes: *palettes,
        colors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::ratio_of_tones;
    use crate::palettes::{resolve_palette_set, PaletteSeeds};
    use crate::Error;
    use pretty_assertions::assert_eq;

    fn baseline_set() -> ColorPaletteSet {
        resolve_palette_set(&PaletteSeeds::from_primary(
            Hct::from_hex("#6750A4").unwrap(),
        ))
    }

    #[test]
    fn every_role_is_present_in_every_combination() {
        let set = baseline_set();
        for is_dark in [false, true] {
            for contrast in [0.0, 1.0] {
                let scheme = resolve_scheme(&set, is_dark, contrast).unwrap();
                let roles: Vec<Role> = scheme.iter().map(|(role, _)| role).collect();
                assert_eq!(roles, Role::ALL.to_vec());
            }
        }
    }

    #[test]
    fn light_standard_uses_the_tone_table() {
        let set = baseline_set();
        let scheme = resolve_scheme(&set, false, 0.0).unwrap();

        let expect = |role: Role, palette: PaletteKind, tone: f64| {
            assert_eq!(
                scheme.get(role).to_hex(),
                set.get(palette).tone(tone).unwrap().to_hex(),
                "{}",
                role.name()
            );
        };

        expect(Role::Primary, PaletteKind::Primary, 40.0);
        expect(Role::OnPrimary, PaletteKind::Primary, 100.0);
        expect(Role::PrimaryContainer, PaletteKind::Primary, 90.0);
        expect(Role::OnPrimaryContainer, PaletteKind::Primary, 10.0);
        expect(Role::PrimaryFixed, PaletteKind::Primary, 90.0);
        expect(Role::PrimaryFixedDim, PaletteKind::Primary, 80.0);
        expect(Role::Secondary, PaletteKind::Secondary, 40.0);
        expect(Role::TertiaryContainer, PaletteKind::Tertiary, 90.0);
        expect(Role::Error, PaletteKind::Error, 40.0);
        expect(Role::Surface, PaletteKind::Neutral, 98.0);
        expect(Role::OnSurface, PaletteKind::Neutral, 10.0);
        expect(Role::SurfaceContainerHigh, PaletteKind::Neutral, 92.0);
        expect(Role::Outline, PaletteKind::NeutralVariant, 50.0);
        expect(Role::OnSurfaceVariant, PaletteKind::NeutralVariant, 30.0);
    }

    #[test]
    fn dark_standard_is_the_complement() {
        let set = baseline_set();
        let light = resolve_scheme(&set, false, 0.0).unwrap();
        let dark = resolve_scheme(&set, true, 0.0).unwrap();

        for role in [Role::Primary, Role::Surface, Role::OnSurface] {
            assert_ne!(light.get(role), dark.get(role), "{}", role.name());
        }

        assert_eq!(dark.get(Role::Primary), set.primary.tone(80.0).unwrap());
        assert_eq!(dark.get(Role::OnPrimary), set.primary.tone(20.0).unwrap());
        assert_eq!(dark.get(Role::Surface), set.neutral.tone(6.0).unwrap());
        assert_eq!(dark.get(Role::OnSurface), set.neutral.tone(90.0).unwrap());
        assert_eq!(light.get(Role::InversePrimary), dark.get(Role::Primary));
    }

    #[test]
    fn contrast_insensitive_roles_ignore_contrast() {
        let set = baseline_set();
        for is_dark in [false, true] {
            let standard = resolve_scheme(&set, is_dark, 0.0).unwrap();
            let high = resolve_scheme(&set, is_dark, 1.0).unwrap();
            for role in Role::ALL.into_iter().filter(|r| !r.is_contrast_sensitive()) {
                assert_eq!(standard.get(role), high.get(role), "{}", role.name());
            }
        }
    }

    #[test]
    fn high_contrast_meets_its_ratios() {
        let set = baseline_set();
        for is_dark in [false, true] {
            let scheme = resolve_scheme(&set, is_dark, 1.0).unwrap();
            let tone = |role: Role| scheme.get(role).tone();
            let surface = if is_dark {
                Role::SurfaceBright
            } else {
                Role::SurfaceDim
            };

            for (fg, bg) in [
                (Role::OnPrimary, Role::Primary),
                (Role::OnPrimaryContainer, Role::PrimaryContainer),
                (Role::OnSecondary, Role::Secondary),
                (Role::OnTertiaryContainer, Role::TertiaryContainer),
                (Role::OnError, Role::Error),
                (Role::OnErrorContainer, Role::ErrorContainer),
            ] {
                let ratio = ratio_of_tones(tone(fg), tone(bg));
                assert!(ratio >= 4.5, "{} on {}: {ratio}", fg.name(), bg.name());
            }

            let primary = ratio_of_tones(tone(Role::Primary), tone(surface));
            assert!(primary >= 6.5, "primary on surface: {primary}");

            let gap = (tone(Role::Primary) - tone(Role::PrimaryContainer)).abs();
            assert!(gap >= 9.0, "primary/container gap {gap}");
        }
    }

    #[test]
    fn high_contrast_differs_from_standard() {
        let set = baseline_set();
        let standard = resolve_scheme(&set, false, 0.0).unwrap();
        let high = resolve_scheme(&set, false, 1.0).unwrap();
        assert_ne!(standard.get(Role::Primary), high.get(Role::Primary));
        assert!(high.get(Role::Primary).tone() < standard.get(Role::Primary).tone());
    }

    #[test]
    fn rejects_unknown_contrast_levels() {
        let set = baseline_set();
        assert!(matches!(
            resolve_scheme(&set, false, 0.5),
            Err(Error::Domain { .. })
        ));
    }

    #[test]
    fn hex_map_uses_camel_case_names() {
        let scheme = resolve_scheme(&baseline_set(), false, 0.0).unwrap();
        let map = scheme.to_hex_map();
        assert_eq!(map.len(), Role::ALL.len());
        assert_eq!(map.get_index(0).map(|(k, _)| *k), Some("primary"));
        assert!(map.contains_key("onPrimaryContainer"));
        assert!(map.contains_key("surfaceContainerHigh"));
        assert!(map["shadow"] == "#000000");
    }

    #[test]
    fn css_names_are_kebab_case() {
        assert_eq!(Role::OnPrimaryContainer.css_name(), "on-primary-container");
        assert_eq!(Role::SurfaceContainerHighest.css_name(), "surface-container-highest");
        assert_eq!(Role::Primary.css_name(), "primary");
    }

    #[test]
    fn role_names_match_serde() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.name()));
        }
    }
}
