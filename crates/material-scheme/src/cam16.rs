//! CAM16 color appearance model.
//!
//! Hue and chroma of [`Hct`](crate::Hct) come from CAM16 evaluated under the
//! standard viewing conditions below. Tone is CIE L*, which CAM16's J does
//! not match exactly, so the HCT solver searches over J.

use std::f64::consts::PI;

use once_cell::sync::Lazy;
use palette::Srgb;

use crate::utils::{
    lerp, matrix_multiply, signum, srgb_from_xyz, xyz_from_srgb, y_from_lstar,
};

const WHITE_POINT_D65: [f64; 3] = [95.047, 100.0, 108.883];

const XYZ_TO_CAM16RGB: [[f64; 3]; 3] = [
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
];

const CAM16RGB_TO_XYZ: [[f64; 3]; 3] = [
    [1.8620678, -1.0112547, 0.14918678],
    [0.38752654, 0.62144744, -0.00897398],
    [-0.01584150, -0.03412294, 1.0499644],
];

static STANDARD: Lazy<ViewingConditions> = Lazy::new(|| {
    ViewingConditions::new(
        WHITE_POINT_D65,
        (200.0 / PI) * y_from_lstar(50.0) / 100.0,
        50.0,
        2.0,
        false,
    )
});

/// Environment in which a color is observed. Precomputes every quantity the
/// CAM16 transforms need that does not depend on the color itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewingConditions {
    pub n: f64,
    pub aw: f64,
    pub nbb: f64,
    pub ncb: f64,
    pub c: f64,
    pub nc: f64,
    pub rgb_d: [f64; 3],
    pub fl: f64,
    pub fl_root: f64,
    pub z: f64,
}

impl ViewingConditions {
    /// Builds viewing conditions.
    ///
    /// * `white_point` - XYZ of the adapted white, Y = 100.
    /// * `adapting_luminance` - luminance of the adapting field, in lux.
    /// * `background_lstar` - L* of the background.
    /// * `surround` - 0 (dark) to 2 (average).
    /// * `discounting_illuminant` - whether the eye fully adapts to the illuminant.
    pub fn new(
        white_point: [f64; 3],
        adapting_luminance: f64,
        background_lstar: f64,
        surround: f64,
        discounting_illuminant: bool,
    ) -> Self {
        let background_lstar = background_lstar.max(0.1);
        let rgb_w = matrix_multiply(white_point, &XYZ_TO_CAM16RGB);

        let f = 0.8 + surround / 10.0;
        let c = if f >= 0.9 {
            lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };
        let d = if discounting_illuminant {
            1.0
        } else {
            f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())
        }
        .clamp(0.0, 1.0);
        let nc = f;
        let rgb_d = rgb_w.map(|w| d * (100.0 / w) + 1.0 - d);

        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let k4f = 1.0 - k4;
        let fl = k4 * adapting_luminance + 0.1 * k4f * k4f * (5.0 * adapting_luminance).cbrt();
        let n = y_from_lstar(background_lstar) / white_point[1];
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;

        let rgb_a = [0, 1, 2].map(|i| {
            let factor = (fl * rgb_d[i] * rgb_w[i] / 100.0).powf(0.42);
            400.0 * factor / (factor + 27.13)
        });
        let aw = (2.0 * rgb_a[0] + rgb_a[1] + 0.05 * rgb_a[2]) * nbb;

        Self {
            n,
            aw,
            nbb,
            ncb,
            c,
            nc,
            rgb_d,
            fl,
            fl_root: fl.powf(0.25),
            z,
        }
    }

    /// sRGB-like viewing conditions used throughout Material color: D65, a
    /// mid-gray background and an average surround.
    pub fn standard() -> &'static ViewingConditions {
        &STANDARD
    }
}

/// A color described by the CAM16 appearance correlates, plus its CAM16-UCS
/// coordinates (`jstar`, `astar`, `bstar`) for distance measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cam16 {
    pub hue: f64,
    pub chroma: f64,
    pub j: f64,
    pub jstar: f64,
    pub astar: f64,
    pub bstar: f64,
}

impl Cam16 {
    pub fn from_srgb(color: Srgb<u8>) -> Self {
        Self::from_xyz_in(xyz_from_srgb(color), ViewingConditions::standard())
    }

    pub fn from_xyz_in(xyz: [f64; 3], vc: &ViewingConditions) -> Self {
        let rgb_c = matrix_multiply(xyz, &XYZ_TO_CAM16RGB);
        let rgb_d = [0, 1, 2].map(|i| vc.rgb_d[i] * rgb_c[i]);
        let [r_a, g_a, b_a] = rgb_d.map(|d| {
            let af = (vc.fl * d.abs() / 100.0).powf(0.42);
            signum(d) * 400.0 * af / (af + 27.13)
        });

        let a = (11.0 * r_a + -12.0 * g_a + b_a) / 11.0;
        let b = (r_a + g_a - 2.0 * b_a) / 9.0;
        let u = (20.0 * r_a + 20.0 * g_a + 21.0 * b_a) / 20.0;
        let p2 = (40.0 * r_a + 20.0 * g_a + b_a) / 20.0;

        let hue = {
            let degrees = b.atan2(a).to_degrees();
            if degrees < 0.0 {
                degrees + 360.0
            } else if degrees >= 360.0 {
                degrees - 360.0
            } else {
                degrees
            }
        };
        let hue_radians = hue.to_radians();

        let ac = p2 * vc.nbb;
        let j = 100.0 * (ac / vc.aw).powf(vc.c * vc.z);

        let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
        let e_hue = 0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8);
        let p1 = 50000.0 / 13.0 * e_hue * vc.nc * vc.ncb;
        let t = p1 * a.hypot(b) / (u + 0.305);
        let alpha = (1.64 - 0.29_f64.powf(vc.n)).powf(0.73) * t.powf(0.9);
        let chroma = alpha * (j / 100.0).sqrt();
        let m = chroma * vc.fl_root;

        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = (1.0 / 0.0228) * (1.0 + 0.0228 * m).ln();

        Self {
            hue,
            chroma,
            j,
            jstar,
            astar: mstar * hue_radians.cos(),
            bstar: mstar * hue_radians.sin(),
        }
    }

    /// Builds a color from lightness `j`, chroma and hue (degrees).
    pub fn from_jch(j: f64, chroma: f64, hue: f64) -> Self {
        Self::from_jch_in(j, chroma, hue, ViewingConditions::standard())
    }

    pub fn from_jch_in(j: f64, chroma: f64, hue: f64, vc: &ViewingConditions) -> Self {
        let m = chroma * vc.fl_root;

        let hue_radians = hue.to_radians();
        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = (1.0 / 0.0228) * (1.0 + 0.0228 * m).ln();

        Self {
            hue,
            chroma,
            j,
            jstar,
            astar: mstar * hue_radians.cos(),
            bstar: mstar * hue_radians.sin(),
        }
    }

    /// Color difference in CAM16-UCS.
    pub fn distance(&self, other: &Cam16) -> f64 {
        let d_j = self.jstar - other.jstar;
        let d_a = self.astar - other.astar;
        let d_b = self.bstar - other.bstar;
        let d_e_prime = (d_j * d_j + d_a * d_a + d_b * d_b).sqrt();
        1.41 * d_e_prime.powf(0.63)
    }

    /// The sRGB color this appearance corresponds to, clipped into gamut.
    pub fn to_srgb(&self) -> Srgb<u8> {
        srgb_from_xyz(self.xyz_in(ViewingConditions::standard()))
    }

    pub fn xyz_in(&self, vc: &ViewingConditions) -> [f64; 3] {
        let alpha = if self.chroma == 0.0 || self.j == 0.0 {
            0.0
        } else {
            self.chroma / (self.j / 100.0).sqrt()
        };

        let t = (alpha / (1.64 - 0.29_f64.powf(vc.n)).powf(0.73)).powf(1.0 / 0.9);
        let h_rad = self.hue.to_radians();

        let e_hue = 0.25 * ((h_rad + 2.0).cos() + 3.8);
        let ac = vc.aw * (self.j / 100.0).powf(1.0 / vc.c / vc.z);
        let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
        let p2 = ac / vc.nbb;

        let h_sin = h_rad.sin();
        let h_cos = h_rad.cos();

        let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;

        let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;

        let rgb_c = [r_a, g_a, b_a].map(|adapted| {
            let base = (27.13 * adapted.abs() / (400.0 - adapted.abs())).max(0.0);
            signum(adapted) * (100.0 / vc.fl) * base.powf(1.0 / 0.42)
        });
        let rgb_f = [0, 1, 2].map(|i| rgb_c[i] / vc.rgb_d[i]);

        matrix_multiply(rgb_f, &CAM16RGB_TO_XYZ)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_has_full_lightness_and_no_chroma() {
        let white = Cam16::from_srgb(Srgb::new(255, 255, 255));
        assert!((white.j - 100.0).abs() < 0.5, "j = {}", white.j);
        assert!(white.chroma < 3.0, "chroma = {}", white.chroma);
    }

    #[test]
    fn red_has_a_warm_hue() {
        let red = Cam16::from_srgb(Srgb::new(255, 0, 0));
        assert!((red.hue - 27.4).abs() < 1.5, "hue = {}", red.hue);
        assert!((red.chroma - 113.4).abs() < 2.0, "chroma = {}", red.chroma);
    }

    #[test]
    fn jch_round_trips_through_srgb() {
        let original = Srgb::new(0x67u8, 0x50, 0xa4);
        let cam = Cam16::from_srgb(original);
        let back = Cam16::from_jch(cam.j, cam.chroma, cam.hue).to_srgb();
        assert_eq!(back, original);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let cam = Cam16::from_srgb(Srgb::new(12, 200, 99));
        assert_eq!(cam.distance(&cam), 0.0);
        let other = Cam16::from_srgb(Srgb::new(12, 200, 110));
        assert!(cam.distance(&other) > 0.0);
    }

    #[test]
    fn jch_construction_matches_measured_ucs_coordinates() {
        let measured = Cam16::from_srgb(Srgb::new(0x7d, 0x52, 0x60));
        let built = Cam16::from_jch(measured.j, measured.chroma, measured.hue);
        assert!(measured.distance(&built) < 1e-6);
        assert!((measured.jstar - built.jstar).abs() < 1e-9);
    }
}
