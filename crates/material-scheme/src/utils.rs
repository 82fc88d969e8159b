use palette::{convert::FromColorUnclamped, white_point::D65, Lab, LinSrgb, Srgb, Xyz};

/// Wraps an angle into `[0, 360)`.
pub fn sanitize_degrees(degrees: f64) -> f64 {
    let degrees = degrees % 360.0;
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

pub fn sanitize_degrees_int(degrees: i32) -> usize {
    degrees.rem_euclid(360) as usize
}

pub fn lerp(start: f64, stop: f64, amount: f64) -> f64 {
    (1.0 - amount) * start + amount * stop
}

/// Signum that maps zero to zero, unlike `f64::signum`.
pub fn signum(num: f64) -> f64 {
    if num < 0.0 {
        -1.0
    } else if num == 0.0 {
        0.0
    } else {
        1.0
    }
}

pub fn matrix_multiply(row: [f64; 3], matrix: &[[f64; 3]; 3]) -> [f64; 3] {
    [
        row[0] * matrix[0][0] + row[1] * matrix[0][1] + row[2] * matrix[0][2],
        row[0] * matrix[1][0] + row[1] * matrix[1][1] + row[2] * matrix[1][2],
        row[0] * matrix[2][0] + row[1] * matrix[2][1] + row[2] * matrix[2][2],
    ]
}

/// Relative luminance (0..=100) for a given L*.
pub fn y_from_lstar(lstar: f64) -> f64 {
    100.0 * lab_invf((lstar + 16.0) / 116.0)
}

/// L* for a given relative luminance (0..=100).
pub fn lstar_from_y(y: f64) -> f64 {
    lab_f(y / 100.0) * 116.0 - 16.0
}

fn lab_f(t: f64) -> f64 {
    let e = 216.0 / 24389.0;
    let kappa = 24389.0 / 27.0;
    if t > e {
        t.cbrt()
    } else {
        (kappa * t + 16.0) / 116.0
    }
}

fn lab_invf(ft: f64) -> f64 {
    let e = 216.0 / 24389.0;
    let kappa = 24389.0 / 27.0;
    let ft3 = ft * ft * ft;
    if ft3 > e {
        ft3
    } else {
        (116.0 * ft - 16.0) / kappa
    }
}

/// CIE XYZ of an sRGB color, scaled so that white has Y = 100.
pub fn xyz_from_srgb(color: Srgb<u8>) -> [f64; 3] {
    let linear: LinSrgb<f64> = color.into_format::<f64>().into_linear();
    let xyz = Xyz::<D65, f64>::from_color_unclamped(linear);
    [xyz.x * 100.0, xyz.y * 100.0, xyz.z * 100.0]
}

/// Clips a (possibly out of gamut) XYZ color into 8-bit sRGB.
pub fn srgb_from_xyz(xyz: [f64; 3]) -> Srgb<u8> {
    let xyz = Xyz::<D65, f64>::new(xyz[0] / 100.0, xyz[1] / 100.0, xyz[2] / 100.0);
    srgb_from_linear(LinSrgb::from_color_unclamped(xyz))
}

/// The gray whose L* is `lstar`.
pub fn srgb_from_lstar(lstar: f64) -> Srgb<u8> {
    let y = y_from_lstar(lstar) / 100.0;
    srgb_from_linear(LinSrgb::new(y, y, y))
}

pub fn lab_from_srgb(color: Srgb<u8>) -> Lab<D65, f64> {
    let linear: LinSrgb<f64> = color.into_format::<f64>().into_linear();
    Lab::from_color_unclamped(linear)
}

pub fn lstar_from_srgb(color: Srgb<u8>) -> f64 {
    lab_from_srgb(color).l
}

fn srgb_from_linear(linear: LinSrgb<f64>) -> Srgb<u8> {
    let encoded: Srgb<f64> = Srgb::from_linear(linear);
    Srgb::new(
        quantize(encoded.red),
        quantize(encoded.green),
        quantize(encoded.blue),
    )
}

fn quantize(component: f64) -> u8 {
    if component.is_nan() {
        return 0;
    }
    (component * 255.0).round().clamp(0.0, 255.0) as u8
}

pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}
