//! Color temperature, used to pick analogous and complementary colors that
//! look related to a seed rather than merely rotated around the hue wheel.

use crate::utils::{lab_from_srgb, sanitize_degrees, sanitize_degrees_int};
use crate::Hct;

/// Every hue at the input's chroma and tone, ranked by temperature.
///
/// Building one solves 361 colors, so keep it around when asking several
/// questions about the same input.
#[derive(Debug, Clone)]
pub struct TemperatureCache {
    input: Hct,
    hcts_by_hue: Vec<Hct>,
    coldest: Hct,
    warmest: Hct,
    coldest_temp: f64,
    warmest_temp: f64,
}

impl TemperatureCache {
    pub fn new(input: Hct) -> Self {
        let hcts_by_hue: Vec<Hct> = (0..=360)
            .map(|hue| Hct::from_hct(hue as f64, input.chroma(), input.tone()))
            .collect();

        let mut by_temp: Vec<(f64, Hct)> = hcts_by_hue
            .iter()
            .chain(std::iter::once(&input))
            .map(|hct| (raw_temperature(hct), *hct))
            .collect();
        by_temp.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (coldest_temp, coldest) = by_temp[0];
        let (warmest_temp, warmest) = by_temp[by_temp.len() - 1];

        Self {
            input,
            hcts_by_hue,
            coldest,
            warmest,
            coldest_temp,
            warmest_temp,
        }
    }

    pub fn input(&self) -> Hct {
        self.input
    }

    pub fn coldest(&self) -> Hct {
        self.coldest
    }

    pub fn warmest(&self) -> Hct {
        self.warmest
    }

    /// Temperature of `hct` relative to the coldest (0.0) and warmest (1.0)
    /// colors at the input's chroma and tone.
    pub fn relative_temperature(&self, hct: &Hct) -> f64 {
        let range = self.warmest_temp - self.coldest_temp;
        if range == 0.0 {
            return 0.5;
        }
        (raw_temperature(hct) - self.coldest_temp) / range
    }

    /// The color whose relative temperature mirrors the input's, searched
    /// along the arc that runs from the input's side of the coldest/warmest
    /// axis to the other side.
    pub fn complement(&self) -> Hct {
        let coldest_hue = self.coldest.hue();
        let warmest_hue = self.warmest.hue();
        let range = self.warmest_temp - self.coldest_temp;

        let input_is_cold_to_warm = is_between(self.input.hue(), coldest_hue, warmest_hue);
        let (start_hue, end_hue) = if input_is_cold_to_warm {
            (warmest_hue, coldest_hue)
        } else {
            (coldest_hue, warmest_hue)
        };

        let mut smallest_error = f64::MAX;
        let mut answer = self.hcts_by_hue[self.input.hue().round() as usize];
        let target = 1.0 - self.relative_temperature(&self.input);

        for addend in 0..=360 {
            let hue = sanitize_degrees(start_hue + addend as f64);
            if !is_between(hue, start_hue, end_hue) {
                continue;
            }

            let candidate = self.hcts_by_hue[hue.round() as usize];
            let relative = if range == 0.0 {
                0.5
            } else {
                (raw_temperature(&candidate) - self.coldest_temp) / range
            };
            let error = (target - relative).abs();
            if error < smallest_error {
                smallest_error = error;
                answer = candidate;
            }
        }

        answer
    }

    /// `count` colors around the input, with the wheel divided into
    /// `divisions` steps of equal temperature change. The input sits in the
    /// middle of the result.
    pub fn analogous(&self, count: usize, divisions: usize) -> Vec<Hct> {
        let start_hue = self.input.hue().round() as i32;
        let start = self.hcts_by_hue[sanitize_degrees_int(start_hue)];
        let mut last_temp = self.relative_temperature(&start);
        let mut all_colors = vec![start];

        let mut absolute_total_temp_delta = 0.0;
        for i in 0..360 {
            let hct = &self.hcts_by_hue[sanitize_degrees_int(start_hue + i)];
            let temp = self.relative_temperature(hct);
            absolute_total_temp_delta += (temp - last_temp).abs();
            last_temp = temp;
        }

        let temp_step = absolute_total_temp_delta / divisions as f64;
        let mut total_temp_delta = 0.0;
        let mut hue_addend = 1;
        last_temp = self.relative_temperature(&start);

        while all_colors.len() < divisions {
            let hct = self.hcts_by_hue[sanitize_degrees_int(start_hue + hue_addend)];
            let temp = self.relative_temperature(&hct);
            total_temp_delta += (temp - last_temp).abs();

            let mut desired = all_colors.len() as f64 * temp_step;
            let mut index_satisfied = total_temp_delta >= desired;
            let mut index_addend = 1;
            while index_satisfied && all_colors.len() < divisions {
                all_colors.push(hct);
                desired = (all_colors.len() + index_addend) as f64 * temp_step;
                index_satisfied = total_temp_delta >= desired;
                index_addend += 1;
            }

            last_temp = temp;
            hue_addend += 1;
            if hue_addend > 360 {
                while all_colors.len() < divisions {
                    all_colors.push(hct);
                }
                break;
            }
        }

        let len = all_colors.len() as isize;
        let wrap = |index: isize| all_colors[index.rem_euclid(len) as usize];

        let increase_hue_count = (count.saturating_sub(1) / 2) as isize;
        let decrease_hue_count = count as isize - increase_hue_count - 1;

        let mut answers = Vec::with_capacity(count);
        for i in (1..=increase_hue_count).rev() {
            answers.push(wrap(-i));
        }
        answers.push(self.input);
        for i in 1..=decrease_hue_count {
            answers.push(wrap(i));
        }

        answers
    }
}

/// Ottosson-style warmth estimate from Lab: warm colors (around 50 degrees
/// in Lab hue) score high, cool ones low, and chroma amplifies either.
pub fn raw_temperature(hct: &Hct) -> f64 {
    let lab = lab_from_srgb(hct.rgb());
    let hue = sanitize_degrees(lab.b.atan2(lab.a).to_degrees());
    let chroma = lab.a.hypot(lab.b);
    -0.5 + 0.02 * chroma.powf(1.07) * sanitize_degrees(hue - 50.0).to_radians().cos()
}

fn is_between(angle: f64, a: f64, b: f64) -> bool {
    if a < b {
        a <= angle && angle <= b
    } else {
        a <= angle || angle <= b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warm_colors_are_warmer_than_cool_ones() {
        let orange = Hct::from_hex("#ff8800").unwrap();
        let blue = Hct::from_hex("#0044ff").unwrap();
        assert!(raw_temperature(&orange) > raw_temperature(&blue));
    }

    #[test]
    fn extremes_bound_relative_temperature() {
        let cache = TemperatureCache::new(Hct::from_hex("#6750A4").unwrap());
        assert_eq!(cache.relative_temperature(&cache.coldest()), 0.0);
        assert_eq!(cache.relative_temperature(&cache.warmest()), 1.0);

        let input = cache.relative_temperature(&cache.input());
        assert!((0.0..=1.0).contains(&input));
    }

    #[test]
    fn analogous_centers_on_the_input() {
        let seed = Hct::from_hex("#6750A4").unwrap();
        let cache = TemperatureCache::new(seed);

        let three = cache.analogous(3, 6);
        assert_eq!(three.len(), 3);
        assert_eq!(three[1], seed);
        assert_ne!(three[0].hue().round(), three[2].hue().round());

        let five = cache.analogous(5, 12);
        assert_eq!(five.len(), 5);
        assert_eq!(five[2], seed);
    }

    #[test]
    fn analogous_neighbors_keep_chroma_and_tone() {
        let seed = Hct::from_hex("#006a6a").unwrap();
        let cache = TemperatureCache::new(seed);

        for hct in cache.analogous(3, 6) {
            assert!((hct.tone() - seed.tone()).abs() < 1.0, "{hct}");
        }
    }

    #[test]
    fn complement_sits_on_the_other_side() {
        let seed = Hct::from_hex("#6750A4").unwrap();
        let cache = TemperatureCache::new(seed);
        let complement = cache.complement();

        let seed_temp = cache.relative_temperature(&seed);
        let complement_temp = cache.relative_temperature(&complement);
        assert!(((seed_temp + complement_temp) - 1.0).abs() < 0.1);
    }

    #[test]
    fn black_input_has_no_temperature_range() {
        let black = Hct::from_hct(0.0, 0.0, 0.0);
        let cache = TemperatureCache::new(black);
        assert_eq!(cache.relative_temperature(&black), 0.5);
    }
}
