//! Correction for colors that tend to read as unappealing.
//!
//! Dark yellow-greens (think bile or mold) are consistently rated the least
//! liked colors. Generated accents that land there are lifted to a lighter
//! tone of the same hue and chroma.

use crate::Hct;

pub fn is_disliked(hct: &Hct) -> bool {
    let hue_passes = hct.hue().round() >= 90.0 && hct.hue().round() <= 111.0;
    let chroma_passes = hct.chroma().round() > 16.0;
    let tone_passes = hct.tone().round() < 65.0;

    hue_passes && chroma_passes && tone_passes
}

pub fn fix_if_disliked(hct: Hct) -> Hct {
    if is_disliked(&hct) {
        Hct::from_hct(hct.hue(), hct.chroma(), 70.0)
    } else {
        hct
    }
}
