use crate::core::data::colour::{Colour, Hsl};

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Converts an HSL colour to 8-bit RGB.
///
/// Each channel is scaled by 255 and truncated. Inputs outside `[0, 1]` are
/// not rejected; the final `as u8` cast saturates whatever falls out of range.
#[must_use]
pub fn hsl_to_rgb(colour: Hsl) -> Colour {
    let Hsl {
        hue,
        saturation,
        lightness,
    } = colour;

    let (red, green, blue) = if saturation == 0.0 {
        let grey = lightness * 255.0;
        (grey, grey, grey)
    } else {
        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        (
            255.0 * hue_to_channel(p, q, hue + ONE_THIRD),
            255.0 * hue_to_channel(p, q, hue),
            255.0 * hue_to_channel(p, q, hue - ONE_THIRD),
        )
    };

    Colour {
        r: red as u8,
        g: green as u8,
        b: blue as u8,
    }
}

/// Piecewise-linear hue ramp for one channel. `t` is wrapped into `[0, 1)`.
#[must_use]
pub fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);

    if t < ONE_SIXTH {
        return p + (q - p) * 6.0 * t;
    }
    if t < 0.5 {
        return q;
    }
    if t < TWO_THIRDS {
        return p + (q - p) * (TWO_THIRDS - t) * 6.0;
    }

    p
}
