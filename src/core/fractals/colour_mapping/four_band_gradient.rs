use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::fractal_params::FractalParams;

const SLOPE: f64 = 1020.0;

/// Narrows a gradient intensity to a channel byte: truncate toward zero, then
/// keep the low eight bits. Values outside `0..=255` wrap around.
///
/// NaN narrows to 0 (`f64 as i64` saturates and maps NaN to zero). It shows up
/// when `vmin == vmax`, as with a single-iteration cap: `s` is `0 / 0`, the
/// value at the bottom of the collapsed scale falls through to band four and
/// comes out red.
#[inline]
fn channel(intensity: f64) -> u8 {
    intensity as i64 as u8
}

/// Piecewise-linear gradient over `[vmin, vmax]`.
///
/// Starts from white and splits the range into four equal bands, each of
/// which overwrites exactly two channels:
///
/// | band          | red         | green       | blue        |
/// |---------------|-------------|-------------|-------------|
/// | `[0, 0.25)`   | 0           | `s`         | kept        |
/// | `[0.25, 0.5)` | 0           | kept        | `255 - s`   |
/// | `[0.5, 0.75)` | `s`         | kept        | 0           |
/// | `[0.75, 1]`   | kept        | `255 - s`   | 0           |
///
/// where `s = 1020 * (value - vmin) / (vmax - vmin)` and "kept" means the
/// channel still holds 255 from the white start. Values below `vmin` are
/// clamped to it; values above `vmax` are black.
#[must_use]
pub fn colour_of(value: f64, vmin: f64, vmax: f64) -> Colour {
    let mut colour = Colour::WHITE;
    let dv = vmax - vmin;

    let value = if value < vmin {
        vmin
    } else if value > vmax {
        return Colour::BLACK;
    } else {
        value
    };

    let s = SLOPE * (value - vmin) / dv;

    if value < vmin + 0.25 * dv {
        colour.r = 0;
        colour.g = channel(s);
    } else if value < vmin + 0.5 * dv {
        colour.r = 0;
        colour.b = channel(255.0 - s);
    } else if value < vmin + 0.75 * dv {
        colour.r = channel(s);
        colour.b = 0;
    } else {
        colour.g = channel(255.0 - s);
        colour.b = 0;
    }

    colour
}

/// [`colour_of`] over iteration counts, scaled to `[0, max_iterations - 1]`.
///
/// Orbits that never escape report `max_iterations`, which lies past the top
/// of the scale and therefore comes out black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourBandGradient {
    vmin: f64,
    vmax: f64,
}

impl ColourMap<u32> for FourBandGradient {
    fn map(&self, iterations: u32) -> Colour {
        colour_of(f64::from(iterations), self.vmin, self.vmax)
    }
}

impl FourBandGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            vmin: 0.0,
            vmax: f64::from(max_iterations) - 1.0,
        }
    }

    #[must_use]
    pub fn from_params(params: &FractalParams) -> Self {
        Self {
            vmin: 0.0,
            vmax: params.colour_scale_max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }

    #[test]
    fn above_range_is_black() {
        assert_eq!(colour_of(11.0, 0.0, 10.0), Colour::BLACK);
        assert_eq!(colour_of(10.5, 0.0, 10.0), Colour::BLACK);
    }

    #[test]
    fn bottom_of_range_is_blue() {
        // Band one clears red, sets green to zero, blue stays white.
        assert_eq!(colour_of(0.0, 0.0, 10.0), rgb(0, 0, 255));
    }

    #[test]
    fn below_range_is_clamped_not_black() {
        assert_eq!(colour_of(-5.0, 0.0, 10.0), colour_of(0.0, 0.0, 10.0));
    }

    #[test]
    fn literal_table_over_ten_steps() {
        let expected = [
            rgb(0, 0, 255),
            rgb(0, 102, 255),
            rgb(0, 204, 255),
            rgb(0, 255, 205),
            rgb(0, 255, 103),
            rgb(254, 255, 0),
            rgb(100, 255, 0),
            rgb(202, 255, 0),
            rgb(255, 207, 0),
            rgb(255, 105, 0),
            rgb(255, 3, 0),
            rgb(0, 0, 0),
        ];

        for (value, colour) in expected.iter().enumerate() {
            assert_eq!(
                colour_of(value as f64, 0.0, 10.0),
                *colour,
                "value {}",
                value
            );
        }
    }

    #[test]
    fn band_boundaries_are_half_open() {
        // vmin + 0.25 * dv = 2.5 belongs to band two.
        assert_eq!(colour_of(2.5, 0.0, 10.0).g, 255);
        assert_eq!(colour_of(2.4, 0.0, 10.0).b, 255);
        // 5.0 and 7.5 start bands three and four.
        assert_eq!(colour_of(5.0, 0.0, 10.0).b, 0);
        assert_eq!(colour_of(4.9, 0.0, 10.0).r, 0);
        assert_eq!(colour_of(7.5, 0.0, 10.0).r, 255);
        assert_eq!(colour_of(7.4, 0.0, 10.0).g, 255);
    }

    // The carried channel comes from the white start, not from the
    // neighbouring band.
    #[test]
    fn untouched_channel_is_carried_from_white() {
        // Band one keeps blue.
        assert_eq!(colour_of(1.0, 0.0, 10.0).b, 255);
        // Band two keeps green even though band one ended below 255.
        assert_eq!(colour_of(3.0, 0.0, 10.0).g, 255);
        // Band three keeps green.
        assert_eq!(colour_of(6.0, 0.0, 10.0).g, 255);
        // Band four keeps red.
        assert_eq!(colour_of(9.0, 0.0, 10.0).r, 255);
    }

    #[test]
    fn adjacent_values_within_a_band_differ() {
        for value in 0..10 {
            let here = colour_of(f64::from(value), 0.0, 10.0);
            let next = colour_of(f64::from(value + 1), 0.0, 10.0);

            assert_ne!(here, next, "values {} and {}", value, value + 1);
        }
    }

    #[test]
    fn offset_range_matches_shifted_values() {
        assert_eq!(colour_of(13.0, 10.0, 20.0), colour_of(3.0, 0.0, 10.0));
        assert_eq!(colour_of(21.0, 10.0, 20.0), Colour::BLACK);
    }

    #[test]
    fn gradient_scales_to_iteration_cap() {
        let gradient = FourBandGradient::new(11);

        assert_eq!(gradient.map(3), colour_of(3.0, 0.0, 10.0));
        assert_eq!(gradient.map(10), rgb(255, 3, 0));
    }

    #[test]
    fn gradient_from_params_matches_iteration_cap() {
        let params = FractalParams {
            max_iterations: 11,
            ..FractalParams::default()
        };

        assert_eq!(FourBandGradient::from_params(&params), FourBandGradient::new(11));
    }

    #[test]
    fn orbits_that_never_escape_are_black() {
        let gradient = FourBandGradient::new(15);

        assert_eq!(gradient.map(15), Colour::BLACK);
    }

    #[test]
    fn escaping_on_last_step_is_not_black() {
        let gradient = FourBandGradient::new(15);

        assert_ne!(gradient.map(14), Colour::BLACK);
        assert_eq!(gradient.map(14), rgb(255, 3, 0));
    }

    #[test]
    fn collapsed_range_gives_red_at_its_only_value() {
        assert_eq!(colour_of(0.0, 0.0, 0.0), rgb(255, 0, 0));
        assert_eq!(colour_of(-1.0, 0.0, 0.0), rgb(255, 0, 0));
        assert_eq!(colour_of(1.0, 0.0, 0.0), Colour::BLACK);
    }

    #[test]
    fn single_iteration_cap_colours_immediate_escape_red() {
        let gradient = FourBandGradient::new(1);

        assert_eq!(gradient.map(0), rgb(255, 0, 0));
        assert_eq!(gradient.map(1), Colour::BLACK);
    }

    #[test]
    fn zero_iteration_cap_maps_everything_to_black() {
        let gradient = FourBandGradient::new(0);

        assert_eq!(gradient.map(0), Colour::BLACK);
    }
}
