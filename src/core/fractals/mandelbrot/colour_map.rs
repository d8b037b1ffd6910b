use crate::core::colour::hsv_to_rgb;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::Escape;
use crate::core::ports::colour_map::ColourMap;

/// Degrees on the colour wheel; escape counts wrap around it.
const HUE_CYCLE: u32 = 360;

/// Fully saturated, full-value hue per escape iteration; bounded points are
/// black.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotHueCycle;

impl ColourMap<Escape> for MandelbrotHueCycle {
    fn map(&self, escape: Escape) -> Colour {
        match escape {
            Escape::Escaped(iteration) => {
                hsv_to_rgb(f64::from(iteration % HUE_CYCLE), 1.0, 1.0)
            }
            Escape::Bounded => Colour::BLACK,
        }
    }

    fn display_name(&self) -> &str {
        "Hue cycle"
    }
}
