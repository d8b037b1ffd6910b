use crate::core::data::colour::Colour;

/// Turns an algorithm output into a displayable colour.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Colour;

    fn display_name(&self) -> &str;
}
