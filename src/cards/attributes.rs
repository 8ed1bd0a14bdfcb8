//! The two matching dimensions of a card: color and shape.
//!
//! Only the four concrete values of each exist here. A card that lacks a
//! dimension (a Single card) or has not settled it yet (an unresolved
//! Elements card) reports `None` through `Card::color` / `Card::shape`.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
    Green,
    Purple,
}

impl Color {
    /// All colors in deck-building order.
    pub const ALL: [Color; 4] = [Color::Blue, Color::Red, Color::Green, Color::Purple];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Blue => "Blue",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Purple => "Purple",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Square,
    Triangle,
    Hexagon,
}

impl Shape {
    /// All shapes in deck-building order.
    pub const ALL: [Shape; 4] = [Shape::Circle, Shape::Square, Shape::Triangle, Shape::Hexagon];
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Circle => "Circle",
            Shape::Square => "Square",
            Shape::Triangle => "Triangle",
            Shape::Hexagon => "Hexagon",
        };
        f.write_str(name)
    }
}

/// Which of the two dimensions a comparison agreed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Color,
    Shape,
}

/// Compare two (color, shape) pairs and report the single dimension they
/// share, if exactly one matches.
///
/// Absent values never match anything, not even another absent value.
///
/// ```
/// use elements_engine::cards::{unique_match, Color, Dimension, Shape};
///
/// let blue_circle = (Some(Color::Blue), Some(Shape::Circle));
/// let blue_square = (Some(Color::Blue), Some(Shape::Square));
/// assert_eq!(unique_match(blue_square, blue_circle), Some(Dimension::Color));
/// assert_eq!(unique_match(blue_circle, blue_circle), None);
/// ```
#[must_use]
pub fn unique_match(
    (color, shape): (Option<Color>, Option<Shape>),
    (other_color, other_shape): (Option<Color>, Option<Shape>),
) -> Option<Dimension> {
    let color_match = color.is_some() && color == other_color;
    let shape_match = shape.is_some() && shape == other_shape;

    match (color_match, shape_match) {
        (true, false) => Some(Dimension::Color),
        (false, true) => Some(Dimension::Shape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_values_distinct() {
        let mut colors = Color::ALL.to_vec();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), 4);

        let mut shapes = Shape::ALL.to_vec();
        shapes.sort();
        shapes.dedup();
        assert_eq!(shapes.len(), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::Purple.to_string(), "Purple");
        assert_eq!(Shape::Triangle.to_string(), "Triangle");
    }

    #[test]
    fn test_unique_match_absent_never_matches() {
        let color_only = (Some(Color::Red), None);
        let shape_only = (None, Some(Shape::Square));

        assert_eq!(unique_match(color_only, color_only), Some(Dimension::Color));
        assert_eq!(unique_match(shape_only, shape_only), Some(Dimension::Shape));
        assert_eq!(unique_match(color_only, shape_only), None);
        assert_eq!(unique_match((None, None), (None, None)), None);
    }

    #[test]
    fn test_unique_match_single_dimension() {
        let red_circle = (Some(Color::Red), Some(Shape::Circle));
        let blue_circle = (Some(Color::Blue), Some(Shape::Circle));
        let red_square = (Some(Color::Red), Some(Shape::Square));
        let blue_square = (Some(Color::Blue), Some(Shape::Square));

        assert_eq!(unique_match(red_circle, blue_circle), Some(Dimension::Shape));
        assert_eq!(unique_match(red_circle, red_square), Some(Dimension::Color));
        assert_eq!(unique_match(red_circle, blue_square), None);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Color::Green).unwrap(), r#""green""#);
        assert_eq!(serde_json::to_string(&Shape::Hexagon).unwrap(), r#""hexagon""#);
    }
}
