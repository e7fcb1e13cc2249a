use crate::config::Rgb;
use crate::scene::{Scene, Shape};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

fn to_color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb[0], rgb[1], rgb[2])
}

/// Draws `scene` onto `root`, whose coordinates are window pixels.
///
/// A label that fails to draw (typically a missing font) does not stop the
/// rest of the frame; the first such error is returned once everything else
/// has been drawn.
pub fn render<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    scene: &Scene,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&to_color(scene.background))?;

    let font = FontDesc::new(
        FontFamily::from(scene.font.family.as_str()),
        scene.font.size,
        FontStyle::Bold,
    );
    let mut label_error = None;

    for shape in &scene.shapes {
        match shape {
            Shape::Ring {
                center,
                radius,
                color,
            } => root.draw(&Circle::new(
                *center,
                *radius,
                to_color(*color).stroke_width(1),
            ))?,
            Shape::Line {
                from,
                to,
                color,
                width,
            } => root.draw(&PathElement::new(
                vec![*from, *to],
                to_color(*color).stroke_width(*width),
            ))?,
            Shape::Dot {
                center,
                radius,
                color,
            } => root.draw(&Circle::new(*center, *radius, to_color(*color).filled()))?,
            Shape::Label { text, at, color } => {
                let style = font.color(&to_color(*color));
                if let Err(e) = root.draw(&Text::new(text.as_str(), *at, style)) {
                    if label_error.is_none() {
                        label_error = Some(e);
                    }
                }
            }
        }
    }

    match label_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
