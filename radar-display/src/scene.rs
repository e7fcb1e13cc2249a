use crate::config::{Config, Rgb};
use crate::geometry::{to_pixel, Geometry, Point};
use radar_data::{ScanState, MAX_ANGLE_DEGREE, MIN_ANGLE_DEGREE};

const GRID_STROKE: u32 = 1;
const BEAM_STROKE: u32 = 3;
const OBJECT_RADIUS: i32 = 4;
const HIGHLIGHT_RADIUS: i32 = 6;
const RING_LABEL_OFFSET: Point = (5, -10);
const SPOKE_LABEL_OFFSET: Point = (-10, -10);
const OVERLAY_POSITION: Point = (30, 30);

/// One draw call, in window pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Unfilled circle.
    Ring { center: Point, radius: i32, color: Rgb },
    Line { from: Point, to: Point, color: Rgb, width: u32 },
    /// Filled circle.
    Dot { center: Point, radius: i32, color: Rgb },
    /// Text anchored at its top-left corner.
    Label { text: String, at: Point, color: Rgb },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f64,
}

/// Everything drawn in one frame, back to front.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub background: Rgb,
    pub font: Font,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn build(state: &ScanState, geometry: &Geometry, config: &Config) -> Scene {
        let mut scene = Scene {
            background: config.palette.background,
            font: Font {
                family: config.display.font_family.clone(),
                size: config.display.font_size,
            },
            shapes: Vec::new(),
        };
        scene.push_grid(state, geometry, config);
        scene.push_beam(state, geometry, config);
        scene.push_objects(state, geometry, config);
        scene.push_overlay(state, config);
        scene
    }

    fn push_grid(&mut self, state: &ScanState, geometry: &Geometry, config: &Config) {
        let color = config.palette.grid;
        let n_rings = config.radar.ring_count;
        let ring_step = geometry.radius / n_rings as f64;
        let distance_step = state.max_distance_cm() / n_rings as f64;
        for i in 1..=n_rings {
            let radius = ring_step * i as f64;
            self.shapes.push(Shape::Ring {
                center: geometry.center,
                radius: radius as i32,
                color,
            });
            self.shapes.push(Shape::Label {
                text: format!("{}cm", (distance_step * i as f64) as i64),
                at: to_pixel((
                    geometry.center.0 as f64 + radius + RING_LABEL_OFFSET.0 as f64,
                    (geometry.center.1 + RING_LABEL_OFFSET.1) as f64,
                )),
                color,
            });
        }

        let step = config.radar.spoke_step_deg as usize;
        for angle in (MIN_ANGLE_DEGREE..=MAX_ANGLE_DEGREE).step_by(step) {
            let end = geometry.polar_to_screen(angle as f64, geometry.radius);
            self.shapes.push(Shape::Line {
                from: geometry.center,
                to: to_pixel(end),
                color,
                width: GRID_STROKE,
            });
            let (x, y) = geometry.polar_to_screen(angle as f64, geometry.label_radius);
            self.shapes.push(Shape::Label {
                text: format!("{}°", angle),
                at: to_pixel((
                    x + SPOKE_LABEL_OFFSET.0 as f64,
                    y + SPOKE_LABEL_OFFSET.1 as f64,
                )),
                color,
            });
        }
    }

    fn push_beam(&mut self, state: &ScanState, geometry: &Geometry, config: &Config) {
        let end = geometry.polar_to_screen(state.current_angle() as f64, geometry.radius);
        self.shapes.push(Shape::Line {
            from: geometry.center,
            to: to_pixel(end),
            color: config.palette.beam,
            width: BEAM_STROKE,
        });
    }

    fn push_objects(&mut self, state: &ScanState, geometry: &Geometry, config: &Config) {
        let max_distance = state.max_distance_cm();
        for (angle, distance) in state.readings() {
            // at max range means the ping found nothing
            if distance >= max_distance {
                continue;
            }
            let length = geometry.scale(distance, max_distance);
            let center = to_pixel(geometry.polar_to_screen(angle as f64, length));
            let shape = if is_under_beam(angle, state.current_angle(), config) {
                Shape::Dot {
                    center,
                    radius: HIGHLIGHT_RADIUS,
                    color: config.palette.highlight,
                }
            } else {
                Shape::Dot {
                    center,
                    radius: OBJECT_RADIUS,
                    color: config.palette.object,
                }
            };
            self.shapes.push(shape);
        }
    }

    fn push_overlay(&mut self, state: &ScanState, config: &Config) {
        self.shapes.push(Shape::Label {
            text: format!(
                "ANGLE: {}° | DISTANCE: {:.1} cm",
                state.current_angle(),
                state.current_distance()
            ),
            at: OVERLAY_POSITION,
            color: config.palette.beam,
        });
    }
}

fn is_under_beam(angle: i32, current_angle: i32, config: &Config) -> bool {
    (angle - current_angle).abs() < config.radar.highlight_tolerance_deg
}
