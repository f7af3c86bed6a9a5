//! Layer stack primitive
//!
//! Composes an ordered list of plain layer records on one canvas, back to
//! front. Each layer carries its shape, paint and transform; nothing here
//! knows what the layers mean.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific types.

use iced::widget::Canvas;
use iced::widget::canvas::{Fill, Frame, Geometry, Gradient, Path, Program, Style, gradient};
use iced::{Color, Element, Point, Radians, Rectangle, Renderer, Size, Theme, Vector, mouse};

use crate::ui::theme;

/// Side length of the coordinate space layers are authored in
pub const DESIGN_SIZE: f32 = 96.0;

/// Heart outline in a 20 x 18.35 box, origin at the box center.
/// Segments: start point, then cubic curves `(control1, control2, to)`.
const HEART_START: (f32, f32) = (0.0, 9.175);
const HEART_BOX: (f32, f32) = (20.0, 18.35);
const HEART_CURVES: [[(f32, f32); 3]; 6] = [
    [(-6.6, 3.185), (-10.0, 0.105), (-10.0, -3.675)],
    [(-10.0, -6.755), (-7.58, -9.175), (-4.5, -9.175)],
    [(-2.76, -9.175), (-1.09, -8.365), (0.0, -7.085)],
    [(1.09, -8.365), (2.76, -9.175), (4.5, -9.175)],
    [(7.58, -9.175), (10.0, -6.755), (10.0, -3.675)],
    [(10.0, 0.105), (6.6, 3.185), (0.0, 9.175)],
];

/// Point in a shape's bounding box, (0, 0) top-leading to (1, 1) bottom-trailing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitPoint {
    pub x: f32,
    pub y: f32,
}

impl UnitPoint {
    pub const TOP: Self = Self { x: 0.5, y: 0.0 };
    pub const BOTTOM: Self = Self { x: 0.5, y: 1.0 };
    pub const LEADING: Self = Self { x: 0.0, y: 0.5 };

    /// Resolve inside a box centered on the origin
    pub fn in_box(self, size: Size) -> Point {
        Point::new((self.x - 0.5) * size.width, (self.y - 0.5) * size.height)
    }
}

/// One small circle of a radial ornament.
///
/// Drawn `offset` units along the x axis, then rotated about the layer
/// origin by `rotation` degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub offset: f32,
    pub rotation: f32,
    pub diameter: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled heart of the given size, centered on the layer origin
    Heart(Size),
    /// Set of dots, each painted within its own bounds
    Dots(Vec<Dot>),
}

impl Shape {
    /// Bounding size of the shape before any transform
    pub fn size(&self) -> Size {
        match self {
            Shape::Heart(size) => *size,
            Shape::Dots(dots) => {
                let reach = dots
                    .iter()
                    .map(|dot| dot.offset.abs() + dot.diameter / 2.0)
                    .fold(0.0_f32, f32::max);
                Size::new(reach * 2.0, reach * 2.0)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Theme foreground color
    Foreground,
    /// Two-stop linear gradient across the shape's bounds
    LinearGradient {
        colors: [Color; 2],
        start: UnitPoint,
        end: UnitPoint,
    },
}

/// Point the scale is applied around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Center,
    Bottom,
}

impl Anchor {
    /// Anchor position relative to the center of a shape of `size`
    pub fn offset(self, size: Size) -> Vector {
        match self {
            Anchor::Center => Vector::new(0.0, 0.0),
            Anchor::Bottom => Vector::new(0.0, size.height / 2.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub anchor: Anchor,
    pub opacity: f32,
    /// Rotation in degrees about the layer origin
    pub rotation: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            anchor: Anchor::Center,
            opacity: 1.0,
            rotation: 0.0,
        }
    }
}

impl Transform {
    /// A layer that contributes nothing to the frame
    pub fn is_invisible(&self) -> bool {
        self.opacity <= 0.0 || self.scale == 0.0
    }
}

/// A renderable layer record
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub shape: Shape,
    pub paint: Paint,
    pub transform: Transform,
}

/// Ordered layers drawn back to front
#[derive(Debug, Clone, Default)]
pub struct LayerStack {
    pub layers: Vec<Layer>,
}

impl LayerStack {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }
}

/// Fill for `paint` over a box of `size` centered on the current origin
fn fill_for(paint: Paint, size: Size, opacity: f32, theme: &Theme) -> Fill {
    match paint {
        Paint::Foreground => Fill::from(theme::text_primary(theme).scale_alpha(opacity)),
        Paint::LinearGradient { colors, start, end } => {
            let linear = gradient::Linear::new(start.in_box(size), end.in_box(size))
                .add_stop(0.0, colors[0].scale_alpha(opacity))
                .add_stop(1.0, colors[1].scale_alpha(opacity));
            Fill {
                style: Style::Gradient(Gradient::Linear(linear)),
                ..Fill::default()
            }
        }
    }
}

fn heart_path(size: Size) -> Path {
    let sx = size.width / HEART_BOX.0;
    let sy = size.height / HEART_BOX.1;
    let point = |(x, y): (f32, f32)| Point::new(x * sx, y * sy);

    Path::new(|builder| {
        builder.move_to(point(HEART_START));
        for [control_a, control_b, to] in HEART_CURVES {
            builder.bezier_curve_to(point(control_a), point(control_b), point(to));
        }
        builder.close();
    })
}

fn draw_layer(frame: &mut Frame, layer: &Layer, theme: &Theme) {
    let transform = layer.transform;
    let anchor = transform.anchor.offset(layer.shape.size());

    frame.with_save(|frame| {
        frame.rotate(Radians(transform.rotation.to_radians()));
        frame.translate(anchor);
        frame.scale(transform.scale);
        frame.translate(Vector::new(-anchor.x, -anchor.y));

        match &layer.shape {
            Shape::Heart(size) => {
                let fill = fill_for(layer.paint, *size, transform.opacity, theme);
                frame.fill(&heart_path(*size), fill);
            }
            Shape::Dots(dots) => {
                for dot in dots {
                    let size = Size::new(dot.diameter, dot.diameter);
                    frame.with_save(|frame| {
                        frame.rotate(Radians(dot.rotation.to_radians()));
                        frame.translate(Vector::new(dot.offset, 0.0));
                        let fill = fill_for(layer.paint, size, transform.opacity, theme);
                        frame.fill(&Path::circle(Point::ORIGIN, dot.diameter / 2.0), fill);
                    });
                }
            }
        }
    });
}

impl<Message> Program<Message> for LayerStack {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let unit = bounds.width.min(bounds.height) / DESIGN_SIZE;

        frame.translate(Vector::new(bounds.width / 2.0, bounds.height / 2.0));
        frame.scale(unit);

        for layer in self.layers.iter().filter(|l| !l.transform.is_invisible()) {
            draw_layer(&mut frame, layer, theme);
        }

        vec![frame.into_geometry()]
    }
}

/// Create a layer stack element of the given side length
pub fn view_layer_stack<'a, Message: 'a>(stack: LayerStack, size: f32) -> Element<'a, Message> {
    Canvas::new(stack).width(size).height(size).into()
}
