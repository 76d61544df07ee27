use super::{
    ELEVATION_MAJOR_EVERY, ELEVATION_TICKS, FACE_INSET, HEADING_MAJOR_EVERY, HEADING_TICK_COUNT,
    NEEDLE_HALF_WIDTH, NEEDLE_LENGTH_FACTOR, NEEDLE_TAIL_SHORTENING, TICK_INNER_INSET,
    TICK_OUTER_INSET,
};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use palette::Srgba;
use radial::geometry::polar_to_cartesian;
use radial::{
    ArcSpec, Convention, ElevationControl, HeadingControl, PathCommand, PathDescription, Point,
    build_arc,
};
use std::f64::consts::PI;

const CARDINALS: [(&str, f64); 4] = [("N", 0.0), ("E", 90.0), ("S", 180.0), ("W", 270.0)];

struct DialRenderer<'a> {
    cr: &'a Context,
    colors: &'a ThemeColors,
    radius: f64,
}

impl<'a> DialRenderer<'a> {
    /// Moves the origin so the dial face spans `(0, 0)..(2r, 2r)`, centered in the area.
    fn new(
        cr: &'a Context,
        colors: &'a ThemeColors,
        radius: f64,
        width: i32,
        height: i32,
    ) -> Self {
        cr.translate(
            width as f64 / 2.0 - radius,
            height as f64 / 2.0 - radius,
        );
        Self { cr, colors, radius }
    }

    fn center(&self) -> Point {
        Point::new(self.radius, self.radius)
    }

    fn set_color(&self, color: Srgba<f64>) {
        let (r, g, b, a) = color.into_components();
        self.cr.set_source_rgba(r, g, b, a);
    }

    fn draw_face(&self) -> Result<(), cairo::Error> {
        let c = self.center();
        self.set_color(self.colors.face);
        self.cr.set_line_width(2.0);
        self.cr.new_path();
        self.cr.arc(c.x, c.y, self.radius - FACE_INSET, 0.0, 2.0 * PI);
        self.cr.stroke()
    }

    /// `ticks` yields compass angles and whether the tick is a major one.
    fn draw_ticks(&self, ticks: impl Iterator<Item = (f64, bool)>) -> Result<(), cairo::Error> {
        let c = self.center();
        for (angle, major) in ticks {
            let inner = polar_to_cartesian(c, self.radius - TICK_INNER_INSET, angle);
            let outer = polar_to_cartesian(c, self.radius - TICK_OUTER_INSET, angle);
            let (color, width) = if major {
                (self.colors.tick_major, 2.0)
            } else {
                (self.colors.tick_minor, 1.0)
            };
            self.set_color(color);
            self.cr.set_line_width(width);
            self.cr.move_to(inner.x, inner.y);
            self.cr.line_to(outer.x, outer.y);
            self.cr.stroke()?;
        }
        Ok(())
    }

    fn draw_slice(
        &self,
        spec: &ArcSpec,
        fill: Srgba<f64>,
        edge: Option<Srgba<f64>>,
    ) -> Result<(), cairo::Error> {
        trace_path(self.cr, &build_arc(spec))?;
        self.set_color(fill);
        match edge {
            Some(edge) => {
                self.cr.fill_preserve()?;
                self.set_color(edge);
                self.cr.set_line_width(1.0);
                self.cr.stroke()
            }
            None => self.cr.fill(),
        }
    }

    fn draw_needle(&self, rotation: f64) -> Result<(), cairo::Error> {
        let c = self.center();
        let length = self.radius * NEEDLE_LENGTH_FACTOR;

        self.cr.save()?;
        self.cr.translate(c.x, c.y);
        self.cr.rotate(rotation.to_radians());

        self.set_color(self.colors.needle_head);
        self.cr.move_to(0.0, -length);
        self.cr.line_to(-NEEDLE_HALF_WIDTH, 0.0);
        self.cr.line_to(NEEDLE_HALF_WIDTH, 0.0);
        self.cr.close_path();
        self.cr.fill()?;

        self.set_color(self.colors.needle_tail);
        self.cr.move_to(0.0, length - NEEDLE_TAIL_SHORTENING);
        self.cr.line_to(-NEEDLE_HALF_WIDTH, 0.0);
        self.cr.line_to(NEEDLE_HALF_WIDTH, 0.0);
        self.cr.close_path();
        self.cr.fill()?;

        self.cr.restore()
    }

    fn draw_cardinals(&self) -> Result<(), cairo::Error> {
        let c = self.center();
        self.set_color(self.colors.label);
        self.cr
            .select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        self.cr.set_font_size(12.0);

        for (text, angle) in CARDINALS {
            let anchor = polar_to_cartesian(c, self.radius + super::LABEL_MARGIN / 2.0, angle);
            if let Ok(ext) = self.cr.text_extents(text) {
                self.cr.move_to(
                    anchor.x - ext.width() / 2.0 - ext.x_bearing(),
                    anchor.y - ext.height() / 2.0 - ext.y_bearing(),
                );
                self.cr.show_text(text)?;
            }
        }
        Ok(())
    }
}

/// Replays a slice path onto `cr`. The arc is centered on the path's starting point.
fn trace_path(cr: &Context, path: &PathDescription) -> Result<(), cairo::Error> {
    let mut origin = Point::default();
    cr.new_path();

    for command in path.commands() {
        match command {
            PathCommand::MoveTo(p) => {
                origin = p;
                cr.move_to(p.x, p.y);
            }
            PathCommand::LineTo(p) => cr.line_to(p.x, p.y),
            PathCommand::ArcTo {
                radius, sweep, to, ..
            } => {
                let (x, y) = cr.current_point()?;
                let from = (y - origin.y).atan2(x - origin.x);
                let target = (to.y - origin.y).atan2(to.x - origin.x);
                if sweep {
                    cr.arc(origin.x, origin.y, radius, from, target);
                } else {
                    cr.arc_negative(origin.x, origin.y, radius, from, target);
                }
            }
            PathCommand::Close => cr.close_path(),
        }
    }
    Ok(())
}

pub fn draw_heading(
    cr: &Context,
    width: i32,
    height: i32,
    control: &HeadingControl,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let renderer = DialRenderer::new(cr, colors, control.state().radius, width, height);

    renderer.draw_face()?;
    for spec in control.exclusion_arcs() {
        renderer.draw_slice(&spec, colors.excluded, None)?;
    }
    renderer.draw_ticks(
        (0..HEADING_TICK_COUNT).map(|i| (i as f64 * 10.0, i % HEADING_MAJOR_EVERY == 0)),
    )?;
    renderer.draw_cardinals()?;
    renderer.draw_needle(control.rotation())
}

pub fn draw_elevation(
    cr: &Context,
    width: i32,
    height: i32,
    control: &ElevationControl,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let renderer = DialRenderer::new(cr, colors, control.state().radius, width, height);

    renderer.draw_face()?;
    renderer.draw_slice(
        &control.highlight_arc(),
        colors.highlight,
        Some(colors.highlight_edge),
    )?;
    renderer.draw_ticks(ELEVATION_TICKS.iter().enumerate().map(|(i, visual)| {
        (
            Convention::ELEVATION.to_compass(*visual),
            i % ELEVATION_MAJOR_EVERY == 0,
        )
    }))?;
    renderer.draw_needle(control.rotation())
}
