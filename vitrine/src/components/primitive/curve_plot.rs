use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Theme, mouse};

use crate::motion::CubicBezier;

const PLOT_PADDING: f32 = 12.0;
const GUIDE_WIDTH: f32 = 1.0;
const CURVE_WIDTH: f32 = 2.0;
const HANDLE_RADIUS: f32 = 3.0;
// Vertical room for curves overshooting the unit square.
const CURVE_HEADROOM: f32 = 1.7;

/// Props for plotting a timing curve.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CurvePlotProps {
    pub(crate) curve: CubicBezier,
    pub(crate) stroke: Color,
    pub(crate) guide: Color,
    pub(crate) width: f32,
    pub(crate) height: f32,
}

/// Render a cubic-bezier timing curve with its control handles.
pub(crate) fn view<'a, Message: 'a>(
    props: CurvePlotProps,
) -> Element<'a, Message> {
    canvas::Canvas::new(CurvePlot { props })
        .width(Length::Fixed(props.width))
        .height(Length::Fixed(props.height))
        .into()
}

struct CurvePlot {
    props: CurvePlotProps,
}

impl<Message> canvas::Program<Message> for CurvePlot {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let plot = PlotArea::new(bounds.width, bounds.height);
        let curve = self.props.curve;
        let guide = Stroke::default()
            .with_color(self.props.guide)
            .with_width(GUIDE_WIDTH);

        frame.stroke(
            &Path::line(plot.point(0.0, 0.0), plot.point(1.0, 1.0)),
            guide,
        );

        let start = plot.point(0.0, 0.0);
        let end = plot.point(1.0, 1.0);
        let first = plot.point(curve.x1, curve.y1);
        let second = plot.point(curve.x2, curve.y2);

        frame.stroke(&Path::line(start, first), guide);
        frame.stroke(&Path::line(end, second), guide);
        frame.fill(&Path::circle(first, HANDLE_RADIUS), self.props.guide);
        frame.fill(&Path::circle(second, HANDLE_RADIUS), self.props.guide);

        let path = Path::new(|builder| {
            builder.move_to(start);
            builder.bezier_curve_to(first, second, end);
        });
        frame.stroke(
            &path,
            Stroke::default()
                .with_color(self.props.stroke)
                .with_width(CURVE_WIDTH),
        );

        vec![frame.into_geometry()]
    }
}

/// Maps unit curve space onto the canvas, leaving headroom for overshoot.
struct PlotArea {
    left: f32,
    bottom: f32,
    width: f32,
    height: f32,
}

impl PlotArea {
    fn new(width: f32, height: f32) -> Self {
        let inner_height = (height - PLOT_PADDING * 2.0).max(0.0);
        Self {
            left: PLOT_PADDING,
            bottom: height - PLOT_PADDING,
            width: (width - PLOT_PADDING * 2.0).max(0.0),
            height: inner_height / CURVE_HEADROOM,
        }
    }

    fn point(&self, x: f32, y: f32) -> Point {
        Point::new(self.left + x * self.width, self.bottom - y * self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::PlotArea;

    #[test]
    fn given_plot_area_when_mapping_unit_corners_then_points_stay_inside() {
        let plot = PlotArea::new(200.0, 120.0);

        let origin = plot.point(0.0, 0.0);
        let far = plot.point(1.0, 1.0);

        assert!(origin.x >= 0.0 && origin.y <= 120.0);
        assert!(far.x <= 200.0 && far.y >= 0.0);
        assert!(far.y < origin.y);
    }

    #[test]
    fn given_overshooting_handle_when_mapped_then_point_fits_headroom() {
        let plot = PlotArea::new(200.0, 120.0);
        assert!(plot.point(0.34, 1.56).y >= 0.0);
    }
}
