use std::fmt::Write as _;

use foundation::math::Vec2;
use layers::{FrameOutput, PathGeometry};

/// Serializes a composed frame to a standalone SVG document. The draw
/// commands are emitted in order, so the disc stays behind every country
/// path exactly as composed.
pub fn render_svg(frame: &FrameOutput, width: f64, height: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}">"#
    );

    for command in &frame.commands {
        let fill = command.style.fill.to_css();
        let stroke = command.style.stroke.to_css();
        let stroke_width = command.style.stroke_width;
        match &command.geometry {
            PathGeometry::Circle(disc) => {
                let _ = writeln!(
                    out,
                    r#"  <circle cx="{}" cy="{}" r="{}" fill="{fill}" stroke="{stroke}" stroke-width="{stroke_width}"/>"#,
                    disc.center.x, disc.center.y, disc.radius
                );
            }
            PathGeometry::Rings(rings) => {
                let _ = writeln!(
                    out,
                    r#"  <path d="{}" fill="{fill}" fill-rule="evenodd" stroke="{stroke}" stroke-width="{stroke_width}"/>"#,
                    path_data(rings)
                );
            }
        }
    }

    legend(&mut out, frame, height);
    tooltip(&mut out, frame);

    out.push_str("</svg>\n");
    out
}

fn path_data(rings: &[Vec<Vec2>]) -> String {
    let mut d = String::new();
    for ring in rings {
        for (index, point) in ring.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{command}{:.2},{:.2}", point.x, point.y);
        }
        d.push('Z');
    }
    d
}

fn legend(out: &mut String, frame: &FrameOutput, height: f64) {
    let legend = &frame.legend;
    let _ = writeln!(out, "  <defs><linearGradient id=\"legend\">");
    for (index, color) in legend.gradient.iter().enumerate() {
        let offset = index as f64 / (legend.gradient.len() - 1) as f64 * 100.0;
        let _ = writeln!(
            out,
            r#"    <stop offset="{offset}%" stop-color="{}"/>"#,
            color.to_css()
        );
    }
    let _ = writeln!(out, "  </linearGradient></defs>");

    let y = height - 28.0;
    let _ = writeln!(
        out,
        r#"  <text x="16" y="{}" font-size="13" font-weight="bold">{}</text>"#,
        y - 8.0,
        legend.title
    );
    let _ = writeln!(
        out,
        r#"  <rect x="16" y="{y}" width="96" height="16" fill="url(#legend)"/>"#
    );
    let _ = writeln!(
        out,
        r#"  <text x="120" y="{}" font-size="12">{}</text>"#,
        y + 12.0,
        legend.domain
    );
}

fn tooltip(out: &mut String, frame: &FrameOutput) {
    let Some(tooltip) = &frame.tooltip else {
        return;
    };
    let _ = writeln!(
        out,
        r#"  <text x="16" y="24" font-size="14" font-weight="bold">{}</text>"#,
        tooltip.country
    );
    for (index, line) in tooltip.lines.iter().enumerate() {
        let _ = writeln!(
            out,
            r#"  <text x="16" y="{}" font-size="12">{line}</text>"#,
            42 + index * 16
        );
    }
}

#[cfg(test)]
mod tests {
    use super::render_svg;
    use catalog::{MetricKind, fallback_dataset};
    use foundation::CountryId;
    use foundation::math::OrthoCamera;
    use layers::compose_frame;
    use scene::{BoundaryFeature, GeoPoint, GlobeScene};

    fn scene() -> GlobeScene {
        let mut scene = GlobeScene::new(OrthoCamera::default());
        scene.set_features(vec![BoundaryFeature::new(
            CountryId(392),
            vec![vec![
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(5.0, 0.0),
                GeoPoint::new(5.0, 5.0),
                GeoPoint::new(0.0, 5.0),
                GeoPoint::new(0.0, 0.0),
            ]],
        )]);
        scene.set_dataset(fallback_dataset());
        scene
    }

    #[test]
    fn disc_precedes_country_paths_in_the_document() {
        let svg = render_svg(&compose_frame(&scene()), 800.0, 600.0);
        let circle = svg.find("<circle").expect("circle present");
        let path = svg.find("<path").expect("path present");
        assert!(circle < path);
    }

    #[test]
    fn hover_emits_tooltip_text() {
        let mut s = scene();
        s.select_metric(MetricKind::InsomniaRate);
        s.hover_enter(CountryId(392));
        let svg = render_svg(&compose_frame(&s), 800.0, 600.0);
        assert!(svg.contains("Japan"));
        assert!(svg.contains("Insomnia Rate: 21.0%"));
    }

    #[test]
    fn legend_gradient_has_three_stops() {
        let svg = render_svg(&compose_frame(&scene()), 800.0, 600.0);
        assert_eq!(svg.matches("<stop ").count(), 3);
        assert!(svg.contains("Average Sleep Hours"));
    }
}
