use foundation::Color;

/// Fill + stroke for one emitted path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PathStyle {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl PathStyle {
    pub const fn new(fill: Color, stroke: Color, stroke_width: f64) -> Self {
        Self {
            fill,
            stroke,
            stroke_width,
        }
    }
}

/// The sphere silhouette behind all country paths.
pub const DISC_STYLE: PathStyle =
    PathStyle::new(Color::rgb(238, 238, 238), Color::rgb(0, 0, 0), 0.2);

const COUNTRY_STROKE: Color = Color::rgb(51, 51, 51);
const HOVER_STROKE: Color = Color::rgb(0, 0, 0);

/// Country path style; hovering thickens and darkens the outline.
pub fn country_style(fill: Color, hovered: bool) -> PathStyle {
    if hovered {
        PathStyle::new(fill, HOVER_STROKE, 1.0)
    } else {
        PathStyle::new(fill, COUNTRY_STROKE, 0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::{DISC_STYLE, country_style};
    use foundation::Color;

    #[test]
    fn hover_changes_stroke_not_fill() {
        let fill = Color::rgb(10, 20, 30);
        let base = country_style(fill, false);
        let hovered = country_style(fill, true);
        assert_eq!(base.fill, hovered.fill);
        assert!(hovered.stroke_width > base.stroke_width);
    }

    #[test]
    fn disc_style_is_light_gray() {
        assert_eq!(DISC_STYLE.fill, Color::rgb(238, 238, 238));
        assert_eq!(DISC_STYLE.stroke_width, 0.2);
    }
}
