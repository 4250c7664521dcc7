use crate::geometry::Point;

/// Serialize a polyline as SVG path data.
///
/// Format: `M 0 50 L 0 85 L -100 85 L -100 120`
///
/// Whole numbers are written without decimals.
pub fn path_to_string(points: &[Point]) -> String {
    let mut parts = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        parts.push(format!(
            "{command} {} {}",
            format_number(p.x),
            format_number(p.y)
        ));
    }
    parts.join(" ")
}

fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        // Avoid printing "-0".
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// Parse path data written by [`path_to_string`].
///
/// Accepts one `M` followed by any number of `L` commands, each with two
/// numbers. Returns `None` if the string is malformed or has fewer than two points.
pub fn string_to_path(s: &str) -> Option<Vec<Point>> {
    let mut tokens = s.split_whitespace();
    let mut points = Vec::new();

    while let Some(command) = tokens.next() {
        let expected = if points.is_empty() { "M" } else { "L" };
        if command != expected {
            return None;
        }
        let x: f64 = tokens.next()?.parse().ok()?;
        let y: f64 = tokens.next()?.parse().ok()?;
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        points.push(Point::new(x, y));
    }

    (points.len() >= 2).then_some(points)
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_format_number_integer() {
        assert_eq!(format_number(120.0), "120");
        assert_eq!(format_number(-100.0), "-100");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_number_fraction() {
        assert_eq!(format_number(85.5), "85.5");
        assert_eq!(format_number(-0.25), "-0.25");
    }

    #[test]
    fn test_path_to_string() {
        let points = vec![
            Point::new(0.0, 50.0),
            Point::new(0.0, 85.0),
            Point::new(-100.0, 85.0),
            Point::new(-100.0, 120.0),
        ];
        assert_eq!(
            path_to_string(&points),
            "M 0 50 L 0 85 L -100 85 L -100 120"
        );
    }

    #[test]
    fn test_parse_path() {
        let points = string_to_path("M 0 50 L 0 85.5 L -100 85.5").unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 50.0),
                Point::new(0.0, 85.5),
                Point::new(-100.0, 85.5)
            ]
        );
    }

    #[test]
    fn test_parse_path_tolerates_extra_whitespace() {
        let points = string_to_path("  M 1 2\n L 3   4 ").unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn test_parse_path_rejects_malformed() {
        assert!(string_to_path("").is_none());
        assert!(string_to_path("M 0 0").is_none());
        assert!(string_to_path("L 0 0 L 1 1").is_none());
        assert!(string_to_path("M 0 0 M 1 1").is_none());
        assert!(string_to_path("M 0 0 L 1").is_none());
        assert!(string_to_path("M 0 0 L x 1").is_none());
        assert!(string_to_path("M 0 0 L NaN 1").is_none());
    }
}
