//! Skills radar chart geometry.
//!
//! Angles are in degrees, clockwise from the top of the chart: a point is
//! placed at `(angle - 90)` in standard screen coordinates (y grows down).

#[cfg(test)]
#[path = "radar_test.rs"]
mod radar_test;

/// One axis of the radar.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillPoint {
    pub name: &'static str,
    /// Proficiency in `0..=100`.
    pub value: f64,
    pub angle_deg: f64,
}

impl SkillPoint {
    pub const fn new(name: &'static str, value: f64, angle_deg: f64) -> Self {
        Self { name, value, angle_deg }
    }
}

/// The six axes shown on the skills page.
pub const SKILLS: [SkillPoint; 6] = [
    SkillPoint::new("Backend Development", 95.0, 0.0),
    SkillPoint::new("Database Design", 85.0, 60.0),
    SkillPoint::new("API Development", 90.0, 120.0),
    SkillPoint::new("Cloud Platforms", 75.0, 180.0),
    SkillPoint::new("Testing", 70.0, 240.0),
    SkillPoint::new("DevOps", 65.0, 300.0),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Label anchor as percentages of the chart box.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelPosition {
    pub name: &'static str,
    pub left_pct: f64,
    pub top_pct: f64,
}

/// Everything needed to draw the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarDrawing {
    pub center: Point,
    /// Radii of the concentric grid rings, innermost first.
    pub rings: Vec<f64>,
    /// Outer end of each spoke; spokes start at `center`.
    pub spokes: Vec<Point>,
    /// Closed SVG path through every value point.
    pub outline: String,
    pub markers: Vec<Point>,
    pub labels: Vec<LabelPosition>,
}

/// Chart dimensions in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarLayout {
    pub center: Point,
    pub max_radius: f64,
    pub rings: u32,
    pub label_offset: f64,
    pub view_size: f64,
}

impl Default for RadarLayout {
    fn default() -> Self {
        Self {
            center: Point { x: 200.0, y: 200.0 },
            max_radius: 150.0,
            rings: 5,
            label_offset: 30.0,
            view_size: 400.0,
        }
    }
}

impl RadarLayout {
    /// Position `radius` units from the center along `angle_deg`.
    pub fn point(&self, angle_deg: f64, radius: f64) -> Point {
        let angle = (angle_deg - 90.0).to_radians();
        Point {
            x: self.center.x + angle.cos() * radius,
            y: self.center.y + angle.sin() * radius,
        }
    }

    /// Radius for a `0..=100` value; out-of-range values are clamped.
    pub fn value_radius(&self, value: f64) -> f64 {
        value.clamp(0.0, 100.0) / 100.0 * self.max_radius
    }

    pub fn drawing(&self, skills: &[SkillPoint]) -> RadarDrawing {
        let rings = (1..=self.rings)
            .map(|i| self.max_radius / f64::from(self.rings) * f64::from(i))
            .collect();
        let spokes = skills
            .iter()
            .map(|s| self.point(s.angle_deg, self.max_radius))
            .collect();
        let markers: Vec<Point> = skills
            .iter()
            .map(|s| self.point(s.angle_deg, self.value_radius(s.value)))
            .collect();
        let labels = skills
            .iter()
            .map(|s| {
                let p = self.point(s.angle_deg, self.max_radius + self.label_offset);
                LabelPosition {
                    name: s.name,
                    left_pct: p.x / self.view_size * 100.0,
                    top_pct: p.y / self.view_size * 100.0,
                }
            })
            .collect();

        RadarDrawing {
            center: self.center,
            rings,
            spokes,
            outline: outline_path(&markers),
            markers,
            labels,
        }
    }
}

fn outline_path(points: &[Point]) -> String {
    if points.is_empty() {
        return String::new();
    }
    let mut path = String::new();
    for (idx, p) in points.iter().enumerate() {
        if idx > 0 {
            path.push(' ');
        }
        let cmd = if idx == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{cmd} {} {}", fmt_coord(p.x), fmt_coord(p.y)));
    }
    path.push_str(" Z");
    path
}

/// Two-decimal coordinate with trailing zeros and `-0` removed.
pub fn fmt_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}
