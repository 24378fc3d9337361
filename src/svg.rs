use crate::point::{MercatorBoundingBox, MercatorPoint};

pub struct SVG {
    mercator_bbox: MercatorBoundingBox,
    padding: f64,
    elements: Vec<String>,
}

impl SVG {
    pub fn init(b: &MercatorBoundingBox) -> Self {
        Self {
            mercator_bbox: b.clone(),
            padding: 0.1,
            elements: Vec::new(),
        }
    }
    pub fn add_polygon(&mut self, points: &[MercatorPoint], fill: &str) {
        let s = self.point_list(points);
        let p = format!(
            r#"  <polygon points="{}" fill="{}" stroke="green" stroke-width="3"/>"#,
            s, fill
        );
        self.elements.push(p);
    }
    pub fn add_path(&mut self, points: &[MercatorPoint], stroke: &str) {
        let s = self.point_list(points);
        let p = format!(
            r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
            s, stroke
        );
        self.elements.push(p);
    }
    pub fn render(&self) -> String {
        let mut svg =
            String::from(r#"<svg width="500" height="500" xmlns="http://www.w3.org/2000/svg">"#);
        svg.push('\n');
        for p in &self.elements {
            svg.push_str(p);
            svg.push('\n');
        }
        svg.push_str("</svg>");
        svg
    }
    fn point_list(&self, points: &[MercatorPoint]) -> String {
        points
            .iter()
            .map(|p| {
                let (x, y) = self.transform(p.x, p.y);
                format!("{:.2},{:.2}", x, y)
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
    pub fn width(&self) -> f64 {
        self.mercator_bbox.width()
    }
    pub fn height(&self) -> f64 {
        self.mercator_bbox.height()
    }
    pub fn scale(&self) -> f64 {
        let padded_width = self.width() * (1.0 + 2.0 * self.padding);
        let padded_height = self.height() * (1.0 + 2.0 * self.padding);
        500.0 / padded_width.max(padded_height)
    }
    fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        let svg_x = (x - self.mercator_bbox.min.x + self.width() * self.padding) * self.scale();
        let svg_y =
            500.0 - (y - self.mercator_bbox.min.y + self.height() * self.padding) * self.scale();
        (svg_x, svg_y)
    }
}
