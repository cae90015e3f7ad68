use super::annotations::BBox;

/// Pixel-space point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Closed polygon in pixel space. Vertices are in order; the edge back to
/// the first vertex is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Scale a fractional bbox by the frame dimensions into its four corners.
    pub fn from_bbox(bbox: &BBox, frame_width: u32, frame_height: u32) -> Self {
        let w = f64::from(frame_width);
        let h = f64::from(frame_height);
        let left = bbox.left * w;
        let top = bbox.top * h;
        let right = (bbox.left + bbox.width) * w;
        let bottom = (bbox.top + bbox.height) * h;

        Self::new(vec![
            Point { x: left, y: top },
            Point { x: right, y: top },
            Point { x: right, y: bottom },
            Point { x: left, y: bottom },
        ])
    }

    /// Area centroid (shoelace), falling back to the vertex mean when the
    /// area degenerates to zero.
    pub fn centroid(&self) -> Point {
        let n = self.vertices.len();
        let mut area2 = 0.0;
        let mut cx = 0.0;
        let mut cy = 0.0;

        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let cross = a.x * b.y - b.x * a.y;
            area2 += cross;
            cx += (a.x + b.x) * cross;
            cy += (a.y + b.y) * cross;
        }

        if area2.abs() < f64::EPSILON {
            let inv = 1.0 / n as f64;
            return Point {
                x: self.vertices.iter().map(|p| p.x).sum::<f64>() * inv,
                y: self.vertices.iter().map(|p| p.y).sum::<f64>() * inv,
            };
        }

        Point {
            x: cx / (3.0 * area2),
            y: cy / (3.0 * area2),
        }
    }

    /// Ray-casting containment test. Points exactly on an edge may land on
    /// either side.
    pub fn contains(&self, p: Point) -> bool {
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;

        for i in 0..n {
            let (vi, vj) = (self.vertices[i], self.vertices[j]);
            if (vi.y > p.y) != (vj.y > p.y) {
                let x_at = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
                if p.x < x_at {
                    inside = !inside;
                }
            }
            j = i;
        }

        inside
    }
}
