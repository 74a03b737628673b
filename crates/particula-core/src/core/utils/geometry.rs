use nalgebra::Vector3;

pub fn distance(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    (a - b).norm()
}

/// Distance between two sphere surfaces; negative when the spheres overlap.
pub fn sphere_distance(
    center1: &Vector3<f64>,
    radius1: f64,
    center2: &Vector3<f64>,
    radius2: f64,
) -> f64 {
    distance(center1, center2) - radius1 - radius2
}

pub fn centroid(points: &[Vector3<f64>]) -> Option<Vector3<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum: Vector3<f64> = points.iter().sum();
    Some(sum / points.len() as f64)
}

/// Axis-aligned bounding box as `(min, max)` corners.
pub fn bounding_box(points: &[Vector3<f64>]) -> Option<(Vector3<f64>, Vector3<f64>)> {
    let (first, rest) = points.split_first()?;
    Some(rest.iter().fold((*first, *first), |(min, max), p| {
        (min.inf(p), max.sup(p))
    }))
}
