use glam::Vec3;

/// Half-line from `origin` along the unit vector `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point in world space.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray; `direction` is normalized (a zero vector falls back to
    /// `-Z`, the default view direction).
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or(Vec3::NEG_Z),
        }
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Ray-sphere intersection test.
///
/// Returns the distance along the ray to the first intersection at or in
/// front of the origin, or `None` on a miss. When the origin lies inside
/// the sphere the far root is returned.
#[must_use]
pub fn ray_sphere_intersect(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let a = ray.direction.dot(ray.direction);
    let b = 2.0 * oc.dot(ray.direction);
    let c = radius.mul_add(-radius, oc.dot(oc));
    let discriminant = b.mul_add(b, -4.0 * a * c);

    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t = (-b - sqrt_d) / (2.0 * a);
    if t >= 0.0 {
        return Some(t);
    }
    // Inside the sphere: take the far intersection
    let t2 = (-b + sqrt_d) / (2.0 * a);
    (t2 >= 0.0).then_some(t2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_on_hit_returns_near_surface() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -2.0));
        let t = ray_sphere_intersect(&ray, Vec3::ZERO, 1.0).unwrap();
        assert!((t - 4.0).abs() < 1e-5);
        assert!(ray.at(t).abs_diff_eq(Vec3::new(0.0, 0.0, 1.0), 1e-5));
    }

    #[test]
    fn miss_returns_none() {
        let ray = Ray::new(Vec3::new(0.0, 2.0, 5.0), Vec3::NEG_Z);
        assert!(ray_sphere_intersect(&ray, Vec3::ZERO, 1.0).is_none());
    }

    #[test]
    fn sphere_behind_origin_is_not_hit() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(ray_sphere_intersect(&ray, Vec3::ZERO, 1.0).is_none());
    }

    #[test]
    fn origin_inside_sphere_uses_far_root() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = ray_sphere_intersect(&ray, Vec3::ZERO, 2.0).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }
}
