/// Camera and projection utilities
use crate::config::ViewerConfig;
use crate::math::{self, Mat4, Vec3, Vec4};

/// Which view matrix the static view-projection is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Identity view; the camera is ignored
    #[default]
    Identity,
    /// View matrix from [`look_at`] on the configured camera
    LookAt,
}

/// Camera placement for the look-at view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            position,
            target,
            up,
        }
    }

    pub fn view_matrix(&self) -> Option<Mat4> {
        look_at(self)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 1.0, 0.0),
        )
    }
}

/// Scale factors and clip distances for [`perspective_projection`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    pub w: f32,
    pub h: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Perspective {
    pub fn matrix(&self) -> Mat4 {
        perspective_projection(self.w, self.h, self.z_near, self.z_far)
    }
}

impl Default for Perspective {
    fn default() -> Self {
        Self {
            w: 1.0,
            h: 1.0,
            z_near: 4.0,
            z_far: 10.0,
        }
    }
}

/// Build a view matrix whose rows are the camera basis.
///
/// The z axis points from the camera towards its target, x is `up × z` and
/// y is `z × x`. Translation holds the negated projections of the camera
/// position onto each axis. Returns `None` when the camera sits on its target
/// or `up` is parallel to the viewing direction.
pub fn look_at(camera: &Camera) -> Option<Mat4> {
    let zaxis = math::normalize(&math::subtract(&camera.target, &camera.position))?;
    let xaxis = math::normalize(&math::cross(&camera.up, &zaxis))?;
    let yaxis = math::cross(&zaxis, &xaxis);

    let row = |axis: &Vec3| {
        Vec4::new(axis.x, axis.y, axis.z, -math::dot(axis, &camera.position)).transpose()
    };

    Some(Mat4::from_rows(&[
        row(&xaxis),
        row(&yaxis),
        row(&zaxis),
        Vec4::new(0.0, 0.0, 0.0, 1.0).transpose(),
    ]))
}

pub fn identity_transform() -> Mat4 {
    Mat4::identity()
}

/// Perspective matrix from raw scale factors and clip distances.
///
/// The last row maps the output w to `-z`; nothing here divides by it.
#[rustfmt::skip]
pub fn perspective_projection(w: f32, h: f32, z_near: f32, z_far: f32) -> Mat4 {
    let depth = z_near - z_far;
    Mat4::new(
        w,   0.0, 0.0,           0.0,
        0.0, h,   0.0,           0.0,
        0.0, 0.0, z_far / depth, z_near * z_far / depth,
        0.0, 0.0, -1.0,          0.0,
    )
}

/// `view * projection`
pub fn combined_transform(view: &Mat4, projection: &Mat4) -> Mat4 {
    math::multiply(view, projection)
}

/// View, projection and their product, built once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct ViewProjection {
    pub view: Mat4,
    pub projection: Mat4,
    pub combined: Mat4,
}

impl ViewProjection {
    pub fn from_parts(view: Mat4, projection: Mat4) -> Self {
        Self {
            combined: combined_transform(&view, &projection),
            view,
            projection,
        }
    }

    pub fn new(config: &ViewerConfig) -> Self {
        let view = match config.view_mode {
            ViewMode::Identity => identity_transform(),
            ViewMode::LookAt => config.camera.view_matrix().unwrap_or_else(|| {
                log::warn!(
                    "Degenerate camera {:?}, falling back to identity view",
                    config.camera
                );
                identity_transform()
            }),
        };
        Self::from_parts(view, config.perspective.matrix())
    }
}
