/// Mesh model: an ordered vertex strip drawn as connected line segments
use crate::math::Vec3;

/// A named vertex strip.
///
/// Edges are implied by storage order: every vertex connects to the one
/// before it. `position` and `rotation` are carried for callers that want a
/// model transform; the projection pipeline does not read them.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub vertices: Vec<Vec3>,
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Mesh {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
        }
    }

    pub fn with_vertices(name: impl Into<String>, vertices: Vec<Vec3>) -> Self {
        Self {
            vertices,
            ..Self::new(name)
        }
    }

    pub fn add_vertex(&mut self, vertex: Vec3) {
        self.vertices.push(vertex);
    }

    /// Consecutive vertex pairs in storage order
    pub fn edges(&self) -> impl Iterator<Item = (&Vec3, &Vec3)> + '_ {
        self.vertices.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// The fixed eight-vertex cube strip.
    ///
    /// This is a traversal path, not a closed cube: drawn as one line strip it
    /// traces a cube-like outline between z = 1 and z = 2.
    pub fn cube() -> Self {
        Self::with_vertices(
            "Cube",
            vec![
                Vec3::new(-1.0, 1.0, 2.0),
                Vec3::new(1.0, 1.0, 2.0),
                Vec3::new(-1.0, -1.0, 2.0),
                Vec3::new(-1.0, -1.0, 1.0),
                Vec3::new(-1.0, 1.0, 1.0),
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(1.0, -1.0, 2.0),
                Vec3::new(1.0, -1.0, 1.0),
            ],
        )
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::cube()
    }
}
