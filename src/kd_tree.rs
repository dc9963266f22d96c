use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{halla_debug, hit::Hit, math::Bounds3, ray::Ray, shapes::Triangle};

/// Termination limits for accelerator construction
#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
pub struct TreeSettings {
    /// Face count below which a node becomes a leaf
    pub leaf_size: usize,
    /// Depth at which recursion stops regardless of face count
    pub max_depth: usize,
}

impl Default for TreeSettings {
    fn default() -> Self {
        Self {
            leaf_size: 4,
            max_depth: 16,
        }
    }
}

/// Binary bounding-box tree over triangle faces. Built once after scene
/// load and read-only afterwards, so concurrent lookups need no locking.
pub struct KdTree {
    root: KdNode,
}

pub struct KdNode {
    bounds: Bounds3<f32>,
    content: NodeContent,
}

enum NodeContent {
    Leaf {
        faces: Vec<Arc<Triangle>>,
    },
    Interior {
        left: Box<KdNode>,
        right: Box<KdNode>,
    },
}

impl KdTree {
    /// Builds a new `KdTree` over `faces`.
    pub fn new(faces: Vec<Arc<Triangle>>, settings: TreeSettings) -> Self {
        let face_count = faces.len();
        let ret = Self {
            root: build_node(faces, 0, settings),
        };
        halla_debug!(
            "KdTree: Built over {} faces, depth {}",
            face_count,
            ret.max_depth()
        );
        ret
    }

    /// Returns the nearest intersection of `ray` among the contained faces,
    /// or `None` if nothing was hit.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.root.intersect(ray)
    }

    /// Returns the bounds enclosing every contained face.
    pub fn bounds(&self) -> Bounds3<f32> {
        self.root.bounds
    }

    pub fn root(&self) -> &KdNode {
        &self.root
    }

    /// Returns the longest root-to-leaf path length.
    pub fn max_depth(&self) -> usize {
        self.root.max_depth()
    }

    /// Returns the total number of faces stored in leaves.
    pub fn leaf_face_count(&self) -> usize {
        self.root.leaf_face_count()
    }
}

impl KdNode {
    pub fn bounds(&self) -> Bounds3<f32> {
        self.bounds
    }

    /// Returns the two children of an interior node.
    pub fn children(&self) -> Option<(&KdNode, &KdNode)> {
        match &self.content {
            NodeContent::Interior { left, right } => Some((left, right)),
            NodeContent::Leaf { .. } => None,
        }
    }

    /// Returns the faces of a leaf node, empty for interior nodes.
    pub fn faces(&self) -> &[Arc<Triangle>] {
        match &self.content {
            NodeContent::Leaf { faces } => faces,
            NodeContent::Interior { .. } => &[],
        }
    }

    fn max_depth(&self) -> usize {
        match &self.content {
            NodeContent::Leaf { .. } => 1,
            NodeContent::Interior { left, right } => 1 + left.max_depth().max(right.max_depth()),
        }
    }

    fn leaf_face_count(&self) -> usize {
        match &self.content {
            NodeContent::Leaf { faces } => faces.len(),
            NodeContent::Interior { left, right } => {
                left.leaf_face_count() + right.leaf_face_count()
            }
        }
    }

    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.bounds.intersections(ray)?;

        match &self.content {
            NodeContent::Leaf { faces } => {
                let mut nearest: Option<Hit> = None;
                for face in faces {
                    if let Some(hit) = face.intersect(ray) {
                        if nearest.as_ref().map_or(true, |n| hit.t < n.t) {
                            nearest = Some(hit);
                        }
                    }
                }
                nearest
            }
            NodeContent::Interior { left, right } => {
                // Both subtrees are visited, no pruning by best-known distance
                match (left.intersect(ray), right.intersect(ray)) {
                    (Some(l), Some(r)) => Some(if l.t <= r.t { l } else { r }),
                    (l, r) => l.or(r),
                }
            }
        }
    }
}

fn build_node(faces: Vec<Arc<Triangle>>, depth: usize, settings: TreeSettings) -> KdNode {
    let bounds = faces
        .iter()
        .fold(Bounds3::default(), |b, f| b.union_b(f.bounds()));

    if faces.len() < settings.leaf_size || depth >= settings.max_depth {
        return KdNode {
            bounds,
            content: NodeContent::Leaf { faces },
        };
    }

    // Midpoint partition, trying axes from longest to shortest extent until
    // both halves come out non-empty
    for axis in bounds.axes_by_extent() {
        let pivot = bounds.mid_point()[axis];
        let (left, right): (Vec<_>, Vec<_>) = faces
            .iter()
            .cloned()
            .partition(|f| f.bounds().mid_point()[axis] < pivot);

        if !left.is_empty() && !right.is_empty() {
            return KdNode {
                bounds,
                content: NodeContent::Interior {
                    left: Box::new(build_node(left, depth + 1, settings)),
                    right: Box::new(build_node(right, depth + 1, settings)),
                },
            };
        }
    }

    // Coincident geometry that no axis separates stays in a single leaf
    KdNode {
        bounds,
        content: NodeContent::Leaf { faces },
    }
}
