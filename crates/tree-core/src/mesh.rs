use glam::Vec3;

/// Flat-shaded vertex: each face carries its own normal.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

fn flat_faces(corners: &[Vec3], faces: &[[usize; 3]]) -> Vec<MeshVertex> {
    let mut out = Vec::with_capacity(faces.len() * 3);
    for f in faces {
        let (a, b, c) = (corners[f[0]], corners[f[1]], corners[f[2]]);
        let mut n = (b - a).cross(c - a).normalize_or_zero();
        // keep every face wound outward
        let (b, c) = if n.dot(a + b + c) < 0.0 {
            n = -n;
            (c, b)
        } else {
            (b, c)
        };
        for p in [a, b, c] {
            out.push(MeshVertex {
                position: p.to_array(),
                normal: n.to_array(),
            });
        }
    }
    out
}

/// Unit octahedron, 8 faces. Used for leaves.
pub fn octahedron() -> Vec<MeshVertex> {
    let v = [Vec3::X, -Vec3::X, Vec3::Y, -Vec3::Y, Vec3::Z, -Vec3::Z];
    let faces = [
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 4, 2],
        [1, 3, 4],
        [1, 5, 3],
        [1, 2, 5],
    ];
    flat_faces(&v, &faces)
}

/// Unit icosahedron, 20 faces. Used for ornaments.
pub fn icosahedron() -> Vec<MeshVertex> {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let v: Vec<Vec3> = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ]
    .iter()
    .map(|p| Vec3::from_array(*p).normalize())
    .collect();
    let faces = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    flat_faces(&v, &faces)
}

/// Unit tetrahedron, 4 faces. Used for the ribbon.
pub fn tetrahedron() -> Vec<MeshVertex> {
    let v: Vec<Vec3> = [
        [1.0, 1.0, 1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
    ]
    .iter()
    .map(|p| Vec3::from_array(*p).normalize())
    .collect();
    let faces = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];
    flat_faces(&v, &faces)
}
