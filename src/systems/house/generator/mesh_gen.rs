// footprint outline + floor stack -> storey, slab and roof meshes

use bevy::prelude::*;
use bevy::math::bounding::{Aabb2d, BoundingVolume};
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use super::floors::RoofGeometry;
use super::params::RoofType;
use super::utils::{polygon_area, rect_polygon};
use super::Polygon;

const FLAT_ROOF_THICKNESS: f32 = 0.2;

// flat shaded triangle soup, every face gets its own vertices
#[derive(Default)]
struct MeshBuilder {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    // counter-clockwise seen from the outside
    fn tri(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let normal = (b - a).cross(c - a).normalize_or_zero();
        let base = self.positions.len() as u32;
        for p in [a, b, c] {
            self.positions.push(p.to_array());
            self.normals.push(normal.to_array());
            // planar projection on the dominant axis
            let uv = if normal.y.abs() > 0.5 {
                [p.x, p.z]
            } else if normal.x.abs() > normal.z.abs() {
                [p.z, p.y]
            } else {
                [p.x, p.y]
            };
            self.uvs.push(uv);
        }
        self.indices.extend([base, base + 1, base + 2]);
    }

    fn quad(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3) {
        self.tri(a, b, c);
        self.tri(a, c, d);
    }

    fn build(self) -> Mesh {
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals);
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, self.uvs);
        mesh.insert_indices(Indices::U32(self.indices));
        mesh
    }
}

/// Vertex a cap can be fanned from. For an L outline that is the inner corner,
/// any vertex works for a convex outline.
pub fn fan_origin(polygon: &Polygon) -> usize {
    let n = polygon.len();
    let winding = polygon_area(polygon).signum();
    (0..n)
        .find(|&i| {
            let prev = polygon[(i + n - 1) % n];
            let next = polygon[(i + 1) % n];
            (polygon[i] - prev).perp_dot(next - polygon[i]) * winding < 0.0
        })
        .unwrap_or(0)
}

/// Extrudes a counter-clockwise plan outline between `base` and `base + height`.
pub fn extrude_polygon(polygon: &Polygon, base: f32, height: f32) -> Mesh {
    let mut builder = MeshBuilder::default();
    let n = polygon.len();
    if n < 3 {
        return builder.build();
    }
    let top = base + height;
    let at = |v: Vec2, y: f32| Vec3::new(v.x, y, v.y);

    // walls
    for i in 0..n {
        let v1 = polygon[i];
        let v2 = polygon[(i + 1) % n];
        builder.quad(at(v1, base), at(v1, top), at(v2, top), at(v2, base));
    }

    // caps
    let origin = fan_origin(polygon);
    for i in 0..n {
        let next = (i + 1) % n;
        if i == origin || next == origin {
            continue;
        }
        builder.tri(at(polygon[origin], top), at(polygon[next], top), at(polygon[i], top));
        builder.tri(at(polygon[origin], base), at(polygon[i], base), at(polygon[next], base));
    }

    builder.build()
}

/// Roof over the main mass. Gable and hip ridges run along x, slopes face front and back.
pub fn roof_mesh(roof: &RoofGeometry, main: &Aabb2d) -> Mesh {
    let eaves = main.grow(Vec2::splat(roof.overhang.max(0.0)));
    let y = roof.base_elevation;

    if roof.kind == RoofType::Flat || roof.ridge_height <= 0.0 {
        return extrude_polygon(&rect_polygon(&eaves), y, FLAT_ROOF_THICKNESS);
    }

    let (x0, x1, z0, z1) = (eaves.min.x, eaves.max.x, eaves.min.y, eaves.max.y);
    let zc = (z0 + z1) / 2.0;
    let ridge_y = y + roof.ridge_height;
    let inset = match roof.kind {
        RoofType::Hip => ((z1 - z0) / 2.0).min((x1 - x0) / 2.0),
        _ => 0.0,
    };

    let back_left = Vec3::new(x0, y, z0);
    let back_right = Vec3::new(x1, y, z0);
    let front_right = Vec3::new(x1, y, z1);
    let front_left = Vec3::new(x0, y, z1);
    let ridge_left = Vec3::new(x0 + inset, ridge_y, zc);
    let ridge_right = Vec3::new(x1 - inset, ridge_y, zc);

    let mut builder = MeshBuilder::default();
    builder.quad(front_left, front_right, ridge_right, ridge_left);
    builder.quad(back_right, back_left, ridge_left, ridge_right);
    // gable ends, or hipped ends when the ridge is inset
    builder.tri(front_right, back_right, ridge_right);
    builder.tri(back_left, front_left, ridge_left);
    // soffit
    builder.quad(back_left, back_right, front_right, front_left);
    builder.build()
}
