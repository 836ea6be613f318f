//! Tests for the half-edge mesh.

use super::*;
use approx::assert_relative_eq;

/// Two triangles sharing the diagonal of the unit square in z = 0, stitched
/// along it. The outer edges stay unreflected.
fn split_square(mesh: &mut HullMesh) -> (FaceId, FaceId, [VertexId; 4]) {
    let v = [
        mesh.add_vertex(Vec3::new(0.0, 0.0, 0.0), 0),
        mesh.add_vertex(Vec3::new(1.0, 0.0, 0.0), 1),
        mesh.add_vertex(Vec3::new(1.0, 1.0, 0.0), 2),
        mesh.add_vertex(Vec3::new(0.0, 1.0, 0.0), 3),
    ];
    let a = mesh.create_triangle(v[0], v[1], v[2], 0.0);
    let b = mesh.create_triangle(v[0], v[2], v[3], 0.0);
    let ab = mesh.find_edge(a, v[2], v[0]).unwrap();
    let ba = mesh.find_edge(b, v[0], v[2]).unwrap();
    mesh.set_opposite(ab, ba);
    (a, b, v)
}

/// Downward square pyramid over the unit square in z = 0, apex at the
/// index 4 vertex. The top is either one quad or the two triangles of
/// `split_square`. Returns the top faces first, then the sides.
fn pyramid(mesh: &mut HullMesh, split_top: bool) -> (Vec<FaceId>, Vec<VertexId>) {
    let v: Vec<_> = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.5, 0.5, -1.0),
    ]
    .iter()
    .enumerate()
    .map(|(i, &p)| mesh.add_vertex(p, i))
    .collect();

    let mut faces = if split_top {
        vec![
            mesh.create_triangle(v[0], v[1], v[2], 0.0),
            mesh.create_triangle(v[0], v[2], v[3], 0.0),
        ]
    } else {
        vec![mesh.create_polygon(&[v[0], v[1], v[2], v[3]]).unwrap()]
    };
    for i in 0..4 {
        faces.push(mesh.create_triangle(v[(i + 1) % 4], v[i], v[4], 0.0));
    }
    stitch(mesh, &faces);
    (faces, v)
}

/// Triangular prism between z = 0 and z = 1. Returns the faces as
/// `[top, bottom, side01, side12, side20]`.
fn prism(mesh: &mut HullMesh) -> Vec<FaceId> {
    let xy = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
    let t: Vec<_> = xy
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| mesh.add_vertex(Vec3::new(x, y, 1.0), i))
        .collect();
    let b: Vec<_> = xy
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| mesh.add_vertex(Vec3::new(x, y, 0.0), i + 3))
        .collect();
    let faces = vec![
        mesh.create_triangle(t[0], t[1], t[2], 0.0),
        mesh.create_triangle(b[0], b[2], b[1], 0.0),
        mesh.create_polygon(&[t[1], t[0], b[0], b[1]]).unwrap(),
        mesh.create_polygon(&[t[2], t[1], b[1], b[2]]).unwrap(),
        mesh.create_polygon(&[t[0], t[2], b[2], b[0]]).unwrap(),
    ];
    stitch(mesh, &faces);
    faces
}

/// Closed tetrahedron with every edge reflected.
fn tetrahedron(mesh: &mut HullMesh) -> Vec<FaceId> {
    let v = [
        mesh.add_vertex(Vec3::new(0.0, 0.0, 0.0), 0),
        mesh.add_vertex(Vec3::new(1.0, 0.0, 0.0), 1),
        mesh.add_vertex(Vec3::new(0.0, 1.0, 0.0), 2),
        mesh.add_vertex(Vec3::new(0.0, 0.0, 1.0), 3),
    ];
    let faces = vec![
        mesh.create_triangle(v[0], v[2], v[1], 0.0),
        mesh.create_triangle(v[0], v[1], v[3], 0.0),
        mesh.create_triangle(v[1], v[2], v[3], 0.0),
        mesh.create_triangle(v[2], v[0], v[3], 0.0),
    ];
    stitch(mesh, &faces);
    faces
}

fn stitch(mesh: &mut HullMesh, faces: &[FaceId]) {
    for &f in faces {
        for he in mesh.face_half_edges(f).collect::<Vec<_>>() {
            let (t, h) = (mesh.tail(he), mesh.head(he));
            for &g in faces {
                if g != f {
                    if let Some(opp) = mesh.find_edge(g, h, t) {
                        mesh.set_opposite(he, opp);
                    }
                }
            }
        }
    }
}

#[test]
fn test_vertex_list_add_and_delete() {
    let mut mesh = HullMesh::new();
    let ids: Vec<_> = (0..4)
        .map(|i| mesh.add_vertex(Vec3::splat(i as f64), i))
        .collect();
    let mut list = VertexList::new();
    assert!(list.is_empty());
    for &id in &ids {
        list.add(mesh.vertices_mut(), id);
    }
    assert_eq!(list.first(), Some(ids[0]));

    list.delete(mesh.vertices_mut(), ids[0]);
    list.delete(mesh.vertices_mut(), ids[2]);
    let remaining: Vec<_> = mesh.vertex_chain(list.first()).collect();
    assert_eq!(remaining, vec![ids[1], ids[3]]);

    list.delete_range(mesh.vertices_mut(), ids[1], ids[3]);
    assert!(list.is_empty());
}

#[test]
fn test_vertex_list_insert_before_and_add_all() {
    let mut mesh = HullMesh::new();
    let ids: Vec<_> = (0..5)
        .map(|i| mesh.add_vertex(Vec3::ZERO, i))
        .collect();
    let mut list = VertexList::new();
    list.add(mesh.vertices_mut(), ids[0]);
    list.add(mesh.vertices_mut(), ids[2]);
    list.insert_before(mesh.vertices_mut(), ids[1], ids[2]);
    list.insert_before(mesh.vertices_mut(), ids[4], ids[0]);
    let order: Vec<_> = mesh.vertex_chain(list.first()).collect();
    assert_eq!(order, vec![ids[4], ids[0], ids[1], ids[2]]);

    // move the run 0..=1 into a second list
    let mut other = VertexList::new();
    other.add(mesh.vertices_mut(), ids[3]);
    list.delete_range(mesh.vertices_mut(), ids[0], ids[1]);
    mesh.vertex_mut(ids[1]).next = None;
    other.add_all(mesh.vertices_mut(), ids[0]);
    let moved: Vec<_> = mesh.vertex_chain(other.first()).collect();
    assert_eq!(moved, vec![ids[3], ids[0], ids[1]]);
    let kept: Vec<_> = mesh.vertex_chain(list.first()).collect();
    assert_eq!(kept, vec![ids[4], ids[2]]);
}

#[test]
fn test_face_list_order() {
    let mut mesh = HullMesh::new();
    let faces = tetrahedron(&mut mesh);
    let mut list = FaceList::new();
    assert!(list.is_empty());
    for &f in faces.iter().rev() {
        list.add(mesh.faces_mut(), f);
    }
    let walked: Vec<_> = mesh.face_chain(list.first()).collect();
    assert_eq!(walked, faces.iter().rev().copied().collect::<Vec<_>>());
    list.clear();
    assert!(list.first().is_none());
}

#[test]
fn test_triangle_plane() {
    let mut mesh = HullMesh::new();
    let (a, _, _) = split_square(&mut mesh);
    let face = mesh.face(a);
    assert_eq!(face.num_verts, 3);
    assert_relative_eq!(face.normal.z, 1.0);
    assert_relative_eq!(face.area, 1.0);
    assert_relative_eq!(face.distance_to_plane(Vec3::new(5.0, 5.0, 2.0)), 2.0);
    assert_relative_eq!(face.centroid.x, 2.0 / 3.0);
}

#[test]
fn test_half_edge_ranges() {
    let mut mesh = HullMesh::new();
    let (a, _, v) = split_square(&mut mesh);
    let he0 = mesh.face(a).he0;
    assert_eq!(mesh.half_edge_loop(he0).count(), 3);
    let range: Vec<_> = mesh.half_edge_range(he0, mesh.prev(he0)).collect();
    assert_eq!(range.len(), 2);
    assert_eq!(mesh.head(he0), v[0]);
    assert_eq!(mesh.tail(he0), v[2]);
    assert_eq!(mesh.get_edge(a, 1), mesh.next(he0));
    assert_eq!(mesh.get_edge(a, -1), mesh.prev(he0));
    assert_eq!(mesh.get_edge(a, 3), he0);
    assert_eq!(mesh.face_label(a), "0 1 2");
}

#[test]
fn test_unreflected_edge_is_reported() {
    let mut mesh = HullMesh::new();
    let (a, _, _) = split_square(&mut mesh);
    let he = mesh.get_edge(a, 1);
    assert!(matches!(
        mesh.opposite(he),
        Err(crate::error::HullError::InternalInconsistency { .. })
    ));
    assert!(mesh.check_consistency(a).is_err());
}

#[test]
fn test_tetrahedron_is_consistent() {
    let mut mesh = HullMesh::new();
    let faces = tetrahedron(&mut mesh);
    for &f in &faces {
        let max_dist = mesh.check_consistency(f).unwrap();
        assert!(max_dist < 1e-12);
    }
    // outward normals: the inner point is behind every face
    let inside = Vec3::splat(0.1);
    for &f in &faces {
        assert!(mesh.face(f).distance_to_plane(inside) < 0.0);
    }
}

#[test]
fn test_merge_coplanar_triangles() {
    let mut mesh = HullMesh::new();
    let (faces, v) = pyramid(&mut mesh, true);
    let (a, b) = (faces[0], faces[1]);
    let shared = mesh.find_edge(a, v[2], v[0]).unwrap();
    let mut discarded = Vec::new();
    mesh.merge_adjacent_face(a, shared, &mut discarded).unwrap();

    assert_eq!(discarded, vec![b]);
    assert_eq!(mesh.face(b).mark, FaceMark::Deleted);
    assert_eq!(mesh.face(a).num_verts, 4);
    let loop_vertices: Vec<_> = mesh.face_vertices(a).collect();
    assert_eq!(loop_vertices.len(), 4);
    for &vtx in &v[..4] {
        assert!(loop_vertices.contains(&vtx));
    }
    assert!(mesh
        .face_half_edges(a)
        .all(|he| mesh.half_edge(he).face == a));
    assert_relative_eq!(mesh.face(a).area, 2.0);
    assert_relative_eq!(mesh.face(a).normal.z, 1.0);
    assert_relative_eq!(mesh.face(a).centroid.x, 0.5);
    for &f in faces.iter().filter(|&&f| f != b) {
        mesh.check_consistency(f).unwrap();
    }
}

#[test]
fn test_merge_collapses_redundant_vertices() {
    // Merging two prism sides leaves the shared top and bottom corners with
    // both remaining edges on a cap; the triangular caps are absorbed.
    let mut mesh = HullMesh::new();
    let faces = prism(&mut mesh);
    let (top, bottom, s1, s2, s3) = (faces[0], faces[1], faces[2], faces[3], faces[4]);
    let shared = mesh
        .face_half_edges(s1)
        .find(|&he| mesh.opposite_face(he).ok() == Some(s2))
        .unwrap();
    let mut discarded = Vec::new();
    mesh.merge_adjacent_face(s1, shared, &mut discarded).unwrap();

    assert_eq!(discarded, vec![s2, top, bottom]);
    assert_eq!(mesh.face(s1).num_verts, 4);
    assert!(mesh
        .face_half_edges(s1)
        .all(|he| mesh.opposite_face(he).unwrap() == s3));
    mesh.check_consistency(s1).unwrap();
    mesh.check_consistency(s3).unwrap();
    assert_relative_eq!(mesh.face(s1).normal.x, 1.0);
    assert_relative_eq!(mesh.face(s1).area, 2.0);
}

#[test]
fn test_triangulate_quad() {
    let mut mesh = HullMesh::new();
    let (faces, v) = pyramid(&mut mesh, false);
    let top = faces[0];
    for &f in &faces {
        mesh.check_consistency(f).unwrap();
    }

    let mut new_faces = FaceList::new();
    mesh.triangulate_face(top, &mut new_faces, 0.0).unwrap();
    let created: Vec<_> = mesh.face_chain(new_faces.first()).collect();
    assert_eq!(created.len(), 1);
    assert_eq!(mesh.face(top).num_verts, 3);
    mesh.check_consistency(top).unwrap();
    mesh.check_consistency(created[0]).unwrap();
    for &f in &faces[1..] {
        mesh.check_consistency(f).unwrap();
    }
    // both triangles are anchored at the first vertex
    assert_eq!(mesh.head(mesh.face(created[0]).he0), v[0]);
    assert_eq!(mesh.head(mesh.face(top).he0), v[0]);
    assert_relative_eq!(mesh.face(top).normal.z, 1.0);
    assert_relative_eq!(mesh.face(created[0]).normal.z, 1.0);

    // triangles are left alone
    let mut untouched = FaceList::new();
    mesh.triangulate_face(top, &mut untouched, 0.0).unwrap();
    assert!(untouched.is_empty());
}

#[test]
fn test_create_polygon_rejects_two_vertices() {
    let mut mesh = HullMesh::new();
    let a = mesh.add_vertex(Vec3::ZERO, 0);
    let b = mesh.add_vertex(Vec3::X, 1);
    assert!(mesh.create_polygon(&[a, b]).is_err());
}
