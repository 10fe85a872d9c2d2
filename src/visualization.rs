//! 3D view of the puzzle using kiss3d.
//!
//! Every piece is a group node holding one mesh per sticker color, built from
//! the vertex range of the piece's home slot. Each frame the engine is ticked
//! and every group is rotated by the transform the engine reports for the
//! slot its piece currently occupies.

use cgmath::Matrix4;
use kiss3d::prelude::*;
use kiss3d::procedural::RenderMesh;
use log::warn;

use octahedron::engine::Engine;
use octahedron::geometry::{self, StickerColor};
use octahedron::pieces::Piece;
use octahedron::PuzzleView;

use crate::keymap::{self, Binding};

const TITLE: &str = "Octahedron - [Q E C Z W D X A] faces, [T..M] vertices, [Shift] reverse, [R] reset";

/// Returns the display color for a sticker.
fn sticker_color(color: StickerColor) -> Color {
    let [r, g, b] = color.rgb();
    Color::new(r, g, b, 1.0)
}

/// Converts the rotation part of an engine transform to a scene rotation.
fn to_rotation(transform: Matrix4<f32>) -> Quat {
    let column = |c: usize| Vec3::new(transform[c][0], transform[c][1], transform[c][2]);
    Quat::from_mat3(&Mat3::from_cols(column(0), column(1), column(2))).normalize()
}

/// Splits the triangles of a piece's home slot into one vertex list per
/// sticker color.
fn sticker_meshes(piece: Piece) -> Vec<(StickerColor, Vec<Vec3>)> {
    let mut meshes: Vec<(StickerColor, Vec<Vec3>)> = Vec::new();
    for triangle in geometry::triangles(piece.home()) {
        let corners = triangle.vertices.map(|p| Vec3::new(p.x, p.y, p.z));
        match meshes.iter_mut().find(|(color, _)| *color == triangle.color) {
            Some((_, coords)) => coords.extend_from_slice(&corners),
            None => meshes.push((triangle.color, corners.to_vec())),
        }
    }
    meshes
}

/// A rendered piece.
struct RenderedPiece {
    /// Group node carrying the piece's rotation.
    node: SceneNode3d,
    piece: Piece,
}

/// Adds every piece to the scene at its solved position.
fn build_scene(scene: &mut SceneNode3d) -> Vec<RenderedPiece> {
    Piece::iter()
        .map(|piece| {
            let mut node = scene.add_group();
            for (color, coords) in sticker_meshes(piece) {
                node.add_render_mesh(RenderMesh::new(coords, None, None, None), Vec3::ONE)
                    .set_color(sticker_color(color))
                    .enable_backface_culling(false);
            }
            RenderedPiece { node, piece }
        })
        .collect()
}

/// Displays the puzzle in an interactive 3D viewer.
pub fn display(engine: Engine, ticks_per_frame: u32) {
    pollster::block_on(display_async(engine, ticks_per_frame));
}

async fn display_async(mut engine: Engine, ticks_per_frame: u32) {
    let mut window = Window::new(TITLE).await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(12.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(8.0, 8.0, 8.0));

    let mut pieces = build_scene(&mut scene);
    let mut reverse_held = false;

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                match (key, action) {
                    (Key::LShift, Action::Press) => reverse_held = true,
                    (Key::LShift, Action::Release) => reverse_held = false,
                    (_, Action::Press) => match keymap::binding(key) {
                        Some(Binding::Turn(code)) => {
                            let direction = if reverse_held { -1 } else { 1 };
                            if let Err(e) = engine.enqueue(code, direction) {
                                warn!("ignoring {key:?}: {e}");
                            }
                        }
                        Some(Binding::Reset) => engine.enqueue_reset(),
                        None => {}
                    },
                    _ => {}
                }
            }
        }

        for _ in 0..ticks_per_frame {
            engine.tick();
        }

        for rendered in &mut pieces {
            let slot = engine.location(rendered.piece);
            rendered
                .node
                .set_rotation(to_rotation(engine.current_transform(slot)));
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sticker_meshes_cover_every_triangle() {
        let triangles: usize = Piece::iter()
            .flat_map(sticker_meshes)
            .map(|(_, coords)| {
                assert_eq!(coords.len() % 3, 0);
                coords.len() / 3
            })
            .sum();
        assert_eq!(triangles, geometry::TRIANGLE_COUNT);
    }

    #[test]
    fn test_tip_meshes_split_by_color() {
        let meshes = sticker_meshes(Piece(0));
        let colors: Vec<StickerColor> = meshes.iter().map(|(color, _)| *color).collect();
        for (i, color) in colors.iter().enumerate() {
            assert!(!colors[i + 1..].contains(color), "{color:?} split across meshes");
        }
        let triangles: usize = meshes.iter().map(|(_, coords)| coords.len() / 3).sum();
        assert_eq!(triangles, 4);
    }
}
