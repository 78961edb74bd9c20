/// Per-frame geometry pipeline
///
/// Runs the fixed stage sequence over the mesh once per tick: world
/// transform, back-face cull, shading, view transform, near-plane clip,
/// projection, screen mapping, painter's depth sort, screen-bound clip.
/// The output is a draw list of screen-space triangles for the rasterizer.
use crate::clip::clip_against_plane;
use crate::geometry::{Mesh, Triangle};
use crate::matrix::Mat4;
use crate::shading;
use crate::vector::Vec4;

/// Default vertical field of view (90 degrees).
pub const DEFAULT_FOV: f32 = std::f32::consts::FRAC_PI_2;
const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;

/// Distance the mesh is pushed out along +z by the world transform.
const WORLD_DISTANCE: f32 = 5.0;

const MOVE_SPEED: f32 = 8.0;
const TURN_SPEED: f32 = 2.0;

/// Fixed directional light, pointing out of the screen toward the mesh.
const LIGHT_DIRECTION: Vec4 = Vec4 {
    x: 0.0,
    y: 0.0,
    z: -1.0,
    w: 0.0,
};

/// Directional key/button states for one tick, supplied by the input
/// collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

/// Camera position and yaw. The look direction is derived from yaw each
/// frame rather than stored.
#[derive(Debug, Clone, Copy)]
pub struct CameraState {
    pub position: Vec4,
    pub yaw: f32,
}

impl CameraState {
    pub fn new() -> Self {
        Self {
            position: Vec4::point(0.0, 0.0, 0.0),
            yaw: 0.0,
        }
    }

    /// Unit look direction: +z rotated about y by the current yaw.
    pub fn look_direction(&self) -> Vec4 {
        Mat4::rotation_y(self.yaw).transform(Vec4::direction(0.0, 0.0, 1.0))
    }

    /// Apply one tick of input-driven velocity to position and yaw.
    fn integrate(&mut self, elapsed: f32, input: &InputState) {
        let step = MOVE_SPEED * elapsed;
        if input.up {
            self.position.y += step;
        }
        if input.down {
            self.position.y -= step;
        }
        if input.left {
            self.position.x -= step;
        }
        if input.right {
            self.position.x += step;
        }
        if input.turn_left {
            self.yaw -= TURN_SPEED * elapsed;
        }
        if input.turn_right {
            self.yaw += TURN_SPEED * elapsed;
        }
        let stride = self.look_direction() * step;
        if input.forward {
            self.position = self.position + stride;
        }
        if input.backward {
            self.position = self.position - stride;
        }
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}

/// The frame pipeline orchestrator. Owns the mesh, the projection matrix,
/// and the camera; everything else is per-frame transient.
pub struct Pipeline {
    mesh: Mesh,
    projection: Mat4,
    width: usize,
    height: usize,
    camera: CameraState,
    theta: f32,
    spin: bool,
}

impl Pipeline {
    pub fn new(mesh: Mesh, width: usize, height: usize) -> Self {
        Self::with_fov(mesh, width, height, DEFAULT_FOV)
    }

    /// Like [`Pipeline::new`] with an explicit vertical field of view in
    /// radians.
    pub fn with_fov(mesh: Mesh, width: usize, height: usize, fov: f32) -> Self {
        let aspect = height as f32 / width as f32;
        log::info!(
            "pipeline: {} triangles, {}x{} screen, fov {:.1} deg",
            mesh.triangles.len(),
            width,
            height,
            fov.to_degrees()
        );
        Self {
            mesh,
            projection: Mat4::projection(fov, aspect, NEAR, FAR),
            width,
            height,
            camera: CameraState::new(),
            theta: 0.0,
            spin: true,
        }
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Freeze or resume the world-transform spin.
    pub fn set_spin(&mut self, spin: bool) {
        self.spin = spin;
    }

    /// Produce the depth-ordered, screen-clipped draw list for one frame.
    pub fn render_frame(&mut self, elapsed: f32, input: &InputState) -> Vec<Triangle> {
        self.camera.integrate(elapsed, input);
        if self.spin {
            self.theta += elapsed;
        }

        let world = Mat4::rotation_z(self.theta)
            * Mat4::rotation_x(self.theta)
            * Mat4::translation(0.0, 0.0, WORLD_DISTANCE);

        let look = self.camera.look_direction();
        let target = self.camera.position + look;
        let view = Mat4::look_at(self.camera.position, target, Vec4::UP).quick_inverse();

        let mut draw_list: Vec<Triangle> = Vec::new();

        for tri in &self.mesh.triangles {
            let mut transformed = *tri;
            for v in &mut transformed.vertices {
                *v = world.transform(*v);
            }

            // Cull before spending any further stage on the triangle.
            let normal = transformed.normal();
            let camera_ray = transformed.vertices[0] - self.camera.position;
            if normal.dot(camera_ray) >= 0.0 {
                continue;
            }

            transformed.shade = shading::quantize(shading::light_intensity(LIGHT_DIRECTION, normal));

            for v in &mut transformed.vertices {
                *v = view.transform(*v);
            }

            // Near-plane clip guarantees w > 0 at the perspective divide.
            let near_clipped = clip_against_plane(
                Vec4::point(0.0, 0.0, NEAR),
                Vec4::direction(0.0, 0.0, 1.0),
                &transformed,
            );
            let mut survivors = Vec::new();
            near_clipped.push_onto(&mut survivors);

            for mut clipped in survivors {
                for v in &mut clipped.vertices {
                    let projected = self.projection.transform(*v);
                    let mut mapped = projected / projected.w;
                    mapped.w = 1.0;
                    mapped.x += 1.0;
                    mapped.y += 1.0;
                    mapped.x *= 0.5 * self.width as f32;
                    mapped.y *= 0.5 * self.width as f32;
                    *v = mapped;
                }
                draw_list.push(clipped);
            }
        }

        // Painter's sort: farthest first so nearer triangles overdraw.
        draw_list.sort_by(|a, b| {
            b.average_depth()
                .partial_cmp(&a.average_depth())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut out = Vec::with_capacity(draw_list.len());
        for tri in draw_list {
            self.clip_to_screen_bounds(tri, &mut out);
        }
        out
    }

    /// Worklist clip against the four screen edges, in fixed order: top,
    /// bottom, left, right. Each plane is applied to every triangle in the
    /// list before the next plane starts.
    fn clip_to_screen_bounds(&self, triangle: Triangle, out: &mut Vec<Triangle>) {
        let w = self.width as f32;
        let h = self.height as f32;
        let planes = [
            (Vec4::point(0.0, 0.0, 0.0), Vec4::direction(0.0, 1.0, 0.0)),
            (Vec4::point(0.0, h - 1.0, 0.0), Vec4::direction(0.0, -1.0, 0.0)),
            (Vec4::point(0.0, 0.0, 0.0), Vec4::direction(1.0, 0.0, 0.0)),
            (Vec4::point(w - 1.0, 0.0, 0.0), Vec4::direction(-1.0, 0.0, 0.0)),
        ];

        let mut worklist = vec![triangle];
        for (point, normal) in planes {
            let mut next = Vec::with_capacity(worklist.len());
            for tri in worklist {
                clip_against_plane(point, normal, &tri).push_onto(&mut next);
            }
            worklist = next;
        }
        out.extend(worklist);
    }
}
