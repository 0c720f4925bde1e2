use dssc_protocol::params::ALPHA_MASK;
use dssc_protocol::{RenderParams, Vertex, VERTEX_COUNT};

use crate::texture::{TextureMode, VertexSink};

/// Highest polygon alpha the hardware accepts
pub const MAX_ALPHA: u8 = ALPHA_MASK;

/// Scale from screen pixels to the 3D engine's vertex units
const VERTEX_SCALE_X: i32 = 48;
const VERTEX_SCALE_Y: i32 = 64;

/// One step of user input, already decoded from the key state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectVertex(usize),
    /// Move the selected vertex by a screen-pixel offset
    MoveSelected { dx: i32, dy: i32 },
    ToggleAntiAlias,
    ToggleEdgeMark,
    ToggleWireframe,
    ToggleShape,
    RaiseAlpha,
    LowerAlpha,
    NextTexture,
    PrevTexture,
}

/// Complete render configuration of the test scene.
///
/// Never mutated in place; [`RenderState::apply`] returns the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    positions: [(i32, i32); VERTEX_COUNT],
    selected: usize,
    anti_alias: bool,
    edge_mark: bool,
    wireframe: bool,
    quad: bool,
    texture: TextureMode,
    alpha: u8,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            positions: [(64, 32), (64, 160), (192, 160), (192, 32)],
            selected: 0,
            anti_alias: false,
            edge_mark: false,
            wireframe: false,
            quad: true,
            texture: TextureMode::default(),
            alpha: MAX_ALPHA,
        }
    }
}

impl RenderState {
    #[must_use]
    pub fn apply(self, action: Action) -> Self {
        let mut next = self;
        match action {
            Action::SelectVertex(index) if index < VERTEX_COUNT => next.selected = index,
            Action::SelectVertex(_) => {}
            Action::MoveSelected { dx, dy } => {
                let (x, y) = &mut next.positions[self.selected];
                *x = x.saturating_add(dx);
                *y = y.saturating_add(dy);
            }
            Action::ToggleAntiAlias => next.anti_alias = !self.anti_alias,
            Action::ToggleEdgeMark => next.edge_mark = !self.edge_mark,
            Action::ToggleWireframe => next.wireframe = !self.wireframe,
            Action::ToggleShape => next.quad = !self.quad,
            Action::RaiseAlpha => next.alpha = (self.alpha + 1).min(MAX_ALPHA),
            Action::LowerAlpha => next.alpha = self.alpha.saturating_sub(1),
            Action::NextTexture => next.texture = self.texture.next(),
            Action::PrevTexture => next.texture = self.texture.prev(),
        }
        next
    }

    /// Screen position of vertex `index`, `None` past the last vertex
    pub fn position(&self, index: usize) -> Option<(i32, i32)> {
        self.positions.get(index).copied()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn anti_alias(&self) -> bool {
        self.anti_alias
    }

    pub fn edge_mark(&self) -> bool {
        self.edge_mark
    }

    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    pub fn quad(&self) -> bool {
        self.quad
    }

    pub fn texture(&self) -> TextureMode {
        self.texture
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Alpha submitted with the polygon; zero draws only the outline
    pub fn polygon_alpha(&self) -> u8 {
        if self.wireframe {
            0
        } else {
            self.alpha
        }
    }

    /// Number of vertices submitted for the current shape
    pub fn drawn_vertices(&self) -> usize {
        if self.quad {
            4
        } else {
            3
        }
    }

    /// Vertex position in engine units, as submitted to the geometry engine.
    ///
    /// Saturates at the `i32` range for vertices moved far off screen.
    pub fn scene_position(&self, index: usize) -> Option<(i32, i32)> {
        self.position(index).map(to_engine_units)
    }

    /// Submit the shape: attributes from the texture mode, then the
    /// position, for each drawn vertex
    pub fn submit(&self, sink: &mut impl VertexSink) {
        let setup = self.texture.setup();
        let drawn = self.positions.iter().take(self.drawn_vertices());
        for (index, &position) in drawn.enumerate() {
            setup.apply_vertex(index, sink);
            let (x, y) = to_engine_units(position);
            sink.position(x, y, 0);
        }
    }

    /// Snapshot stored alongside a capture
    pub fn params(&self) -> RenderParams {
        RenderParams {
            anti_alias: self.anti_alias,
            edge_mark: self.edge_mark,
            wireframe: self.wireframe,
            quad: self.quad,
            tex_mode: self.texture.index(),
            alpha: self.alpha,
            vertices: self.positions.map(|(x, y)| Vertex::new(x, y, 0)),
        }
    }
}

fn to_engine_units((x, y): (i32, i32)) -> (i32, i32) {
    (x.saturating_mul(VERTEX_SCALE_X), y.saturating_mul(VERTEX_SCALE_Y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Rgb888;

    fn run(actions: &[Action]) -> RenderState {
        actions
            .iter()
            .fold(RenderState::default(), |state, &action| state.apply(action))
    }

    #[test]
    fn test_default_scene() {
        let state = RenderState::default();
        let params = state.params();

        assert!(params.quad);
        assert_eq!(params.alpha, 31);
        assert_eq!(params.tex_mode, 0);
        assert_eq!(params.vertices[2], Vertex::new(192, 160, 0));
        assert_eq!(state.drawn_vertices(), 4);
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let before = RenderState::default();
        let after = before.apply(Action::ToggleAntiAlias);

        assert!(!before.anti_alias());
        assert!(after.anti_alias());
    }

    #[test]
    fn test_moves_only_affect_selected_vertex() {
        let state = run(&[
            Action::SelectVertex(2),
            Action::MoveSelected { dx: -5, dy: 3 },
            Action::MoveSelected { dx: 1, dy: 0 },
        ]);

        assert_eq!(state.position(2), Some((188, 163)));
        assert_eq!(state.position(0), Some((64, 32)));
        assert_eq!(state.position(4), None);
        assert_eq!(state.selected(), 2);
    }

    #[test]
    fn test_invalid_selection_is_ignored() {
        let state = run(&[Action::SelectVertex(1), Action::SelectVertex(4)]);
        assert_eq!(state.selected(), 1);
    }

    #[test]
    fn test_alpha_saturates() {
        let state = run(&[Action::RaiseAlpha, Action::RaiseAlpha]);
        assert_eq!(state.alpha(), 31);

        let state = (0..40).fold(state, |s, _| s.apply(Action::LowerAlpha));
        assert_eq!(state.alpha(), 0);
        assert_eq!(state.apply(Action::RaiseAlpha).alpha(), 1);
    }

    #[test]
    fn test_texture_cycles_through_all_modes() {
        let state = run(&[Action::PrevTexture]);
        assert_eq!(state.texture(), TextureMode::PlainWhite);
        assert_eq!(state.params().tex_mode, 7);

        let state = (0..8).fold(state, |s, _| s.apply(Action::NextTexture));
        assert_eq!(state.texture(), TextureMode::PlainWhite);
    }

    #[test]
    fn test_wireframe_and_shape() {
        let state = run(&[Action::ToggleWireframe, Action::ToggleShape]);

        assert_eq!(state.polygon_alpha(), 0);
        assert_eq!(state.alpha(), 31);
        assert_eq!(state.drawn_vertices(), 3);
        assert!(!state.params().quad);
        assert!(state.params().wireframe);
    }

    #[test]
    fn test_scene_position_scaling() {
        let state = RenderState::default();
        assert_eq!(state.scene_position(1), Some((64 * 48, 160 * 64)));
        assert_eq!(state.scene_position(4), None);
    }

    #[test]
    fn test_far_off_screen_vertex_saturates_when_submitted() {
        let state = run(&[
            Action::MoveSelected { dx: 50_000_000, dy: 0 },
            Action::SelectVertex(1),
            Action::MoveSelected { dx: i32::MIN, dy: i32::MIN },
        ]);
        assert_eq!(state.params().vertices[0].x, 50_000_064);
        assert_eq!(state.position(1), Some((i32::MIN + 64, i32::MIN + 160)));

        let mut sink = Positions::default();
        state.submit(&mut sink);

        assert_eq!(sink.0[0], (i32::MAX, 32 * 64));
        assert_eq!(sink.0[1], (i32::MIN, i32::MIN));
        assert_eq!(sink.0[2], (192 * 48, 160 * 64));
        assert_eq!(state.scene_position(0), Some((i32::MAX, 32 * 64)));
    }

    #[derive(Default)]
    struct Positions(alloc::vec::Vec<(i32, i32)>);

    impl VertexSink for Positions {
        fn tex_coord(&mut self, _s: i32, _t: i32) {}

        fn color(&mut self, _color: Rgb888) {}

        fn position(&mut self, x: i32, y: i32, _z: i32) {
            self.0.push((x, y));
        }
    }

    #[derive(Default)]
    struct Trace(alloc::vec::Vec<&'static str>, usize);

    impl VertexSink for Trace {
        fn tex_coord(&mut self, _s: i32, _t: i32) {
            self.0.push("uv");
        }

        fn color(&mut self, _color: Rgb888) {
            self.0.push("color");
        }

        fn position(&mut self, _x: i32, _y: i32, _z: i32) {
            self.0.push("pos");
            self.1 += 1;
        }
    }

    #[test]
    fn test_submit_triangle_with_vertex_colors() {
        let state = run(&[Action::ToggleShape, Action::PrevTexture, Action::PrevTexture]);
        assert_eq!(state.texture(), TextureMode::ColorVertices);

        let mut trace = Trace::default();
        state.submit(&mut trace);

        assert_eq!(trace.1, 3);
        assert_eq!(trace.0, ["color", "pos", "color", "pos", "color", "pos"]);
    }

    #[test]
    fn test_submit_textured_quad() {
        let mut trace = Trace::default();
        RenderState::default().submit(&mut trace);

        assert_eq!(trace.1, 4);
        assert!(trace.0.iter().step_by(2).all(|&a| a == "uv"));
    }
}
