//! Render back-ends
//!
//! The simulation hands each tick's `FrameSnapshot` to a `Renderer`, which
//! turns it into vertex lists ready for a GPU upload. Two interchangeable
//! back-ends exist (procedural vector art and sprite sheet); the choice is
//! made once at composition time and the core never sees it.

pub mod shapes;
pub mod sprite;
pub mod vector;
pub mod vertex;

pub use sprite::SpriteBackend;
pub use vector::VectorBackend;
pub use vertex::{SpriteVertex, Vertex};

use crate::assets::Assets;
use crate::driver::RenderSink;
use crate::settings::BackendKind;
use crate::sim::{FrameSnapshot, World};

/// Vertices for one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    /// Flat-colored triangles
    pub solid: Vec<Vertex>,
    /// Textured triangles (sampled from the atlas)
    pub textured: Vec<SpriteVertex>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.solid.clear();
        self.textured.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.solid.is_empty() && self.textured.is_empty()
    }

    /// Raw bytes of the solid vertex buffer
    pub fn solid_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.solid)
    }

    /// Raw bytes of the textured vertex buffer
    pub fn textured_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.textured)
    }
}

/// Turns a snapshot into vertices
pub trait RenderBackend {
    fn name(&self) -> &'static str;
    fn build(&mut self, frame: &FrameSnapshot, out: &mut DrawList);
}

/// Render sink over a boxed back-end; keeps the latest draw list
pub struct Renderer {
    backend: Box<dyn RenderBackend>,
    draw_list: DrawList,
    frames_presented: u64,
}

impl Renderer {
    pub fn new(backend: Box<dyn RenderBackend>) -> Self {
        Self {
            backend,
            draw_list: DrawList::default(),
            frames_presented: 0,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl RenderSink for Renderer {
    fn present(&mut self, frame: &FrameSnapshot) {
        self.draw_list.clear();
        self.backend.build(frame, &mut self.draw_list);
        self.frames_presented += 1;
    }
}

/// Compose the back-end named by `kind`
pub fn create_renderer(kind: BackendKind, world: &World, assets: &Assets) -> Renderer {
    let backend: Box<dyn RenderBackend> = match kind {
        BackendKind::Vector => Box::new(VectorBackend::new(world.clone())),
        BackendKind::Sprite => Box::new(SpriteBackend::new(world.clone(), assets.clone())),
    };
    Renderer::new(backend)
}
