//! A steady-hand puzzle for the browser: drag one continuous stroke from
//! marker A to marker B across a field of scattered obstacles without
//! touching any of them.
//!
//! The crate compiles to WebAssembly. Everything below [`engine::Engine`]
//! is browser-free and tested natively; the engine owns the canvas element,
//! and [`boot`] wires DOM events into it. Each reset rescatters the whole
//! board, so no two rounds play the same.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`boot`] | Browser entry point: element lookup and event wiring |
//! | [`engine`] | Canvas-owning engine over the testable [`engine::EngineCore`] |
//! | [`session`] | Stroke lifecycle state machine and the per-round record |
//! | [`scatter`] | Rejection-sampled obstacle placement |
//! | [`hit`] | Segment-versus-obstacle intersection tests |
//! | [`obstacle`] | Obstacle model, JSON wire form, and overlap predicates |
//! | [`render`] | Frame drawing against the 2D context |
//! | [`viewport`] | Point type and CSS-pixel to logical-canvas mapping |
//! | [`consts`] | Board geometry and quota constants |

pub mod boot;
pub mod consts;
pub mod engine;
pub mod hit;
pub mod obstacle;
pub mod render;
pub mod scatter;
pub mod session;
pub mod viewport;
