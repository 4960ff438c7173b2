//! gizmesh
//!
//! Immediate-mode 3D transform gizmos: pointer-ray hit testing, drag math and
//! procedural handle meshes.
//!
//! # Architecture
//!
//! A frame runs `begin → handle::* → end`:
//!
//! - [`GizmoSystem::begin`] stores the camera pose, pointer ray and button
//! - [`handle::translation`], [`handle::rotation`] and [`handle::scale`] each
//!   run the [`interaction::InteractionMap`] state machine for one id and
//!   write the dragged result into the caller's [`Trs`]
//! - [`GizmoSystem::end`] assembles every handle drawn this frame into one
//!   vertex buffer and one index buffer ([`GizmoBuffers`])
//!
//! # Module Structure
//!
//! ```text
//! gizmesh/
//! ├── geometry/        # Procedural meshes (arrow, ring, mace, quad, box)
//! ├── interaction/     # State machine and delta rules
//! ├── buffer.rs        # GizmoVertex, DrawCommand, FrameAssembler
//! ├── collision.rs     # Ray vs cylinder/quad/box/torus, element picking
//! ├── config.rs        # GizmoConfig (RON)
//! ├── constants.rs     # Shape dimensions, thresholds, colors
//! ├── element.rs       # HandleKind and Element
//! ├── frame.rs         # FrameState and GizmoFrame
//! ├── handle.rs        # Immediate-mode handle calls
//! ├── hash.rs          # FNV-1a and HandleId
//! └── system.rs        # GizmoSystem
//! ```

pub mod buffer;
pub mod collision;
pub mod config;
pub mod constants;
pub mod element;
pub mod frame;
pub mod geometry;
pub mod handle;
pub mod hash;
pub mod interaction;
pub mod system;

pub use buffer::{GizmoBuffers, GizmoVertex, Highlight};
pub use config::{ConfigError, GizmoColors, GizmoConfig, HandleSizing, SnapConfig};
pub use element::{Element, HandleKind};
pub use gizmesh_math::{Ray, RigidTransform, Trs};
pub use hash::{HandleId, hash_fnv1a};
pub use system::GizmoSystem;
