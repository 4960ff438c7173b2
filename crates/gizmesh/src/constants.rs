//! Gizmo shape and interaction constants
//!
//! All lengths are in gizmo units: one unit equals the handle scale chosen
//! by [`crate::config::HandleSizing`].

/// Handle shape dimensions
pub mod gizmo {
    /// Distance from the center where translation arrows and scale shafts start
    pub const SHAFT_START: f32 = 0.25;
    /// Arrow shaft radius
    pub const SHAFT_RADIUS: f32 = 0.05;
    /// Where the arrow head begins
    pub const HEAD_START: f32 = 1.8;
    /// Arrow head base radius
    pub const HEAD_RADIUS: f32 = 0.10;
    /// Total arrow length
    pub const ARROW_LENGTH: f32 = 2.0;
    /// Number of slices for lathed geometry
    pub const SEGMENTS: u32 = 16;
    /// Hit test cylinder radius for translation arrows
    pub const ARROW_HIT_RADIUS: f32 = 0.1;

    /// Inner corner of the planar translation quads
    pub const PLANE_MIN: f32 = 0.25;
    /// Outer corner of the planar translation quads
    pub const PLANE_MAX: f32 = 0.75;
    /// Half thickness of the rendered plane quads
    pub const PLANE_HALF_THICKNESS: f32 = 0.01;

    /// Half extent of the view-plane translation box at the center
    pub const CENTER_HALF_EXTENT: f32 = 0.1;

    /// Rotation ring radius (center line of the tube)
    pub const RING_RADIUS: f32 = 1.05;
    /// Rotation ring tube radius
    pub const RING_TUBE_RADIUS: f32 = 0.05;
    /// Number of segments around the ring
    pub const RING_SEGMENTS: u32 = 48;
    /// Number of segments around the tube cross-section
    pub const RING_TUBE_SEGMENTS: u32 = 8;
    /// Hit test tube radius for rotation rings
    pub const RING_HIT_RADIUS: f32 = 0.08;

    /// End of the scale handle shaft
    pub const SCALE_SHAFT_END: f32 = 1.0;
    /// End of the scale handle cube
    pub const SCALE_TIP_END: f32 = 1.25;
    /// Half extent of the scale handle cube (and its hit box)
    pub const SCALE_TIP_HALF_EXTENT: f32 = 0.1;
}

/// Interaction thresholds
pub mod interaction {
    /// Smallest scale component a scale drag may produce
    pub const MIN_SCALE: f32 = 1e-3;
    /// Ray/plane denominators below this are treated as parallel
    pub const PARALLEL_EPSILON: f32 = 1e-6;
    /// Sphere tracing stops when the distance falls below this
    pub const TORUS_HIT_EPSILON: f32 = 1e-4;
    /// Smallest sphere tracing step, so grazing rays reach the surface
    pub const TORUS_MIN_STEP: f32 = 1e-3;
    /// Sphere tracing iteration limit
    pub const TORUS_MAX_STEPS: u32 = 256;
}

/// Default handle colors (RGBA)
pub mod colors {
    /// X-axis color (red)
    pub const X_AXIS: [f32; 4] = [1.0, 0.2, 0.2, 1.0];
    /// Y-axis color (green)
    pub const Y_AXIS: [f32; 4] = [0.2, 1.0, 0.2, 1.0];
    /// Z-axis color (blue)
    pub const Z_AXIS: [f32; 4] = [0.2, 0.2, 1.0, 1.0];
    /// View-plane handle color (gray)
    pub const VIEW: [f32; 4] = [0.7, 0.7, 0.7, 1.0];
    /// Hovered element color
    pub const HOVER: [f32; 4] = [1.0, 1.0, 0.6, 1.0];
    /// Dragged element color
    pub const ACTIVE: [f32; 4] = [1.0, 0.85, 0.1, 1.0];
    /// Alpha applied to planar translation quads
    pub const PLANE_ALPHA: f32 = 0.6;
}
