//! Window data model: geometry, flags, lifecycle state, and the per-window record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Stable, monotonically-assigned identifier for an open window.
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Window rectangle in desktop viewport coordinates.
pub struct Rect {
    /// Left position.
    pub x: f64,
    /// Top position.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Creates a rect from explicit fields.
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Returns a copy translated by `(dx, dy)`.
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Size clamp constraints applied by geometry-mutating operations.
pub struct SizeConstraints {
    /// Minimum width.
    pub min_w: f64,
    /// Minimum height.
    pub min_h: f64,
    /// Optional maximum width.
    pub max_w: Option<f64>,
    /// Optional maximum height.
    pub max_h: Option<f64>,
}

impl Default for SizeConstraints {
    fn default() -> Self {
        Self {
            min_w: 120.0,
            min_h: 80.0,
            max_w: None,
            max_h: None,
        }
    }
}

impl SizeConstraints {
    /// Clamps a width/height pair to these constraints.
    ///
    /// When a declared maximum is smaller than the minimum (a manifest authoring
    /// error), the minimum wins rather than the operation failing, per `spec.md`
    /// §4.1 failure semantics.
    pub fn clamp(&self, w: f64, h: f64) -> (f64, f64) {
        (clamp_dimension(w, self.min_w, self.max_w), clamp_dimension(h, self.min_h, self.max_h))
    }
}

fn clamp_dimension(value: f64, min: f64, max: Option<f64>) -> f64 {
    match max {
        Some(max) if max >= min => value.clamp(min, max),
        _ => value.max(min),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window lifecycle state.
pub enum LifecycleState {
    /// Normal, visible, interactive window.
    Normal,
    /// Minimized: absent from visible rendering, still tracked in stacking/taskbar.
    Minimized,
    /// Maximized to the available viewport.
    Maximized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Capability flags controlling which chrome affordances are available.
pub struct WindowFlags {
    /// Whether the window may be resized via edge/corner drag.
    pub resizable: bool,
    /// Whether the window may be maximized.
    pub maximizable: bool,
    /// Whether the window may be minimized.
    pub minimizable: bool,
    /// Whether the window may be closed by the user.
    pub closable: bool,
    /// Whether the window should render above normal-stack windows.
    pub always_on_top: bool,
}

impl Default for WindowFlags {
    fn default() -> Self {
        Self {
            resizable: true,
            maximizable: true,
            minimizable: true,
            closable: true,
            always_on_top: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Non-geometric window chrome/bookkeeping metadata.
pub struct WindowMeta {
    /// Icon id shown in chrome/taskbar.
    pub icon: Option<String>,
    /// Creation timestamp (caller-supplied clock, typically unix milliseconds).
    pub created_at_ms: u64,
    /// Timestamp of the window's most recent focus transition.
    pub focused_at_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Authoritative record for one open window.
pub struct Window {
    /// Unique window id.
    pub id: WindowId,
    /// Id of the app instance that owns this window.
    pub app_id: String,
    /// Current chrome title.
    pub title: String,
    /// Current geometry.
    pub rect: Rect,
    /// Geometry captured on minimize/maximize, restored verbatim on restore.
    pub previous_bounds: Option<Rect>,
    /// Size clamp constraints.
    pub constraints: SizeConstraints,
    /// Stacking order; strictly increases with recency of focus.
    pub z_index: u32,
    /// Lifecycle state.
    pub state: LifecycleState,
    /// Capability flags.
    pub flags: WindowFlags,
    /// Opaque per-app properties payload.
    pub props: Value,
    /// Chrome/bookkeeping metadata.
    pub meta: WindowMeta,
}

impl Window {
    /// Whether the window currently participates in visible rendering.
    pub fn is_visible(&self) -> bool {
        !matches!(self.state, LifecycleState::Minimized)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Caller-supplied request to open a new window.
pub struct OpenWindowRequest {
    /// Owning app id.
    pub app_id: String,
    /// Window title.
    pub title: String,
    /// Optional width override.
    pub width: Option<f64>,
    /// Optional height override.
    pub height: Option<f64>,
    /// Size constraints to apply.
    #[serde(default)]
    pub constraints: SizeConstraints,
    /// Behavior flags.
    #[serde(default)]
    pub flags: WindowFlags,
    /// Optional icon id.
    pub icon: Option<String>,
    /// Opaque per-app properties payload.
    #[serde(default)]
    pub props: Value,
}

impl OpenWindowRequest {
    /// Creates a request with defaults for the given app id and title.
    pub fn new(app_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            title: title.into(),
            width: None,
            height: None,
            constraints: SizeConstraints::default(),
            flags: WindowFlags::default(),
            icon: None,
            props: Value::Null,
        }
    }
}
