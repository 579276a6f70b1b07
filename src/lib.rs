//! CurveLab Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CurveMode, DragAxis, Selection, ViewState,
};
pub use core::{ControlPoint, ControlPolygon, CurveVertex, SceneCamera};
pub use render::{PickSurface, RenderSink, SoftwarePickSurface};
pub use shared::{EditorOptions, RenderScene};
