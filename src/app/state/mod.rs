//! Application State: Polygon, abgeleitete Puffer, View, Selektion, Editor.

mod app_state;
mod derived;
mod editor;
mod selection;
mod view;

pub use app_state::AppState;
pub use derived::DerivedBuffers;
pub use editor::{CurveMode, EditorState};
pub use selection::{DragAxis, Selection, SelectionState};
pub use view::ViewState;
