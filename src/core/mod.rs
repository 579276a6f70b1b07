//! Core-Domänentypen: Kontrollpolygon, Kamera und die Kurven-Generatoren.

pub mod bezier;
pub mod camera;
pub mod catmull_rom;
pub mod polygon;
pub mod subdivision;
pub mod vertex;

pub use bezier::bezier_segments;
pub use camera::SceneCamera;
pub use catmull_rom::{
    catmull_rom_control_points, de_casteljau_xy, sample_segments, SAMPLES_PER_SEGMENT, TENSION,
};
pub use polygon::{ControlPoint, ControlPolygon};
pub use subdivision::{chaikin_step, SubdivisionChain, MAX_SUBDIVISION_LEVEL};
pub use vertex::CurveVertex;
