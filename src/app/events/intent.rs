use glam::Vec2;

/// Intents sind Eingaben aus dem Frontend ohne direkte Mutationslogik.
///
/// Das Frontend übersetzt rohe Maus- und Tastatur-Events in diese Intents;
/// erst das Intent->Command-Mapping entscheidet, was tatsächlich passiert.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primäre Maustaste gedrückt (startet einen Pick)
    PrimaryPressed,
    /// Primäre Maustaste losgelassen (committet einen Drag)
    PrimaryReleased,
    /// Cursor hat sich bewegt (Fensterkoordinaten, Ursprung oben links)
    CursorMoved { screen_pos: Vec2 },
    /// Achsenmodus umschalten (XY-Ebene ⇔ Tiefe), auch mitten im Drag
    ToggleAxisModeRequested,
    /// Loop-Marker an- oder abschalten
    ToggleLoopRequested,
    /// Subdivision-Modus wählen (rückt zugleich die Stufe vor)
    SubdivisionModeRequested,
    /// Bezier-Modus wählen
    BezierModeRequested,
    /// Catmull-Rom-Modus wählen
    CatmullRomModeRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
}
