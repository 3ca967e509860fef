use crate::app::Mode;

/// Explicit commands dispatched to the app, decoupled from key bindings so
/// the core state machine is testable without a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Tick,
    Resize(u16, u16),

    // List navigation
    MoveDown,
    MoveUp,
    GoTop,
    GoBottom,

    // Mode switching
    NextMode,
    SetMode(Mode),

    // Query editing / search
    StartQuery,
    QueryInput(char),
    QueryCancel,
    QueryConfirm,
    Submit,

    // Collection
    ToggleCollect,
    ClearCollection,

    // Export
    ExportBibtex,
    ExportRis,
    ExportStyled,
    ExportCollection,

    // Overlays / status
    ToggleHelp,
    Dismiss,

    // Cursor movement inside the query line
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    None,
}
