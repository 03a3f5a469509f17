use crate::content::Section;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    Quit,

    // Audio
    TogglePlayPause,
    ToggleMute,
    VolumeUp,
    VolumeDown,

    // Page
    ToggleLanguage,
    ToggleTheme,
    NavigateTo(Section),
    NextSection,
    PreviousSection,
    ScrollUp(u16),
    ScrollDown(u16),

    // Menu
    ToggleMenu,
    CloseMenu,
    MenuNext,
    MenuPrevious,
    MenuSelect,

    // Contact form
    EditForm,
    StopEditing,
    NextField,
    PreviousField,
    InsertChar(char),
    InsertText(String),
    DeleteChar,
    Submit,
}
