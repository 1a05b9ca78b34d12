use tui_textarea::Input;

#[derive(Debug, Clone)]
pub enum Event {
    KeyboardCharInput(Input),
    KeyboardEsc,
    KeyboardEnter,
    KeyboardTab,
    KeyboardBackTab,
    KeyboardCtrlC,
    KeyboardCtrlD,
    KeyboardCtrlR,
    KeyboardF5,

    Quit,

    UiTick,
    UiScrollUp,
    UiScrollDown,
}
