use tui_textarea::Input;

use super::GithubStats;

#[derive(Debug)]
pub enum Event {
    ContactDelivered,
    ContactFailed(String),
    ContactReset,
    GithubStatsLoaded(GithubStats),
    KeyboardCharInput(Input),
    KeyboardCTRLC,
    KeyboardEnter,
    KeyboardPaste(String),
    MatrixGlyph(char),
    PreloaderFinished,
    PreloaderProgress(u8),
    RoleTick,
    ThemeTick,
    TypewriterFrame(String),
    UITick,
}
