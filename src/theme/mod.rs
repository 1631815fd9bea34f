//! Monokai Pro colors for the employee manager window

use gpui::Hsla;

/// Monokai Pro color palette
pub mod colors {
    use gpui::{rgb, Hsla};

    pub fn bg_dark() -> Hsla { rgb(0x19181a).into() }      // #19181a - panels
    pub fn bg_base() -> Hsla { rgb(0x2d2a2e).into() }      // #2d2a2e - window
    pub fn bg_light() -> Hsla { rgb(0x403e41).into() }     // #403e41 - cards, borders
    pub fn bg_highlight() -> Hsla { rgb(0x5b595c).into() } // #5b595c - hover

    pub fn fg_base() -> Hsla { rgb(0xfcfcfa).into() }
    pub fn fg_muted() -> Hsla { rgb(0x727072).into() }

    pub fn red() -> Hsla { rgb(0xff6188).into() }
    pub fn yellow() -> Hsla { rgb(0xffd866).into() }
    pub fn green() -> Hsla { rgb(0xa9dc76).into() }
    pub fn cyan() -> Hsla { rgb(0x78dce8).into() }
    pub fn purple() -> Hsla { rgb(0xab9df2).into() }
}

/// Colors by role in the form and list
#[derive(Clone)]
pub struct MonokaiTheme {
    pub background: Hsla,
    pub background_secondary: Hsla,
    pub background_elevated: Hsla,
    pub background_highlight: Hsla,

    pub foreground: Hsla,
    pub foreground_muted: Hsla,

    /// Headings and the primary form action
    pub primary: Hsla,
    /// Edit controls
    pub secondary: Hsla,
    pub danger: Hsla,

    pub success: Hsla,
    pub warning: Hsla,
    pub error: Hsla,

    pub border: Hsla,
}

impl Default for MonokaiTheme {
    fn default() -> Self {
        Self {
            background: colors::bg_base(),
            background_secondary: colors::bg_dark(),
            background_elevated: colors::bg_light(),
            background_highlight: colors::bg_highlight(),

            foreground: colors::fg_base(),
            foreground_muted: colors::fg_muted(),

            primary: colors::cyan(),
            secondary: colors::purple(),
            danger: colors::red(),

            success: colors::green(),
            warning: colors::yellow(),
            error: colors::red(),

            border: colors::bg_light(),
        }
    }
}

impl MonokaiTheme {
    pub fn new() -> Self {
        Self::default()
    }
}
