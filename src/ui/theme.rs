//! Color schemes for peruse.
//!
//! Eight built-in dark palettes, switchable at runtime from the settings
//! overlay. Colors are true-color RGB; terminals without true-color support
//! approximate them.

use ratatui::style::Color;

/// One named palette. Field names follow the roles the renderer draws with,
/// not specific hues.
pub struct ColorScheme {
    pub name: &'static str,
    pub background: Color,
    pub surface: Color,
    pub surface_light: Color,
    pub text: Color,
    pub blue: Color,
    pub cyan: Color,
    pub green: Color,
    pub purple: Color,
    pub purple_light: Color,
    pub pink: Color,
    pub yellow: Color,
    pub orange: Color,
    pub border: Color,
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

pub static SCHEMES: [ColorScheme; 8] = [
    ColorScheme {
        name: "Tokyo Night",
        background: rgb(0x1a1b26),
        surface: rgb(0x1f2335),
        surface_light: rgb(0x24283b),
        text: rgb(0xc0caf5),
        blue: rgb(0x7aa2f7),
        cyan: rgb(0x7dcfff),
        green: rgb(0x9ece6a),
        purple: rgb(0x9d7cd8),
        purple_light: rgb(0xbb9af7),
        pink: rgb(0xf7768e),
        yellow: rgb(0xe0af68),
        orange: rgb(0xff9e64),
        border: rgb(0x565f89),
    },
    ColorScheme {
        name: "Dracula",
        background: rgb(0x282a36),
        surface: rgb(0x21222c),
        surface_light: rgb(0x343746),
        text: rgb(0xf8f8f2),
        blue: rgb(0x6272a4),
        cyan: rgb(0x8be9fd),
        green: rgb(0x50fa7b),
        purple: rgb(0xbd93f9),
        purple_light: rgb(0xbd93f9),
        pink: rgb(0xff79c6),
        yellow: rgb(0xf1fa8c),
        orange: rgb(0xffb86c),
        border: rgb(0x44475a),
    },
    ColorScheme {
        name: "Nord",
        background: rgb(0x2e3440),
        surface: rgb(0x3b4252),
        surface_light: rgb(0x434c5e),
        text: rgb(0xeceff4),
        blue: rgb(0x5e81ac),
        cyan: rgb(0x88c0d0),
        green: rgb(0xa3be8c),
        purple: rgb(0xb48ead),
        purple_light: rgb(0xb48ead),
        pink: rgb(0xd08770),
        yellow: rgb(0xebcb8b),
        orange: rgb(0xd08770),
        border: rgb(0x4c566a),
    },
    ColorScheme {
        name: "Catppuccin Mocha",
        background: rgb(0x1e1e2e),
        surface: rgb(0x181825),
        surface_light: rgb(0x313244),
        text: rgb(0xcdd6f4),
        blue: rgb(0x89b4fa),
        cyan: rgb(0x89dceb),
        green: rgb(0xa6e3a1),
        purple: rgb(0xcba6f7),
        purple_light: rgb(0xf5c2e7),
        pink: rgb(0xf5c2e7),
        yellow: rgb(0xf9e2af),
        orange: rgb(0xfab387),
        border: rgb(0x45475a),
    },
    ColorScheme {
        name: "Gruvbox Dark",
        background: rgb(0x282828),
        surface: rgb(0x1d2021),
        surface_light: rgb(0x3c3836),
        text: rgb(0xebdbb2),
        blue: rgb(0x458588),
        cyan: rgb(0x689d6a),
        green: rgb(0x98971a),
        purple: rgb(0xb16286),
        purple_light: rgb(0xd3869b),
        pink: rgb(0xd3869b),
        yellow: rgb(0xd79921),
        orange: rgb(0xd65d0e),
        border: rgb(0x504945),
    },
    ColorScheme {
        name: "Solarized Dark",
        background: rgb(0x002b36),
        surface: rgb(0x073642),
        surface_light: rgb(0x073642),
        text: rgb(0x839496),
        blue: rgb(0x268bd2),
        cyan: rgb(0x2aa198),
        green: rgb(0x859900),
        purple: rgb(0x6c71c4),
        purple_light: rgb(0xd33682),
        pink: rgb(0xd33682),
        yellow: rgb(0xb58900),
        orange: rgb(0xcb4b16),
        border: rgb(0x586e75),
    },
    ColorScheme {
        name: "One Dark",
        background: rgb(0x282c34),
        surface: rgb(0x21252b),
        surface_light: rgb(0x2c313c),
        text: rgb(0xabb2bf),
        blue: rgb(0x61afef),
        cyan: rgb(0x56b6c2),
        green: rgb(0x98c379),
        purple: rgb(0xc678dd),
        purple_light: rgb(0xc678dd),
        pink: rgb(0xe06c75),
        yellow: rgb(0xe5c07b),
        orange: rgb(0xd19a66),
        border: rgb(0x3e4451),
    },
    ColorScheme {
        name: "Monokai Pro",
        background: rgb(0x2d2a2e),
        surface: rgb(0x221f22),
        surface_light: rgb(0x403e41),
        text: rgb(0xfcfcfa),
        blue: rgb(0x78dce8),
        cyan: rgb(0x78dce8),
        green: rgb(0xa9dc76),
        purple: rgb(0xab9df2),
        purple_light: rgb(0xab9df2),
        pink: rgb(0xff6188),
        yellow: rgb(0xffd866),
        orange: rgb(0xfc9867),
        border: rgb(0x5b595c),
    },
];

/// Returns the scheme at `idx`, wrapping past the end of the table.
pub fn scheme(idx: usize) -> &'static ColorScheme {
    &SCHEMES[idx % SCHEMES.len()]
}
