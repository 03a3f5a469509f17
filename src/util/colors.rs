use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub neutral: Color,
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub danger: Color,
}

pub const DARK: Palette = Palette {
    primary: Color::from_u32(0x0000d4ff),
    secondary: Color::from_u32(0x00006b85),
    neutral: Color::from_u32(0x00606a78),
    background: Color::from_u32(0x000a0e14),
    foreground: Color::from_u32(0x00e6edf3),
    accent: Color::from_u32(0x0039ff88),
    danger: Color::from_u32(0x00ff4d4f),
};

pub const LIGHT: Palette = Palette {
    primary: Color::from_u32(0x000077b6),
    secondary: Color::from_u32(0x0090e0ef),
    neutral: Color::from_u32(0x008a94a3),
    background: Color::from_u32(0x00f7f9fc),
    foreground: Color::from_u32(0x00111827),
    accent: Color::from_u32(0x00008f5a),
    danger: Color::from_u32(0x00c62828),
};
