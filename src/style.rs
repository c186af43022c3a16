//! Visual theme for the explorer.

use crate::render::Color;

/// Color palette used by the frame builder.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Canvas background.
    pub background: Color,
    /// Title and axis-letter text.
    pub primary_text: Color,
    /// Tick label text.
    pub secondary_text: Color,
    /// Accent color for the active caption.
    pub accent: Color,
    /// Function curve stroke.
    pub curve: Color,
    /// Tangent segment stroke.
    pub tangent: Color,
    /// Axis and tick stroke.
    pub axis: Color,
    /// Hover marker fill.
    pub marker: Color,
    /// Readout box text.
    pub readout_text: Color,
    /// Readout box fill.
    pub readout_fill: Color,
    /// Control fill.
    pub button_fill: Color,
    /// Control fill while hovered.
    pub button_hover_fill: Color,
    /// Control fill while its function is active.
    pub button_active_fill: Color,
    /// Control border stroke.
    pub button_stroke: Color,
    /// Control label text.
    pub button_text: Color,
    /// Control label text while active.
    pub button_active_text: Color,
}

impl Theme {
    /// The default light palette.
    pub fn light() -> Self {
        let accent = Color::rgb8(0, 122, 255);
        Self {
            background: Color::rgb8(240, 240, 240),
            primary_text: Color::rgb8(50, 50, 50),
            secondary_text: Color::rgb8(100, 100, 100),
            accent,
            curve: accent,
            tangent: Color::rgb8(255, 149, 0),
            axis: Color::rgb8(180, 180, 180),
            marker: Color::rgb8(255, 59, 48),
            readout_text: Color::rgb8(30, 30, 30),
            readout_fill: Color::rgb8(255, 255, 255).with_alpha(220.0 / 255.0),
            button_fill: Color::rgb8(220, 220, 220),
            button_hover_fill: Color::rgb8(200, 200, 200),
            button_active_fill: accent,
            button_stroke: Color::rgb8(200, 200, 200),
            button_text: Color::rgb8(50, 50, 50),
            button_active_text: Color::rgb8(255, 255, 255),
        }
    }

    /// A dark palette with the same accents.
    pub fn dark() -> Self {
        let accent = Color::rgb8(10, 132, 255);
        Self {
            background: Color::rgb8(28, 28, 30),
            primary_text: Color::rgb8(229, 229, 234),
            secondary_text: Color::rgb8(142, 142, 147),
            accent,
            curve: accent,
            tangent: Color::rgb8(255, 159, 10),
            axis: Color::rgb8(72, 72, 74),
            marker: Color::rgb8(255, 69, 58),
            readout_text: Color::rgb8(229, 229, 234),
            readout_fill: Color::rgb8(44, 44, 46).with_alpha(220.0 / 255.0),
            button_fill: Color::rgb8(44, 44, 46),
            button_hover_fill: Color::rgb8(58, 58, 60),
            button_active_fill: accent,
            button_stroke: Color::rgb8(58, 58, 60),
            button_text: Color::rgb8(229, 229, 234),
            button_active_text: Color::rgb8(255, 255, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
