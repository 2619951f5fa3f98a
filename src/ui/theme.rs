use crate::fixtures::Accent;
use log::*;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub accent: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Surfaces
    pub surface: ColorSpec,
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,

    // Home tile tints
    pub tile_blue: ColorSpec,
    pub tile_green: ColorSpec,
    pub tile_yellow: ColorSpec,
    pub tile_purple: ColorSpec,

    // Chat send button
    pub send: ColorSpec,
    pub send_pressed: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: rgb(125, 207, 255),        // Blue
            accent: rgb(255, 159, 196),         // Magenta
            text: rgb(169, 177, 214),           // Foreground
            text_secondary: rgb(192, 202, 245), // Foreground (brighter)
            text_muted: rgb(117, 121, 148),     // Comment
            surface: rgb(36, 40, 59),           // Selection
            border_active: rgb(125, 207, 255),  // Blue
            border_normal: rgb(65, 72, 104),    // Terminal black
            tile_blue: rgb(122, 162, 247),
            tile_green: rgb(158, 206, 106),
            tile_yellow: rgb(224, 175, 104),
            tile_purple: rgb(187, 154, 247),
            send: rgb(187, 154, 247),
            send_pressed: rgb(157, 124, 216),
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: rgb(40, 105, 131),         // Pine
            accent: rgb(180, 99, 122),          // Love
            text: rgb(87, 82, 121),             // Text
            text_secondary: rgb(121, 117, 147), // Subtle
            text_muted: rgb(152, 147, 165),     // Muted
            surface: rgb(255, 250, 243),        // Surface
            border_active: rgb(40, 105, 131),   // Pine
            border_normal: rgb(206, 202, 205),  // Highlight high
            tile_blue: rgb(86, 148, 159),
            tile_green: rgb(40, 105, 131),
            tile_yellow: rgb(234, 157, 52),
            tile_purple: rgb(144, 122, 169),
            send: rgb(144, 122, 169),
            send_pressed: rgb(110, 92, 135),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: rgb(189, 147, 249),        // Purple
            accent: rgb(255, 121, 198),         // Pink
            text: rgb(248, 248, 242),           // Foreground
            text_secondary: rgb(226, 226, 220), // Foreground (dimmer)
            text_muted: rgb(98, 114, 164),      // Comment
            surface: rgb(68, 71, 90),           // Current line
            border_active: rgb(189, 147, 249),  // Purple
            border_normal: rgb(98, 114, 164),   // Comment
            tile_blue: rgb(139, 233, 253),
            tile_green: rgb(80, 250, 123),
            tile_yellow: rgb(241, 250, 140),
            tile_purple: rgb(189, 147, 249),
            send: rgb(189, 147, 249),
            send_pressed: rgb(255, 121, 198),
        }
    }

    /// Get theme by name.
    ///
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "dracula" => Some(Self::dracula()),
            _ => None,
        }
    }

    /// Get theme by name, falling back to the default for unknown names.
    ///
    pub fn resolve(name: &str) -> Self {
        Self::by_name(name).unwrap_or_else(|| {
            warn!("Unknown theme '{}', using the default theme", name);
            Self::default()
        })
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "rose-pine-dawn".to_string(),
            "dracula".to_string(),
        ]
    }

    /// Return the tint for a home tile accent.
    ///
    pub fn tile(&self, accent: Accent) -> Color {
        match accent {
            Accent::Blue => self.tile_blue.to_color(),
            Accent::Green => self.tile_green.to_color(),
            Accent::Yellow => self.tile_yellow.to_color(),
            Accent::Purple => self.tile_purple.to_color(),
        }
    }
}
