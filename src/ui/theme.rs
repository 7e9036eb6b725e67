//! Theme state and color palettes
//! Dark is Rose Pine, light is Rose Pine Dawn: https://rosepinetheme.com/
//!
//! Every render function reads its colors through the active [`Palette`],
//! so flipping the theme restyles the whole surface on the next frame.

use ratatui::style::Color;

/// The named colors a render function can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub base: Color,
    pub surface: Color,
    pub text: Color,
    pub subtle: Color,
    pub muted: Color,
    pub love: Color,
    pub gold: Color,
    pub rose: Color,
    pub pine: Color,
    pub foam: Color,
    pub iris: Color,
    pub highlight_high: Color,
    pub highlight_low: Color,
    pub heart_active: Color,
    pub heart_inactive: Color,
}

pub const ROSE_PINE: Palette = Palette {
    base: Color::Rgb(25, 23, 36),
    surface: Color::Rgb(31, 29, 46),
    text: Color::Rgb(224, 222, 244),
    subtle: Color::Rgb(144, 140, 170),
    muted: Color::Rgb(110, 106, 134),
    love: Color::Rgb(235, 111, 146),
    gold: Color::Rgb(246, 193, 119),
    rose: Color::Rgb(235, 188, 186),
    pine: Color::Rgb(49, 116, 143),
    foam: Color::Rgb(156, 207, 216),
    iris: Color::Rgb(196, 167, 231),
    highlight_high: Color::Rgb(82, 79, 103),
    highlight_low: Color::Rgb(33, 32, 46),
    heart_active: Color::Rgb(255, 0, 0),
    heart_inactive: Color::Rgb(85, 85, 85),
};

pub const ROSE_PINE_DAWN: Palette = Palette {
    base: Color::Rgb(250, 244, 237),
    surface: Color::Rgb(255, 250, 243),
    text: Color::Rgb(87, 82, 121),
    subtle: Color::Rgb(121, 117, 147),
    muted: Color::Rgb(152, 147, 165),
    love: Color::Rgb(180, 99, 122),
    gold: Color::Rgb(234, 157, 52),
    rose: Color::Rgb(215, 130, 126),
    pine: Color::Rgb(40, 105, 131),
    foam: Color::Rgb(86, 148, 159),
    iris: Color::Rgb(144, 122, 169),
    highlight_high: Color::Rgb(206, 202, 205),
    highlight_low: Color::Rgb(244, 237, 232),
    heart_active: Color::Rgb(255, 90, 95),
    heart_inactive: Color::Rgb(211, 211, 211),
};

/// Which palette is applied to the whole surface. Not persisted; every
/// session starts back in dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Dark => &ROSE_PINE,
            Theme::Light => &ROSE_PINE_DAWN,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_two_palettes() {
        let mut theme = Theme::default();
        assert_eq!(theme.palette(), &ROSE_PINE, "sessions start in dark mode");

        theme.toggle();
        assert_eq!(theme, Theme::Light);
        assert_eq!(theme.palette(), &ROSE_PINE_DAWN);

        theme.toggle();
        assert_eq!(theme, Theme::Dark, "toggling twice returns to the start");
    }
}
