use std::io::IsTerminal;

use clap::ValueEnum;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

pub enum Theme {
  Dark,
  Light,
}

/// Terminal palette for the CLI, resolved once at startup.
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  pub fn from_modes(color: ColorMode, theme: ThemeMode) -> Self {
    Self::new(colors_enabled(color), detect_theme(theme))
  }

  pub const fn timestamp(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => Color::Rgb { r: 110, g: 144, b: 169 },
      Theme::Light => Color::Rgb { r: 72, g: 96, b: 120 },
    }
  }

  pub const fn primary(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => Color::Rgb { r: 204, g: 153, b: 51 },
      Theme::Light => Color::Rgb { r: 102, g: 68, b: 17 },
    }
  }

  pub const fn success(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => Color::Rgb { r: 97, g: 175, b: 110 },
      Theme::Light => Color::Rgb { r: 34, g: 120, b: 72 },
    }
  }

  pub const fn label(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => Color::Rgb { r: 222, g: 196, b: 132 },
      Theme::Light => Color::Rgb { r: 150, g: 104, b: 48 },
    }
  }

  pub const fn value(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => Color::Rgb { r: 240, g: 222, b: 170 },
      Theme::Light => Color::Rgb { r: 120, g: 120, b: 90 },
    }
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => detect_terminal_theme(),
  }
}

fn detect_terminal_theme() -> Theme {
  if let Ok(colorfgbg) = std::env::var("COLORFGBG")
    && let Some(bg) = colorfgbg.split(';').next_back()
    && let Ok(bg_num) = bg.parse::<u8>()
  {
    return if bg_num >= 8 { Theme::Light } else { Theme::Dark };
  }

  Theme::Dark
}
