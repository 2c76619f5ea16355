//! Screen navigation for the terminal front end.
//!
//! Screens form a small state machine driven by [`MenuKey`]s. Gameplay input
//! on [`Screen::Playing`] goes to the engine instead; the runner moves to
//! [`Screen::GameOver`] when the session ends.

use crate::input::MenuKey;
use crate::types::GravitySpeed;

/// Entries of the main menu, top to bottom
pub const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Start, MenuItem::Options, MenuItem::About];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Start,
    Options,
    About,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Start => "start",
            MenuItem::Options => "options",
            MenuItem::About => "about",
        }
    }
}

/// Entries of the options screen, top to bottom
pub const OPTION_ITEMS: [OptionItem; 2] = [OptionItem::Ghost, OptionItem::Speed];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionItem {
    Ghost,
    Speed,
}

impl OptionItem {
    pub fn label(&self) -> &'static str {
        match self {
            OptionItem::Ghost => "Ghost",
            OptionItem::Speed => "Speed",
        }
    }
}

/// Front-end settings adjusted from the options screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub ghost: bool,
    pub speed: GravitySpeed,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ghost: true,
            speed: GravitySpeed::Normal,
        }
    }
}

impl Settings {
    /// Step the selected option one value left (`forward == false`) or right
    fn adjust(&mut self, item: OptionItem, forward: bool) {
        match item {
            // Values are listed "On, Off".
            OptionItem::Ghost => self.ghost = !forward,
            OptionItem::Speed => {
                self.speed = if forward {
                    self.speed.faster()
                } else {
                    self.speed.slower()
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu { selected: usize },
    Options { selected: usize },
    About,
    Playing,
    GameOver,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Menu { selected: 0 }
    }
}

impl Screen {
    /// Apply a navigation key, returning the next screen.
    ///
    /// `Playing` ignores navigation keys; the runner handles its input.
    pub fn navigate(self, key: MenuKey, settings: &mut Settings) -> Screen {
        match (self, key) {
            (Screen::Menu { selected }, MenuKey::Up) => Screen::Menu {
                selected: selected.saturating_sub(1),
            },
            (Screen::Menu { selected }, MenuKey::Down) => Screen::Menu {
                selected: (selected + 1).min(MENU_ITEMS.len() - 1),
            },
            (Screen::Menu { selected }, MenuKey::Enter) => match MENU_ITEMS[selected] {
                MenuItem::Start => Screen::Playing,
                MenuItem::Options => Screen::Options { selected: 0 },
                MenuItem::About => Screen::About,
            },

            (Screen::Options { selected }, MenuKey::Up) => Screen::Options {
                selected: selected.saturating_sub(1),
            },
            (Screen::Options { selected }, MenuKey::Down) => Screen::Options {
                selected: (selected + 1).min(OPTION_ITEMS.len() - 1),
            },
            (Screen::Options { selected }, MenuKey::Left | MenuKey::Right) => {
                settings.adjust(OPTION_ITEMS[selected], key == MenuKey::Right);
                self
            }

            (Screen::Options { .. } | Screen::About | Screen::GameOver, MenuKey::Enter) => {
                Screen::default()
            }

            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_selection_is_clamped() {
        let mut settings = Settings::default();
        let s = Screen::default().navigate(MenuKey::Up, &mut settings);
        assert_eq!(s, Screen::Menu { selected: 0 });

        let mut s = Screen::default();
        for _ in 0..5 {
            s = s.navigate(MenuKey::Down, &mut settings);
        }
        assert_eq!(s, Screen::Menu { selected: 2 });
    }

    #[test]
    fn menu_enter_opens_selected_screen() {
        let mut settings = Settings::default();
        assert_eq!(
            Screen::Menu { selected: 0 }.navigate(MenuKey::Enter, &mut settings),
            Screen::Playing
        );
        assert_eq!(
            Screen::Menu { selected: 1 }.navigate(MenuKey::Enter, &mut settings),
            Screen::Options { selected: 0 }
        );
        assert_eq!(
            Screen::Menu { selected: 2 }.navigate(MenuKey::Enter, &mut settings),
            Screen::About
        );
    }

    #[test]
    fn enter_returns_to_menu() {
        let mut settings = Settings::default();
        for screen in [Screen::About, Screen::GameOver, Screen::Options { selected: 1 }] {
            assert_eq!(screen.navigate(MenuKey::Enter, &mut settings), Screen::default());
        }
    }

    #[test]
    fn options_adjust_settings() {
        let mut settings = Settings::default();
        let ghost = Screen::Options { selected: 0 };
        ghost.navigate(MenuKey::Right, &mut settings);
        assert!(!settings.ghost);
        ghost.navigate(MenuKey::Left, &mut settings);
        assert!(settings.ghost);

        let speed = ghost.navigate(MenuKey::Down, &mut settings);
        assert_eq!(speed, Screen::Options { selected: 1 });
        speed.navigate(MenuKey::Right, &mut settings);
        assert_eq!(settings.speed, GravitySpeed::Fast);
        speed.navigate(MenuKey::Left, &mut settings);
        speed.navigate(MenuKey::Left, &mut settings);
        speed.navigate(MenuKey::Left, &mut settings);
        assert_eq!(settings.speed, GravitySpeed::Slow);
    }

    #[test]
    fn playing_ignores_navigation() {
        let mut settings = Settings::default();
        assert_eq!(Screen::Playing.navigate(MenuKey::Enter, &mut settings), Screen::Playing);
    }
}
