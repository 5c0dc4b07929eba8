//! Header chrome state.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

/// Mobile navigation menu visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub menu_open: bool,
}

impl ShellState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following a navigation link always collapses the menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
