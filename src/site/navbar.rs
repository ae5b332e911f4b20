/// Hamburger button plus the menu it opens. Both carry the same "active" flag
/// in practice, but they are toggled independently like two class lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavToggle {
    hamburger_active: bool,
    menu_active: bool,
}

impl NavToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn click_hamburger(&mut self) {
        self.hamburger_active = !self.hamburger_active;
        self.menu_active = !self.menu_active;
    }

    /// Following any menu link closes the menu.
    pub fn click_link(&mut self) {
        self.hamburger_active = false;
        self.menu_active = false;
    }

    pub fn is_open(&self) -> bool {
        self.menu_active
    }

    pub fn hamburger_active(&self) -> bool {
        self.hamburger_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamburger_flips_both() {
        let mut nav = NavToggle::new();
        nav.click_hamburger();
        assert!(nav.is_open() && nav.hamburger_active());
        nav.click_hamburger();
        assert!(!nav.is_open() && !nav.hamburger_active());
    }

    #[test]
    fn link_always_closes() {
        let mut nav = NavToggle::new();
        nav.click_link();
        assert!(!nav.is_open());
        nav.click_hamburger();
        nav.click_link();
        assert_eq!(nav, NavToggle::new());
    }
}
