//! # UI Authorization View
//!
//! Pure projection of the session into the controls the rendering layer may
//! show. Holds no state; recompute it after every session change.

use serde::Serialize;

use crate::models::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UiCapabilities {
    pub show_create_post: bool,
    pub show_login: bool,
    pub show_logout: bool,
}

/// Entries of the site navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    CreatePost,
    Login,
    Logout,
}

impl NavItem {
    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::CreatePost => "Create Post",
            NavItem::Login => "Login",
            NavItem::Logout => "Logout",
        }
    }
}

impl UiCapabilities {
    pub fn for_session(session: &Session) -> Self {
        let authenticated = session.is_authenticated();
        Self {
            show_create_post: authenticated,
            show_login: !authenticated,
            show_logout: authenticated,
        }
    }

    /// Navigation entries in display order.
    pub fn nav_items(&self) -> Vec<NavItem> {
        let mut items = vec![NavItem::Home];
        if self.show_create_post {
            items.push(NavItem::CreatePost);
        }
        if self.show_login {
            items.push(NavItem::Login);
        }
        if self.show_logout {
            items.push(NavItem::Logout);
        }
        items
    }
}
