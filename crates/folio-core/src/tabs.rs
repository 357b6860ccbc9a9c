//! Navigation tabs.
//!
//! Every tab carries a `TabAction`: either switch the local view or open an
//! external resource. `dispatch` is the single handler for both.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Top-level views of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    #[default]
    Home,
    Projects,
    Gallery,
}

impl ViewId {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Projects => "projects",
            ViewId::Gallery => "gallery",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(ViewId::Home),
            "projects" | "projects-detail" => Ok(ViewId::Projects),
            "gallery" => Ok(ViewId::Gallery),
            other => anyhow::bail!("Unknown view '{other}' (expected home, projects or gallery)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabAction {
    Navigate(ViewId),
    OpenExternal(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub label: &'static str,
    pub icon: &'static str,
    pub action: TabAction,
}

impl Tab {
    /// Only navigation tabs can be active.
    pub fn is_active(&self, active: ViewId) -> bool {
        matches!(self.action, TabAction::Navigate(view) if view == active)
    }

    pub fn is_external(&self) -> bool {
        matches!(self.action, TabAction::OpenExternal(_))
    }
}

pub fn default_tabs() -> Vec<Tab> {
    vec![
        Tab {
            label: "Home",
            icon: "⌂",
            action: TabAction::Navigate(ViewId::Home),
        },
        Tab {
            label: "Projects Detail",
            icon: "☰",
            action: TabAction::Navigate(ViewId::Projects),
        },
        Tab {
            label: "Gallery",
            icon: "◉",
            action: TabAction::Navigate(ViewId::Gallery),
        },
        Tab {
            label: "GitHub",
            icon: "⌥",
            action: TabAction::OpenExternal("https://github.com/tamo2918".to_string()),
        },
        Tab {
            label: "Twitter",
            icon: "✕",
            action: TabAction::OpenExternal("https://x.com/tamodev".to_string()),
        },
        Tab {
            label: "Mail",
            icon: "✉",
            action: TabAction::OpenExternal("mailto:tamodev8@gmail.com".to_string()),
        },
    ]
}

/// Result of dispatching a tab action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabOutcome {
    /// The active view changed; the caller re-mounts it.
    Switched(ViewId),
    /// The view was already active.
    Unchanged,
    /// The caller should open this URL outside the app.
    Open(String),
}

pub fn dispatch(action: &TabAction, active: &mut ViewId) -> TabOutcome {
    match action {
        TabAction::Navigate(view) if *view == *active => TabOutcome::Unchanged,
        TabAction::Navigate(view) => {
            *active = *view;
            TabOutcome::Switched(*view)
        }
        TabAction::OpenExternal(url) => TabOutcome::Open(url.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_switches_view() {
        let mut active = ViewId::Home;
        let outcome = dispatch(&TabAction::Navigate(ViewId::Gallery), &mut active);
        assert_eq!(outcome, TabOutcome::Switched(ViewId::Gallery));
        assert_eq!(active, ViewId::Gallery);
    }

    #[test]
    fn test_navigate_to_active_view_is_unchanged() {
        let mut active = ViewId::Projects;
        let outcome = dispatch(&TabAction::Navigate(ViewId::Projects), &mut active);
        assert_eq!(outcome, TabOutcome::Unchanged);
    }

    #[test]
    fn test_external_does_not_touch_active_view() {
        let mut active = ViewId::Home;
        let action = TabAction::OpenExternal("https://example.com".to_string());
        assert_eq!(
            dispatch(&action, &mut active),
            TabOutcome::Open("https://example.com".to_string())
        );
        assert_eq!(active, ViewId::Home);
    }

    #[test]
    fn test_external_tabs_are_never_active() {
        let tabs = default_tabs();
        for view in [ViewId::Home, ViewId::Projects, ViewId::Gallery] {
            let active: Vec<&str> = tabs
                .iter()
                .filter(|t| t.is_active(view))
                .map(|t| t.label)
                .collect();
            assert_eq!(active.len(), 1, "exactly one tab active for {view}");
        }
        assert_eq!(tabs.iter().filter(|t| t.is_external()).count(), 3);
    }

    #[test]
    fn test_view_id_parsing() {
        assert_eq!("Gallery".parse::<ViewId>().unwrap(), ViewId::Gallery);
        assert_eq!("projects-detail".parse::<ViewId>().unwrap(), ViewId::Projects);
        assert!("settings".parse::<ViewId>().is_err());
    }
}
