//! # Command Registry
//!
//! The static catalog of command groups shown in the categories pane.
//!
//! A [`Registry`] maps group names to [`Group`]s and keeps a separate display
//! order. The position of a name in [`Registry::group_order`] is the canonical
//! category index used by the navigator; the position of a command inside its
//! group is the index space of the options cursor.
//!
//! The catalog is compiled in ([`Registry::builtin`]) and never mutated after
//! construction. Construction validates that the order and the map agree, so
//! [`Registry::resolve`] failing at runtime means a programming error.

use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};

/// A selectable command: what the menu shows and what the shell runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub label: String,
    pub text: String,
}

impl Command {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// A named, ordered collection of commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub commands: Vec<Command>,
}

impl Group {
    pub fn new(name: impl Into<String>, commands: Vec<Command>) -> Self {
        Self {
            name: name.into(),
            commands,
        }
    }
}

/// Validated catalog of command groups.
#[derive(Debug, Clone)]
pub struct Registry {
    groups_by_name: HashMap<String, Group>,
    group_order: Vec<String>,
}

impl Registry {
    /// Build a registry whose display order is the order of `groups`.
    pub fn new(groups: Vec<Group>) -> Result<Self> {
        if groups.is_empty() {
            return Err(Error::EmptyRegistry);
        }

        let mut groups_by_name = HashMap::with_capacity(groups.len());
        let mut group_order = Vec::with_capacity(groups.len());

        for group in groups {
            if groups_by_name.contains_key(&group.name) {
                return Err(Error::DuplicateGroup(group.name));
            }
            group_order.push(group.name.clone());
            groups_by_name.insert(group.name.clone(), group);
        }

        Ok(Self {
            groups_by_name,
            group_order,
        })
    }

    /// Build a registry from an explicit map and order, checking that every
    /// ordered name resolves and that every group is ordered exactly once.
    pub fn from_parts(
        groups_by_name: HashMap<String, Group>,
        group_order: Vec<String>,
    ) -> Result<Self> {
        if group_order.is_empty() {
            return Err(Error::EmptyRegistry);
        }

        let mut seen = HashSet::with_capacity(group_order.len());
        for name in &group_order {
            if !groups_by_name.contains_key(name) {
                return Err(Error::UnknownGroup(name.clone()));
            }
            if !seen.insert(name.as_str()) {
                return Err(Error::DuplicateGroup(name.clone()));
            }
        }

        // Report in a stable order so the error is reproducible
        let mut unordered: Vec<&String> = groups_by_name
            .keys()
            .filter(|name| !seen.contains(name.as_str()))
            .collect();
        unordered.sort();
        if let Some(name) = unordered.first() {
            return Err(Error::UnorderedGroup((*name).clone()));
        }

        Ok(Self {
            groups_by_name,
            group_order,
        })
    }

    /// The commands of `group_name`, in menu order.
    pub fn resolve(&self, group_name: &str) -> Result<&[Command]> {
        self.groups_by_name
            .get(group_name)
            .map(|g| g.commands.as_slice())
            .ok_or_else(|| Error::UnknownGroup(group_name.to_string()))
    }

    /// Group names in display order.
    pub fn group_order(&self) -> &[String] {
        &self.group_order
    }

    pub fn len(&self) -> usize {
        self.group_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group_order.is_empty()
    }

    /// Iterate groups in display order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.group_order
            .iter()
            .filter_map(|name| self.groups_by_name.get(name))
    }

    /// The catalog compiled into the launcher.
    pub fn builtin() -> Result<Self> {
        Self::new(vec![
            Group::new(
                "general",
                vec![
                    Command::new("List files", "ls -la"),
                    Command::new("Working directory", "pwd"),
                    Command::new("Disk usage", "df -h"),
                    Command::new("Directory sizes", "du -sh ./* 2>/dev/null"),
                ],
            ),
            Group::new(
                "git",
                vec![
                    Command::new("Status", "git status --short --branch"),
                    Command::new("Recent commits", "git log --oneline -n 20"),
                    Command::new("Branches", "git branch -a"),
                    Command::new("Diff summary", "git diff --stat"),
                    Command::new("Stashes", "git stash list"),
                ],
            ),
            Group::new(
                "system",
                vec![
                    Command::new("Uptime", "uptime"),
                    Command::new("Kernel", "uname -a"),
                    Command::new("Memory", "free -h"),
                    Command::new("Top processes", "ps aux --sort=-%cpu | head -n 15"),
                    Command::new("Logged in users", "who"),
                ],
            ),
            Group::new(
                "docker",
                vec![
                    Command::new("Containers", "docker ps"),
                    Command::new("All containers", "docker ps -a"),
                    Command::new("Images", "docker images"),
                    Command::new("Disk usage", "docker system df"),
                ],
            ),
        ])
    }
}
