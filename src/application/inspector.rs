//! Read-only member and metadata enumeration

use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::notifier::ChangeNotifier;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{HelpAttribute, Introspect, MemberInfo, Point, Shape, TypeDescriptor};

/// Registry of type descriptors, built once at startup.
#[derive(Debug, Clone)]
pub struct Inspector {
    types: Vec<&'static TypeDescriptor>,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    /// Inspector with the crate's own introspectable types registered.
    pub fn new() -> Self {
        Self::empty()
            .with::<Point>()
            .with::<Shape>()
            .with::<ChangeNotifier>()
    }

    pub fn empty() -> Self {
        Self { types: Vec::new() }
    }

    /// Register another type. Registering the same type twice is a no-op.
    pub fn with<T: Introspect>(mut self) -> Self {
        let descriptor = T::descriptor();
        if !self.types.iter().any(|d| std::ptr::eq(*d, descriptor)) {
            self.types.push(descriptor);
        }
        self
    }

    pub fn of<T: Introspect>() -> &'static TypeDescriptor {
        T::descriptor()
    }

    /// Registered descriptors in registration order.
    pub fn types(&self) -> &[&'static TypeDescriptor] {
        &self.types
    }

    /// Find a registered descriptor by type name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&'static TypeDescriptor> {
        self.types
            .iter()
            .copied()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    }

    /// Like `lookup`, but an unknown name is an error.
    pub fn require(&self, name: &str) -> ApplicationResult<&'static TypeDescriptor> {
        self.lookup(name)
            .ok_or_else(|| ApplicationError::UnknownType(name.to_string()))
    }

    /// Public members in declaration order.
    pub fn members(&self, descriptor: &'static TypeDescriptor) -> &'static [MemberInfo] {
        descriptor.members
    }

    /// Members that carry help metadata, paired with it.
    #[instrument(level = "debug", skip(self, descriptor), fields(ty = descriptor.name))]
    pub fn documented_members(
        &self,
        descriptor: &'static TypeDescriptor,
    ) -> Vec<(&'static MemberInfo, &'static HelpAttribute)> {
        let documented: Vec<_> = descriptor
            .members
            .iter()
            .filter_map(|m| m.help.as_ref().map(|h| (m, h)))
            .collect();
        debug!("{} of {} members documented", documented.len(), descriptor.members.len());
        documented
    }

    /// Help attached to `member`; `None` for unknown or undocumented members.
    pub fn help_for(
        &self,
        descriptor: &'static TypeDescriptor,
        member: &str,
    ) -> Option<&'static HelpAttribute> {
        descriptor
            .members
            .iter()
            .find(|m| m.name == member)
            .and_then(|m| m.help.as_ref())
    }

    /// Render `type -> members -> help` as a text tree.
    pub fn render_tree(&self, descriptor: &'static TypeDescriptor) -> Tree<String> {
        let mut root = Tree::new(heading(descriptor.name, descriptor.help.as_ref()));
        for member in descriptor.members {
            let mut node = Tree::new(format!("{} ({})", member.name, member.kind.as_str()));
            if let Some(help) = &member.help {
                node.push(Tree::new(help.description.to_string()));
                if let Some(url) = help.url {
                    node.push(Tree::new(format!("see {url}")));
                }
            }
            root.push(node);
        }
        root
    }
}

fn heading(name: &str, help: Option<&HelpAttribute>) -> String {
    match help {
        Some(HelpAttribute {
            description,
            url: Some(url),
        }) => format!("{name}: {description} <{url}>"),
        Some(HelpAttribute { description, .. }) => format!("{name}: {description}"),
        None => name.to_string(),
    }
}
