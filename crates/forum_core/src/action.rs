use serde::Serialize;

/// What the navigation layer should do after a tap.
///
/// Produced by [`crate::classify`] for followed links and by [`crate::update`]
/// for avatar and node taps. Callers match on every variant; `Unhandled` is an
/// intentional no-op rather than a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NavigationAction {
    /// Open the link in a browser, verbatim.
    OpenWebPage { url: String },
    /// Open a member profile.
    OpenMember { username: String, path: String },
    /// Open a topic. The path is passed through; topic ids are parsed downstream.
    OpenTopic { path: String },
    /// Open a node. `name` is empty when only the path is known.
    OpenNode { name: String, path: String },
    /// No recognized pattern; the tap is swallowed.
    Unhandled,
}

impl NavigationAction {
    pub fn is_handled(&self) -> bool {
        !matches!(self, NavigationAction::Unhandled)
    }

    /// Stable short name, used in logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            NavigationAction::OpenWebPage { .. } => "open_web_page",
            NavigationAction::OpenMember { .. } => "open_member",
            NavigationAction::OpenTopic { .. } => "open_topic",
            NavigationAction::OpenNode { .. } => "open_node",
            NavigationAction::Unhandled => "unhandled",
        }
    }
}
