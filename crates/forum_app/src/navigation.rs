//! Navigation dispatch: feeds core effects to a screen-transition layer.

use std::io::Write;

use forum_core::{Effect, NavigationAction};
use forum_logging::{forum_debug, forum_info, forum_warn};
use url::Url;

/// Screen transitions the client can perform.
pub trait Navigator {
    fn open_web_page(&mut self, url: &str);
    fn open_member(&mut self, username: &str, path: &str);
    fn open_topic(&mut self, path: &str);
    fn open_node(&mut self, name: &str, path: &str);
}

/// Routes one action to the navigator. Returns false for `Unhandled`.
pub fn dispatch(navigator: &mut dyn Navigator, action: &NavigationAction) -> bool {
    match action {
        NavigationAction::OpenWebPage { url } => navigator.open_web_page(url),
        NavigationAction::OpenMember { username, path } => navigator.open_member(username, path),
        NavigationAction::OpenTopic { path } => navigator.open_topic(path),
        NavigationAction::OpenNode { name, path } => navigator.open_node(name, path),
        NavigationAction::Unhandled => {
            forum_debug!("unhandled action dropped");
            return false;
        }
    }
    true
}

pub struct EffectRunner<N> {
    navigator: N,
}

impl<N: Navigator> EffectRunner<N> {
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Navigate(action) => {
                    forum_info!("Navigate kind={}", action.kind());
                    dispatch(&mut self.navigator, &action);
                }
            }
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }
}

/// Navigator that describes each transition as a line of text, with in-app
/// paths expanded against the forum origin.
pub struct PrintNavigator<W> {
    site: Url,
    out: W,
}

impl<W: Write> PrintNavigator<W> {
    pub fn new(site: Url, out: W) -> Self {
        Self { site, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn absolute(&self, path: &str) -> String {
        match self.site.join(path) {
            Ok(url) => url.into(),
            Err(err) => {
                forum_warn!("Could not join {:?} onto {}: {}", path, self.site, err);
                path.to_string()
            }
        }
    }

    fn line(&mut self, text: String) {
        if let Err(err) = writeln!(self.out, "{text}") {
            forum_warn!("Failed to write navigation line: {}", err);
        }
    }
}

impl<W: Write> Navigator for PrintNavigator<W> {
    fn open_web_page(&mut self, url: &str) {
        self.line(format!("open browser {url}"));
    }

    fn open_member(&mut self, username: &str, path: &str) {
        let target = self.absolute(path);
        self.line(format!("open member {username:?} {target}"));
    }

    fn open_topic(&mut self, path: &str) {
        let target = self.absolute(path);
        self.line(format!("open topic {target}"));
    }

    fn open_node(&mut self, name: &str, path: &str) {
        let target = self.absolute(path);
        self.line(format!("open node {name:?} {target}"));
    }
}
