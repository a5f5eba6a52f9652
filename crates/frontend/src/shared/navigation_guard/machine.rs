//! Browser-independent core of the unsaved-changes guard.
//!
//! The component feeds DOM events into [`GuardMachine`] and executes the
//! returned [`GuardCommand`]s against `window.history`, the dialog signal and
//! the router.
//!
//! Back-button handling relies on two marked history entries: the form's own
//! entry (the origin) and a sentinel duplicate of it pushed on top. A back
//! press pops the sentinel and lands on the origin, which is the only landing
//! that asks for confirmation. While the dialog is open the sentinel is
//! pushed again, so every further back press lands on the form URL too.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingExit {
    Back,
    Link(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardCommand {
    /// Tag the current history entry as the origin.
    MarkOrigin,
    /// Push a tagged duplicate of the current URL.
    PushSentinel,
    ShowDialog,
    HideDialog,
    HistoryBack,
    /// Router navigation. `replace` overwrites the sentinel entry.
    Navigate { path: String, replace: bool },
}

/// Which entry a popstate landed on, as told by its history state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Origin,
    Sentinel,
    /// Untagged: a fragment entry, another page, or another guard's entry.
    Elsewhere,
}

/// Intent attached to a programmatic navigation. Consumed by the first guard
/// that observes the resulting popstate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    BypassGuard,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardMachine {
    dirty: bool,
    sentinel_armed: bool,
    /// Stepping back past the origin and sentinel without asking.
    leaving: bool,
    pending: Option<PendingExit>,
}

impl GuardMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_dirty(&mut self, dirty: bool) -> Vec<GuardCommand> {
        self.dirty = dirty;
        if dirty && !self.sentinel_armed {
            self.sentinel_armed = true;
            return vec![GuardCommand::MarkOrigin, GuardCommand::PushSentinel];
        }
        if !dirty && self.pending.take().is_some() {
            return vec![GuardCommand::HideDialog];
        }
        Vec::new()
    }

    pub fn should_prompt_on_unload(&self) -> bool {
        self.dirty
    }

    /// A guarded in-app link was clicked. The click's default action must be
    /// prevented whenever [`intercepts_links`](Self::intercepts_links) holds,
    /// even when no command comes back.
    pub fn on_link_click(&mut self, path: String) -> Vec<GuardCommand> {
        if !self.dirty {
            return Vec::new();
        }
        if self.pending.is_some() {
            // Dialog already up; swallow the click without a second dialog.
            return vec![];
        }
        self.pending = Some(PendingExit::Link(path));
        vec![GuardCommand::ShowDialog]
    }

    /// Whether guarded link clicks are currently intercepted.
    pub fn intercepts_links(&self) -> bool {
        self.dirty
    }

    pub fn on_popstate(&mut self, landing: Landing, intent: Option<NavIntent>) -> Vec<GuardCommand> {
        if intent == Some(NavIntent::BypassGuard) {
            self.leaving = true;
            self.pending = None;
        }
        if self.leaving {
            if landing == Landing::Elsewhere {
                self.leaving = false;
                return Vec::new();
            }
            return vec![GuardCommand::HistoryBack];
        }

        match landing {
            // Fragment entries, forward presses and back presses off a
            // fragment entry stay on the form.
            Landing::Sentinel | Landing::Elsewhere => Vec::new(),
            Landing::Origin if !self.dirty => {
                // Saved after arming: the sentinel step alone is not a leave.
                self.sentinel_armed = false;
                self.leaving = true;
                vec![GuardCommand::HistoryBack]
            }
            Landing::Origin if self.pending.is_some() => vec![GuardCommand::PushSentinel],
            Landing::Origin => {
                self.pending = Some(PendingExit::Back);
                vec![GuardCommand::PushSentinel, GuardCommand::ShowDialog]
            }
        }
    }

    /// "Leave Anyway".
    pub fn confirm(&mut self) -> Vec<GuardCommand> {
        match self.pending.take() {
            Some(PendingExit::Back) => {
                self.leaving = true;
                vec![GuardCommand::HideDialog, GuardCommand::HistoryBack]
            }
            Some(PendingExit::Link(path)) => {
                self.dirty = false;
                vec![
                    GuardCommand::HideDialog,
                    GuardCommand::Navigate {
                        path,
                        replace: self.sentinel_armed,
                    },
                ]
            }
            None => Vec::new(),
        }
    }

    /// "Stay Here". The sentinel was re-pushed when the dialog opened.
    pub fn cancel(&mut self) -> Vec<GuardCommand> {
        match self.pending.take() {
            Some(_) => vec![GuardCommand::HideDialog],
            None => Vec::new(),
        }
    }
}

/// The parts of a clicked anchor that decide whether the guard cares.
#[derive(Debug, Clone, Default)]
pub struct LinkClick {
    /// Raw `href` attribute as written.
    pub href: Option<String>,
    /// Resolved origin of the link.
    pub origin: String,
    /// Resolved path plus query string.
    pub path: String,
    /// Anchor carries `data-guard-bypass`.
    pub bypass: bool,
    /// Modifier keys, a non-primary button or `target="_blank"`.
    pub opens_elsewhere: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDisposition {
    Ignore,
    Guard(String),
}

pub const BYPASS_ATTRIBUTE: &str = "data-guard-bypass";

/// Decide whether a click on `link` while on `current_origin` +
/// `current_path` (path plus query) is a guarded in-app navigation.
pub fn classify_link(link: &LinkClick, current_origin: &str, current_path: &str) -> LinkDisposition {
    let href = match link.href.as_deref().map(str::trim) {
        Some(href) if !href.is_empty() => href,
        _ => return LinkDisposition::Ignore,
    };
    if link.bypass || link.opens_elsewhere || href.starts_with('#') {
        return LinkDisposition::Ignore;
    }
    if link.origin != current_origin {
        return LinkDisposition::Ignore;
    }
    if link.path == current_path {
        return LinkDisposition::Ignore;
    }
    LinkDisposition::Guard(link.path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// History stack executing guard commands the way the browser would,
    /// with popstate delivered synchronously. `rendered` is what the router
    /// shows: it follows every history move and router navigation, but not
    /// the guard's own pushes.
    struct FakeBrowser {
        entries: Vec<(String, Landing)>,
        index: usize,
        rendered: String,
        dialog: bool,
        dialogs_shown: usize,
        machine: GuardMachine,
    }

    impl FakeBrowser {
        fn on(url: &str) -> Self {
            Self {
                entries: vec![
                    ("/dashboard".to_string(), Landing::Elsewhere),
                    (url.to_string(), Landing::Elsewhere),
                ],
                index: 1,
                rendered: url.to_string(),
                dialog: false,
                dialogs_shown: 0,
                machine: GuardMachine::new(),
            }
        }

        fn url(&self) -> &str {
            &self.entries[self.index].0
        }

        fn urls(&self) -> Vec<&str> {
            self.entries.iter().map(|(url, _)| url.as_str()).collect()
        }

        fn run(&mut self, commands: Vec<GuardCommand>) {
            for command in commands {
                match command {
                    GuardCommand::MarkOrigin => self.entries[self.index].1 = Landing::Origin,
                    GuardCommand::PushSentinel => {
                        let url = self.url().to_string();
                        self.push(url, Landing::Sentinel);
                    }
                    GuardCommand::ShowDialog => {
                        self.dialog = true;
                        self.dialogs_shown += 1;
                    }
                    GuardCommand::HideDialog => self.dialog = false,
                    GuardCommand::HistoryBack => self.back(None),
                    GuardCommand::Navigate { path, replace } => {
                        if replace {
                            self.entries.truncate(self.index);
                            self.index -= 1;
                        }
                        self.push(path.clone(), Landing::Elsewhere);
                        self.rendered = path;
                    }
                }
            }
        }

        fn push(&mut self, url: String, landing: Landing) {
            self.entries.truncate(self.index + 1);
            self.entries.push((url, landing));
            self.index += 1;
        }

        fn back(&mut self, intent: Option<NavIntent>) {
            if self.index == 0 {
                return;
            }
            self.index -= 1;
            self.pop(intent);
        }

        fn forward(&mut self) {
            if self.index + 1 < self.entries.len() {
                self.index += 1;
                self.pop(None);
            }
        }

        /// Same-document fragment navigation: a new untagged entry plus a
        /// popstate.
        fn follow_fragment(&mut self, fragment: &str) {
            let url = format!("{}{}", FORM, fragment);
            self.push(url, Landing::Elsewhere);
            self.pop(None);
        }

        fn pop(&mut self, intent: Option<NavIntent>) {
            // The router's listener runs first.
            self.rendered = self.url().split('#').next().unwrap_or_default().to_string();
            let landing = self.entries[self.index].1;
            let commands = self.machine.on_popstate(landing, intent);
            self.run(commands);
        }

        fn set_dirty(&mut self, dirty: bool) {
            let commands = self.machine.set_dirty(dirty);
            self.run(commands);
        }

        fn confirm(&mut self) {
            let commands = self.machine.confirm();
            self.run(commands);
        }

        fn cancel(&mut self) {
            let commands = self.machine.cancel();
            self.run(commands);
        }
    }

    const FORM: &str = "/dashboard/property/apartment-form";

    #[test]
    fn clean_form_leaves_history_alone() {
        let mut browser = FakeBrowser::on(FORM);
        browser.set_dirty(false);
        assert_eq!(browser.entries.len(), 2);
        assert!(!browser.machine.should_prompt_on_unload());
        assert!(browser.machine.on_link_click("/dashboard".into()).is_empty());

        browser.back(None);
        assert_eq!(browser.url(), "/dashboard");
        assert_eq!(browser.dialogs_shown, 0);
    }

    #[test]
    fn sentinel_is_pushed_once() {
        let mut browser = FakeBrowser::on(FORM);
        browser.set_dirty(true);
        browser.set_dirty(false);
        browser.set_dirty(true);
        assert_eq!(browser.urls(), vec!["/dashboard", FORM, FORM]);
        assert_eq!(browser.entries[1].1, Landing::Origin);
        assert_eq!(browser.entries[2].1, Landing::Sentinel);
        assert!(browser.machine.should_prompt_on_unload());
    }

    #[test]
    fn confirmed_back_leaves_the_form() {
        let mut browser = FakeBrowser::on(FORM);
        browser.set_dirty(true);

        browser.back(None);
        assert_eq!(browser.dialogs_shown, 1);
        assert_eq!(browser.url(), FORM);
        assert_eq!(browser.rendered, FORM);

        browser.confirm();
        assert!(!browser.dialog);
        assert_eq!(browser.url(), "/dashboard");
        assert_eq!(browser.rendered, "/dashboard");
        assert_eq!(browser.dialogs_shown, 1);
    }

    #[test]
    fn declined_back_keeps_the_url_and_rearms() {
        let mut browser = FakeBrowser::on(FORM);
        browser.set_dirty(true);

        browser.back(None);
        browser.cancel();
        assert!(!browser.dialog);
        assert_eq!(browser.url(), FORM);

        // The next press asks again, exactly once.
        browser.back(None);
        assert_eq!(browser.dialogs_shown, 2);
        assert_eq!(browser.url(), FORM);
        assert_eq!(browser.rendered, FORM);
    }

    #[test]
    fn repeated_back_while_dialog_open_stays_on_the_form() {
        let mut browser = FakeBrowser::on(FORM);
        browser.set_dirty(true);
        browser.back(None);
        browser.back(None);
        browser.back(None);

        assert_eq!(browser.dialogs_shown, 1);
        assert!(browser.dialog);
        assert_eq!(browser.url(), FORM);
        assert_eq!(browser.rendered, FORM);

        browser.confirm();
        assert_eq!(browser.rendered, "/dashboard");
    }

    #[test]
    fn fragment_navigation_is_not_a_back_press() {
        let mut browser = FakeBrowser::on(FORM);
        browser.set_dirty(true);

        browser.follow_fragment("#notes");
        assert_eq!(browser.dialogs_shown, 0);
        assert_eq!(browser.url(), format!("{}#notes", FORM));

        // Back off the fragment lands on the sentinel: still no dialog.
        browser.back(None);
        assert_eq!(browser.dialogs_shown, 0);

        // Forward onto the fragment and back again, still quiet.
        browser.forward();
        browser.back(None);
        assert_eq!(browser.dialogs_shown, 0);

        // The next press is a real one and leaving works.
        browser.back(None);
        assert_eq!(browser.dialogs_shown, 1);
        browser.confirm();
        assert_eq!(browser.url(), "/dashboard");
        assert_eq!(browser.rendered, "/dashboard");
    }

    #[test]
    fn bypass_intent_leaves_without_dialog() {
        let mut browser = FakeBrowser::on(FORM);
        browser.set_dirty(true);

        browser.back(Some(NavIntent::BypassGuard));
        assert_eq!(browser.dialogs_shown, 0);
        assert_eq!(browser.url(), "/dashboard");
        assert!(!browser.machine.leaving);
    }

    #[test]
    fn bypass_from_a_fragment_entry_still_leaves() {
        let mut browser = FakeBrowser::on(FORM);
        browser.set_dirty(true);
        browser.follow_fragment("#notes");

        browser.back(Some(NavIntent::BypassGuard));
        assert_eq!(browser.dialogs_shown, 0);
        assert_eq!(browser.url(), "/dashboard");
    }

    #[test]
    fn guard_after_a_bypass_prompts_again() {
        let mut browser = FakeBrowser::on(FORM);
        browser.set_dirty(true);
        browser.back(Some(NavIntent::BypassGuard));

        // Back on a dirty form later: the guard is live again.
        browser.push(FORM.to_string(), Landing::Elsewhere);
        browser.machine = GuardMachine::new();
        browser.set_dirty(true);
        browser.back(None);
        assert_eq!(browser.dialogs_shown, 1);
    }

    #[test]
    fn saved_form_with_spent_sentinel_still_goes_back() {
        let mut browser = FakeBrowser::on(FORM);
        browser.set_dirty(true);
        browser.set_dirty(false);

        browser.back(None);
        assert_eq!(browser.dialogs_shown, 0);
        assert_eq!(browser.url(), "/dashboard");
    }

    #[test]
    fn link_click_waits_for_confirmation() {
        let mut machine = GuardMachine::new();
        machine.set_dirty(true);

        let commands = machine.on_link_click("/dashboard/people/residents".into());
        assert_eq!(commands, vec![GuardCommand::ShowDialog]);
        assert_eq!(
            machine.pending,
            Some(PendingExit::Link("/dashboard/people/residents".into()))
        );
        // A second click while the dialog is up is swallowed.
        assert!(machine.on_link_click("/dashboard".into()).is_empty());
        assert!(machine.intercepts_links());

        assert_eq!(
            machine.confirm(),
            vec![
                GuardCommand::HideDialog,
                GuardCommand::Navigate {
                    path: "/dashboard/people/residents".into(),
                    replace: true,
                }
            ]
        );
    }

    #[test]
    fn confirmed_link_replaces_the_sentinel() {
        let mut browser = FakeBrowser::on(FORM);
        browser.set_dirty(true);
        let commands = browser.machine.on_link_click("/dashboard/people/residents".into());
        browser.run(commands);
        browser.confirm();

        assert_eq!(browser.urls(), vec!["/dashboard", FORM, "/dashboard/people/residents"]);
        assert_eq!(browser.rendered, "/dashboard/people/residents");
    }

    #[test]
    fn declined_link_stays() {
        let mut machine = GuardMachine::new();
        machine.set_dirty(true);
        machine.on_link_click("/dashboard".into());
        assert_eq!(machine.cancel(), vec![GuardCommand::HideDialog]);
        assert!(machine.pending.is_none());
        assert!(machine.should_prompt_on_unload());
    }

    fn link(href: &str, origin: &str, path: &str) -> LinkClick {
        LinkClick {
            href: Some(href.to_string()),
            origin: origin.to_string(),
            path: path.to_string(),
            ..Default::default()
        }
    }

    const HERE: &str = "http://localhost:8080";

    #[test]
    fn classify_guards_in_app_links() {
        let click = link("/dashboard/people/residents", HERE, "/dashboard/people/residents");
        assert_eq!(
            classify_link(&click, HERE, FORM),
            LinkDisposition::Guard("/dashboard/people/residents".into())
        );
    }

    #[test]
    fn classify_ignores_exempt_links() {
        let external = link("https://example.org/help", "https://example.org", "/help");
        assert_eq!(classify_link(&external, HERE, FORM), LinkDisposition::Ignore);

        let fragment = link("#section", HERE, FORM);
        assert_eq!(classify_link(&fragment, HERE, FORM), LinkDisposition::Ignore);

        let same = link(FORM, HERE, FORM);
        assert_eq!(classify_link(&same, HERE, FORM), LinkDisposition::Ignore);

        let mut bypass = link("/dashboard", HERE, "/dashboard");
        bypass.bypass = true;
        assert_eq!(classify_link(&bypass, HERE, FORM), LinkDisposition::Ignore);

        let mut new_tab = link("/dashboard", HERE, "/dashboard");
        new_tab.opens_elsewhere = true;
        assert_eq!(classify_link(&new_tab, HERE, FORM), LinkDisposition::Ignore);

        let no_href = LinkClick::default();
        assert_eq!(classify_link(&no_href, HERE, FORM), LinkDisposition::Ignore);
    }
}
