//! Unsaved-changes guard for edit forms.
//!
//! Mount [`NavigationGuard`] inside a form with its dirty flag. While the
//! flag is set, closing or reloading the tab triggers the browser's native
//! prompt, and in-app link clicks and the back button ask for confirmation.

pub mod machine;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{BeforeUnloadEvent, Element, Event, EventTarget, HtmlAnchorElement, MouseEvent, PopStateEvent};

use crate::shared::modal::ConfirmDialog;
use machine::{
    classify_link, GuardCommand, GuardMachine, Landing, LinkClick, LinkDisposition, NavIntent,
    BYPASS_ATTRIBUTE,
};

/// Programmatic navigation intents, provided once at the app root.
#[derive(Clone, Copy)]
pub struct NavigationIntents {
    intent: StoredValue<Option<NavIntent>>,
    active_guards: StoredValue<usize>,
}

impl NavigationIntents {
    pub fn new() -> Self {
        Self {
            intent: StoredValue::new(None),
            active_guards: StoredValue::new(0),
        }
    }

    /// `history.back()` that a mounted guard lets through without a dialog.
    pub fn go_back_unguarded(&self) {
        // Без guard намерение никто не заберёт
        if self.active_guards.get_value() > 0 {
            self.intent.set_value(Some(NavIntent::BypassGuard));
        }
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }

    fn take(&self) -> Option<NavIntent> {
        self.intent
            .try_update_value(Option::take)
            .flatten()
    }

    fn guard_mounted(&self) {
        self.active_guards.update_value(|n| *n += 1);
    }

    fn guard_unmounted(&self) {
        self.active_guards.update_value(|n| *n = n.saturating_sub(1));
        if self.active_guards.get_value() == 0 {
            self.intent.set_value(None);
        }
    }
}

impl Default for NavigationIntents {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_navigation_intents() -> NavigationIntents {
    use_context::<NavigationIntents>().expect("NavigationIntents not provided in context")
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(target: EventTarget, event: &'static str, capture: bool, f: impl FnMut(Event) + 'static) -> Self {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        if target
            .add_event_listener_with_callback_and_bool(event, callback.as_ref().unchecked_ref(), capture)
            .is_err()
        {
            log::warn!("could not attach '{}' listener for navigation guard", event);
        }
        Self {
            target,
            event,
            capture,
            callback,
        }
    }

    fn detach(&self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.event,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

/// Per-guard browser state. Lives in a thread-local so the reactive closures
/// only capture the guard id.
struct GuardRuntime {
    machine: GuardMachine,
    dialog_open: RwSignal<bool>,
    navigate: Rc<dyn Fn(&str, bool)>,
    listeners: Vec<Listener>,
}

thread_local! {
    static GUARDS: RefCell<HashMap<u64, GuardRuntime>> = RefCell::new(HashMap::new());
    static NEXT_GUARD_ID: Cell<u64> = const { Cell::new(1) };
}

/// History state tagging guard `id`'s entries. The URL of a tagged entry is
/// left untouched, so the router keeps rendering the form on it.
fn entry_tag(id: u64, landing: Landing) -> Option<String> {
    match landing {
        Landing::Origin => Some(format!("nav-guard:{}:origin", id)),
        Landing::Sentinel => Some(format!("nav-guard:{}:sentinel", id)),
        Landing::Elsewhere => None,
    }
}

fn landing_of(id: u64, tag: Option<&str>) -> Landing {
    let Some(tag) = tag else {
        return Landing::Elsewhere;
    };
    [Landing::Origin, Landing::Sentinel]
        .into_iter()
        .find(|landing| entry_tag(id, *landing).as_deref() == Some(tag))
        .unwrap_or(Landing::Elsewhere)
}

struct Effects {
    id: u64,
    dialog_open: RwSignal<bool>,
    navigate: Rc<dyn Fn(&str, bool)>,
}

impl Effects {
    fn tag(&self, landing: Landing) -> JsValue {
        entry_tag(self.id, landing)
            .map(|tag| JsValue::from_str(&tag))
            .unwrap_or(JsValue::NULL)
    }

    fn run(&self, commands: Vec<GuardCommand>) {
        let history = web_sys::window().and_then(|w| w.history().ok());
        for command in commands {
            match command {
                GuardCommand::MarkOrigin => {
                    if let Some(h) = &history {
                        let _ = h.replace_state_with_url(&self.tag(Landing::Origin), "", None);
                    }
                }
                GuardCommand::PushSentinel => {
                    if let Some(h) = &history {
                        let _ = h.push_state_with_url(&self.tag(Landing::Sentinel), "", None);
                    }
                }
                GuardCommand::ShowDialog => self.dialog_open.set(true),
                GuardCommand::HideDialog => self.dialog_open.set(false),
                GuardCommand::HistoryBack => {
                    if let Some(h) = &history {
                        let _ = h.back();
                    }
                }
                GuardCommand::Navigate { path, replace } => (self.navigate)(&path, replace),
            }
        }
    }
}

/// Step the machine of guard `id` and execute the result. Commands run after
/// the registry borrow ends, since navigating may unmount the guard.
fn dispatch(id: u64, step: impl FnOnce(&mut GuardMachine) -> Vec<GuardCommand>) {
    let prepared = GUARDS.with(|guards| {
        let mut guards = guards.borrow_mut();
        let runtime = guards.get_mut(&id)?;
        let commands = step(&mut runtime.machine);
        Some((
            commands,
            Effects {
                id,
                dialog_open: runtime.dialog_open,
                navigate: runtime.navigate.clone(),
            },
        ))
    });
    if let Some((commands, effects)) = prepared {
        effects.run(commands);
    }
}

fn read_machine<R>(id: u64, f: impl FnOnce(&GuardMachine) -> R) -> Option<R> {
    GUARDS.with(|guards| guards.borrow().get(&id).map(|runtime| f(&runtime.machine)))
}

fn current_location() -> Option<(String, String)> {
    let location = web_sys::window()?.location();
    let origin = location.origin().ok()?;
    let path = format!("{}{}", location.pathname().ok()?, location.search().ok()?);
    Some((origin, path))
}

fn link_click_of(event: &MouseEvent) -> Option<LinkClick> {
    let target = event.target()?;
    let element = target.dyn_ref::<Element>()?;
    let anchor = element.closest("a").ok()??.dyn_into::<HtmlAnchorElement>().ok()?;
    let opens_elsewhere = event.button() != 0
        || event.meta_key()
        || event.ctrl_key()
        || event.shift_key()
        || event.alt_key()
        || matches!(anchor.target().as_str(), "_blank" | "_top" | "_parent");
    Some(LinkClick {
        href: anchor.get_attribute("href"),
        origin: anchor.origin(),
        path: format!("{}{}", anchor.pathname(), anchor.search()),
        bypass: anchor.has_attribute(BYPASS_ATTRIBUTE),
        opens_elsewhere,
    })
}

fn attach_listeners(id: u64, intents: NavigationIntents) -> Vec<Listener> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let mut listeners = Vec::new();

    listeners.push(Listener::attach(window.clone().into(), "beforeunload", false, move |ev: Event| {
        if read_machine(id, GuardMachine::should_prompt_on_unload) == Some(true) {
            ev.prevent_default();
            if let Some(ev) = ev.dyn_ref::<BeforeUnloadEvent>() {
                ev.set_return_value("You have unsaved changes.");
            }
        }
    }));

    // Фаза capture: клик виден раньше обработчика роутера
    if let Some(document) = window.document() {
        listeners.push(Listener::attach(document.into(), "click", true, move |ev: Event| {
            if read_machine(id, GuardMachine::intercepts_links) != Some(true) {
                return;
            }
            let Some(click) = ev.dyn_ref::<MouseEvent>().and_then(link_click_of) else {
                return;
            };
            let Some((origin, path)) = current_location() else {
                return;
            };
            if let LinkDisposition::Guard(target) = classify_link(&click, &origin, &path) {
                ev.prevent_default();
                ev.stop_propagation();
                dispatch(id, |m| m.on_link_click(target));
            }
        }));
    }

    listeners.push(Listener::attach(window.into(), "popstate", false, move |ev: Event| {
        let landing = ev
            .dyn_ref::<PopStateEvent>()
            .map(|ev| landing_of(id, ev.state().as_string().as_deref()))
            .unwrap_or(Landing::Elsewhere);
        let intent = intents.take();
        dispatch(id, |m| m.on_popstate(landing, intent));
    }));

    listeners
}

#[component]
pub fn NavigationGuard(#[prop(into)] has_unsaved_changes: Signal<bool>) -> impl IntoView {
    let id = NEXT_GUARD_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });
    let intents = use_navigation_intents();
    let dialog_open = RwSignal::new(false);
    let navigate = use_navigate();

    let runtime = GuardRuntime {
        machine: GuardMachine::new(),
        dialog_open,
        navigate: Rc::new(move |path: &str, replace: bool| {
            navigate(
                path,
                NavigateOptions {
                    replace,
                    ..Default::default()
                },
            )
        }),
        listeners: attach_listeners(id, intents),
    };
    GUARDS.with(|guards| guards.borrow_mut().insert(id, runtime));
    intents.guard_mounted();

    on_cleanup(move || {
        let runtime = GUARDS.with(|guards| guards.borrow_mut().remove(&id));
        if let Some(runtime) = runtime {
            for listener in &runtime.listeners {
                listener.detach();
            }
        }
        intents.guard_unmounted();
    });

    Effect::new(move |_| {
        let dirty = has_unsaved_changes.get();
        dispatch(id, |m| m.set_dirty(dirty));
    });

    view! {
        <Show when=move || dialog_open.get()>
            <ConfirmDialog
                title="Unsaved changes"
                message="You have unsaved changes. If you leave this page they will be lost."
                confirm_label="Leave Anyway"
                cancel_label="Stay Here"
                on_confirm=Callback::new(move |_| dispatch(id, GuardMachine::confirm))
                on_cancel=Callback::new(move |_| dispatch(id, GuardMachine::cancel))
            />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landings_are_read_from_this_guards_tags() {
        assert_eq!(landing_of(3, Some("nav-guard:3:origin")), Landing::Origin);
        assert_eq!(landing_of(3, Some("nav-guard:3:sentinel")), Landing::Sentinel);

        // Another guard's entries, router state and fragment entries.
        assert_eq!(landing_of(4, Some("nav-guard:3:origin")), Landing::Elsewhere);
        assert_eq!(landing_of(3, None), Landing::Elsewhere);
        assert_eq!(landing_of(3, Some("other")), Landing::Elsewhere);
    }
}
