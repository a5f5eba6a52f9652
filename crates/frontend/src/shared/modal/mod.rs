use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    /// Called on Escape, overlay click and the close button
    on_close: Callback<()>,
    /// Buttons rendered in the footer
    #[prop(optional, into)]
    actions: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let stop_propagation = move |ev: ev::MouseEvent| ev.stop_propagation();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
                {actions.map(|actions| view! { <div class="modal-footer">{actions.run()}</div> })}
            </div>
        </div>
    }
}

/// Two-button question. Escape and the overlay count as "cancel".
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into, default = "OK".to_string())] confirm_label: String,
    #[prop(into, default = "Cancel".to_string())] cancel_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = StoredValue::new(confirm_label);
    let cancel_label = StoredValue::new(cancel_label);

    view! {
        <Modal
            title=title
            on_close=on_cancel
            actions=move || {
                view! {
                    <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                        {cancel_label.get_value()}
                    </button>
                    <button class="button button--danger" on:click=move |_| on_confirm.run(())>
                        {confirm_label.get_value()}
                    </button>
                }
            }
        >
            <p class="modal-message">{message}</p>
        </Modal>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Outcome message shown after a save or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            MessageKind::Success => "Success",
            MessageKind::Error => "Something went wrong",
        }
    }
}

/// Shows `message` while it is `Some`; closing sets it back to `None`.
#[component]
pub fn MessageDialog(message: RwSignal<Option<Message>>) -> impl IntoView {
    let close = Callback::new(move |_| message.set(None));

    move || {
        message.get().map(|m| {
            let class = match m.kind {
                MessageKind::Success => "modal-message modal-message--success",
                MessageKind::Error => "modal-message modal-message--error",
            };
            view! {
                <Modal
                    title=m.title()
                    on_close=close
                    actions=move || {
                        view! {
                            <button class="button button--primary" on:click=move |_| close.run(())>
                                "OK"
                            </button>
                        }
                    }
                >
                    <p class=class>{m.text}</p>
                </Modal>
            }
        })
    }
}
