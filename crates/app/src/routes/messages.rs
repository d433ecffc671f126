use dioxus::prelude::*;
use shared_types::{conversations_for, Conversation, MAX_MESSAGE_CHARS};
use shared_ui::{Button, Card, CardContent, FormMessage, PageHeader, SkeletonList, Textarea};

use crate::auth::{use_api, use_auth};
use crate::format_helpers::{format_time_short, now_rfc3339};
use crate::use_features;

/// Conversation list and message panel. Threads are derived from the
/// signed-in user's cases and live only in this view.
#[component]
pub fn Messages() -> Element {
    let features = use_features();
    let api = use_api();
    let mut auth = use_auth();
    let role = auth.role();

    let mut threads = use_signal(Vec::<Conversation>::new);
    let mut selected = use_signal(|| Option::<String>::None);
    let mut draft = use_signal(String::new);

    let cases = use_resource(move || {
        let api = api.clone();
        async move {
            let result = api.list_cases().await;
            auth.observe(&result);
            result
        }
    });

    use_effect(move || {
        if let Some(Ok(list)) = &*cases.read() {
            if threads.peek().is_empty() {
                threads.set(conversations_for(role, list));
            }
        }
    });

    if !features.messaging {
        return rsx! {
            div { class: "empty-state", p { "Messaging is not available." } }
        };
    }

    let sender = auth.identity().name;
    let mut send = move || {
        let Some(id) = selected() else { return };
        let body = draft();
        let sent = threads
            .write()
            .iter_mut()
            .find(|t| t.id == id)
            .and_then(|t| t.push_outgoing(&sender, &body, &now_rfc3339()).cloned());
        if sent.is_some() {
            draft.set(String::new());
        }
    };

    let active = selected().and_then(|id| threads.read().iter().find(|t| t.id == id).cloned());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./messages.css") }
        PageHeader { title: "Messages", subtitle: "Talk to the people on your cases" }

        match &*cases.read() {
            None => rsx! { Card { CardContent { SkeletonList { rows: 4 } } } },
            Some(Err(err)) => rsx! { FormMessage { message: err.message.clone() } },
            Some(Ok(_)) if threads.read().is_empty() => rsx! {
                div { class: "empty-state",
                    p { "Conversations appear once a case has someone to talk to." }
                }
            },
            Some(Ok(_)) => rsx! {
                div { class: "messages-layout",
                    ThreadList {
                        threads: threads(),
                        selected: selected(),
                        on_select: move |id: String| {
                            if let Some(t) = threads.write().iter_mut().find(|t| t.id == id) {
                                t.mark_read();
                            }
                            selected.set(Some(id));
                        },
                    }
                    section { class: "message-panel",
                        match active {
                            Some(thread) => rsx! {
                                header { class: "message-panel-header", "{thread.participant}" }
                                MessageLog { thread }
                                form {
                                    class: "message-composer",
                                    onsubmit: move |evt: FormEvent| {
                                        evt.prevent_default();
                                        send();
                                    },
                                    Textarea {
                                        name: "message-body",
                                        value: draft(),
                                        rows: 2,
                                        max_chars: MAX_MESSAGE_CHARS,
                                        placeholder: "Write a message",
                                        on_input: move |e: FormEvent| draft.set(e.value()),
                                    }
                                    Button { button_type: "submit", disabled: draft().trim().is_empty(), "Send" }
                                }
                            },
                            None => rsx! {
                                p { class: "empty-state", "Select a conversation." }
                            },
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn ThreadList(threads: Vec<Conversation>, selected: Option<String>, on_select: EventHandler<String>) -> Element {
    rsx! {
        ul { class: "thread-list",
            for thread in threads {
                {
                    let id = thread.id.clone();
                    let class = if selected.as_deref() == Some(thread.id.as_str()) { "thread active" } else { "thread" };
                    rsx! {
                        li { key: "{thread.id}", class,
                            onclick: move |_| on_select.call(id.clone()),
                            div { class: "thread-main",
                                span { class: "thread-name", "{thread.participant}" }
                                span { class: "thread-preview", "{thread.preview()}" }
                            }
                            if thread.unread > 0 {
                                span { class: "thread-unread", "{thread.unread}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MessageLog(thread: Conversation) -> Element {
    if thread.messages.is_empty() {
        return rsx! {
            p { class: "empty-state", "No messages with {thread.participant} yet." }
        };
    }
    rsx! {
        ol { class: "message-log",
            for msg in thread.messages {
                li { key: "{msg.id}", class: if msg.outgoing { "message outgoing" } else { "message" },
                    p { class: "message-body", "{msg.body}" }
                    span { class: "message-time", "{format_time_short(&msg.sent_at)}" }
                }
            }
        }
    }
}
