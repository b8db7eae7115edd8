use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::schedule::TimerSlot;
use crate::core::settings::AppSettings;
use crate::core::timing;

use super::backend::{MockTranslator, TranslateError, Translator};
use super::languages::LANGUAGES;
use super::session::{DebounceTicket, TranslationRequest, TranslatorSession};

type SenderSlot = Rc<RefCell<Option<UnboundedSender<TranslatorEvent>>>>;

#[component]
pub fn TranslatorView() -> Element {
    let settings = try_use_context::<AppSettings>().unwrap_or_default();
    let debounce_ms = settings.translate_debounce_ms;
    let mock_delay_ms = settings.mock_translation_delay_ms;
    let default_target = settings.default_target_language.clone();

    let provided: Option<Rc<dyn Translator>> = try_use_context::<Rc<dyn Translator>>();
    let backend: Rc<dyn Translator> = use_hook(move || {
        provided.unwrap_or_else(|| Rc::new(MockTranslator::new(mock_delay_ms)) as Rc<dyn Translator>)
    });

    let session = use_signal(move || TranslatorSession::new(&default_target));

    let debounce_timer: Rc<RefCell<TimerSlot>> =
        use_hook(|| Rc::new(RefCell::new(TimerSlot::default())));
    {
        let debounce_timer = debounce_timer.clone();
        use_drop(move || {
            debounce_timer.borrow_mut().cancel();
            debug!("translator view dropped; debounce timer cancelled");
        });
    }

    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let session_ref = session;
        let backend_ref = backend.clone();
        let timer_ref = debounce_timer.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<TranslatorEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let backend = backend_ref.clone();
            let debounce_timer = timer_ref.clone();
            let mut session_signal = session_ref;

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        TranslatorEvent::InputChanged(text) => {
                            let ticket = session_signal.with_mut(|s| s.set_input(text));
                            rearm_debounce(&debounce_timer, sender_slot.clone(), debounce_ms, ticket);
                        }
                        TranslatorEvent::TargetChanged(code) => {
                            let ticket = session_signal.with_mut(|s| s.set_target(&code));
                            rearm_debounce(&debounce_timer, sender_slot.clone(), debounce_ms, ticket);
                        }
                        TranslatorEvent::DebounceElapsed(ticket) => {
                            debug!(edit = ticket.edit, "debounce elapsed");
                            let request = session_signal.with_mut(|s| s.debounce_elapsed(ticket));
                            if let Some(request) = request {
                                session_signal.with_mut(|s| s.begin(&request));
                                queue_translation(sender_slot.clone(), backend.clone(), request);
                            }
                        }
                        TranslatorEvent::TranslateNow => {
                            debounce_timer.borrow_mut().cancel();
                            let request = session_signal.with_mut(|s| s.request_now());
                            if let Some(request) = request {
                                session_signal.with_mut(|s| s.begin(&request));
                                queue_translation(sender_slot.clone(), backend.clone(), request);
                            }
                        }
                        TranslatorEvent::Finished { request_id, result } => {
                            if let Err(err) = &result {
                                error!(request_id, "translation error: {err}");
                            }
                            let applied = session_signal.with_mut(|s| s.complete(request_id, result));
                            if !applied {
                                debug!(request_id, "discarded superseded translation");
                            }
                        }
                        TranslatorEvent::Clear => {
                            debounce_timer.borrow_mut().cancel();
                            session_signal.with_mut(|s| s.clear());
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    let send_event = move |event: TranslatorEvent| {
        coroutine.send(event);
    };

    let snapshot = session();
    let is_loading = snapshot.is_loading();
    let can_translate = snapshot.can_request();
    let backend_name = backend.name().to_string();

    let output_panel = if is_loading {
        rsx! {
            div { class: "tool-translator__spinner", role: "status", aria_label: "Translating" }
        }
    } else if let Some(err) = snapshot.error() {
        rsx! {
            div { class: "tool-translator__error", "⚠️ {err}" }
        }
    } else if snapshot.output.is_empty() {
        rsx! {
            p { class: "tool-translator__placeholder", "Translation will appear here..." }
        }
    } else {
        rsx! {
            p { class: "tool-translator__result", "{snapshot.output}" }
        }
    };

    rsx! {
        article { class: "tool tool-translator",
            div { class: "tool-translator__language",
                label { r#for: "target-language", "Select Target Language" }
                select {
                    id: "target-language",
                    value: "{snapshot.target}",
                    oninput: move |evt: FormEvent| send_event(TranslatorEvent::TargetChanged(evt.value())),
                    for lang in LANGUAGES.iter() {
                        option {
                            key: "{lang.code}",
                            value: "{lang.code}",
                            selected: lang.code == snapshot.target,
                            "{lang.name}"
                        }
                    }
                }
            }

            div { class: "tool-translator__panes",
                div { class: "tool-translator__pane",
                    label { r#for: "translator-input", "English Text" }
                    textarea {
                        id: "translator-input",
                        class: "tool-translator__input",
                        placeholder: "Enter text to translate...",
                        value: "{snapshot.input}",
                        oninput: move |evt: FormEvent| send_event(TranslatorEvent::InputChanged(evt.value())),
                    }
                }
                div { class: "tool-translator__pane",
                    span { class: "tool-translator__label", "Translated Text" }
                    div { class: "tool-translator__output", {output_panel} }
                }
            }

            div { class: "tool-translator__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: !can_translate,
                    onclick: move |_| send_event(TranslatorEvent::TranslateNow),
                    if is_loading { "Translating..." } else { "Translate" }
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| send_event(TranslatorEvent::Clear),
                    "Clear"
                }
            }

            p { class: "tool-translator__note",
                "Translations come from the {backend_name} backend. Provide a different backend to use a real service."
            }
        }
    }
}

fn rearm_debounce(
    timer: &Rc<RefCell<TimerSlot>>,
    sender_slot: SenderSlot,
    debounce_ms: u64,
    ticket: Option<DebounceTicket>,
) {
    let mut timer = timer.borrow_mut();
    let Some(ticket) = ticket else {
        timer.cancel();
        return;
    };
    let Some(sender) = sender_slot.borrow().as_ref().cloned() else {
        return;
    };
    let task = spawn(async move {
        timing::sleep_ms(debounce_ms).await;
        let _ = sender.unbounded_send(TranslatorEvent::DebounceElapsed(ticket));
    });
    timer.arm(task);
}

fn queue_translation(sender_slot: SenderSlot, backend: Rc<dyn Translator>, request: TranslationRequest) {
    let Some(sender) = sender_slot.borrow().as_ref().cloned() else {
        return;
    };
    spawn(async move {
        debug!(
            request_id = request.id,
            lang = %request.target,
            backend = backend.name(),
            "translation started"
        );
        let result = backend.translate(&request.text, &request.target).await;
        let _ = sender.unbounded_send(TranslatorEvent::Finished {
            request_id: request.id,
            result,
        });
    });
}

#[derive(Debug)]
enum TranslatorEvent {
    InputChanged(String),
    TargetChanged(String),
    DebounceElapsed(DebounceTicket),
    TranslateNow,
    Finished {
        request_id: u64,
        result: Result<String, TranslateError>,
    },
    Clear,
}
