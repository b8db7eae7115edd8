use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::schedule::TimerSlot;
use crate::core::settings::AppSettings;
use crate::core::{clipboard, format, timing};

use super::charset::{CharClass, GenerationConfig};
use super::session::{GeneratorSession, Output};

#[component]
pub fn GeneratorView() -> Element {
    let settings = try_use_context::<AppSettings>().unwrap_or_default();
    let interval_ms = settings.auto_generate_interval_ms;

    // The first string is generated as the view mounts.
    let mut session = use_signal(move || {
        let mut session = GeneratorSession::new(&settings);
        let _ = session.generate(&mut rand::thread_rng());
        session
    });

    let auto_timer: Rc<RefCell<TimerSlot>> = use_hook(|| Rc::new(RefCell::new(TimerSlot::default())));
    {
        let auto_timer = auto_timer.clone();
        use_drop(move || {
            auto_timer.borrow_mut().cancel();
            debug!("generator view dropped; auto-generate timer cancelled");
        });
    }

    let mut set_auto = {
        let auto_timer = auto_timer.clone();
        move |enabled: bool| {
            if enabled {
                let epoch = session.with_mut(|s| s.auto.enable());
                let task = spawn(async move {
                    let mut session = session;
                    timing::run_interval(interval_ms, move || {
                        session.with_mut(|s| s.auto_tick(epoch, &mut rand::thread_rng()))
                    })
                    .await;
                    debug!(epoch, "auto-generate loop finished");
                });
                auto_timer.borrow_mut().arm(task);
                debug!(epoch, interval_ms, "auto-generate armed");
            } else {
                session.with_mut(|s| s.auto.disable());
                auto_timer.borrow_mut().cancel();
                debug!("auto-generate stopped");
            }
        }
    };

    let snapshot = session();
    let config = snapshot.config.clone();
    let is_auto = snapshot.auto.is_running();
    let output_text = snapshot.output.text().to_string();
    let output_class = match snapshot.output {
        Output::Message(_) => "tool-generator__output tool-generator__output--message",
        _ => "tool-generator__output",
    };
    let interval_label = format!("{:.0}", interval_ms as f64 / 1000.0);
    let min_length = GenerationConfig::MIN_LENGTH;
    let max_length = GenerationConfig::MAX_LENGTH;

    let history_items = snapshot.history.iter().map(|entry| {
        let copy_value = entry.value.clone();
        let length_label = format::format_length(entry.length);
        rsx! {
            li { key: "{entry.id}", class: "tool-generator__history-item",
                div { class: "tool-generator__history-text",
                    span { class: "tool-generator__history-value", "{entry.value}" }
                    span { class: "tool-generator__history-meta", "{length_label} • {entry.timestamp}" }
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    title: "Copy to clipboard",
                    onclick: move |_| clipboard::copy_detached(copy_value.clone()),
                    "Copy"
                }
            }
        }
    });

    rsx! {
        article { class: "tool tool-generator",
            div { class: "tool-generator__grid",
                div { class: "tool-generator__config",
                    label { class: "tool-generator__length",
                        "String Length: {config.length}"
                        input {
                            r#type: "range",
                            min: "{min_length}",
                            max: "{max_length}",
                            value: "{config.length}",
                            oninput: move |evt: FormEvent| {
                                if let Ok(length) = evt.value().parse::<usize>() {
                                    session.with_mut(|s| s.set_length(length));
                                }
                            },
                        }
                    }

                    fieldset { class: "tool-generator__classes",
                        legend { "Character Types" }
                        for class in CharClass::ALL {
                            label { key: "{class:?}", class: "tool-generator__toggle",
                                input {
                                    r#type: "checkbox",
                                    checked: config.is_enabled(class),
                                    onchange: move |evt: FormEvent| {
                                        session.with_mut(|s| s.toggle(class, evt.checked()));
                                    },
                                }
                                span { {class.label()} }
                            }
                        }
                    }

                    label { class: "tool-generator__toggle tool-generator__toggle--auto",
                        input {
                            r#type: "checkbox",
                            checked: is_auto,
                            onchange: move |evt: FormEvent| set_auto(evt.checked()),
                        }
                        span { "Auto-generate every {interval_label} seconds" }
                    }
                }

                div { class: "tool-generator__result",
                    label { r#for: "generated-string", "Generated String" }
                    textarea {
                        id: "generated-string",
                        class: "{output_class}",
                        readonly: true,
                        value: "{output_text}",
                    }
                    div { class: "tool-generator__actions",
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            onclick: move |_| {
                                session.with_mut(|s| {
                                    let _ = s.generate(&mut rand::thread_rng());
                                });
                            },
                            "Generate New String"
                        }
                        button {
                            r#type: "button",
                            class: "button button--accent",
                            onclick: move |_| {
                                let text = session.peek().output.text().to_string();
                                clipboard::copy_detached(text);
                            },
                            "Copy"
                        }
                    }
                }
            }

            if !snapshot.history.is_empty() {
                section { class: "tool-generator__history",
                    div { class: "tool-generator__history-header",
                        h3 { "Recent Strings" }
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            onclick: move |_| session.with_mut(|s| s.clear_history()),
                            "Clear History"
                        }
                    }
                    ul { class: "tool-generator__history-list", {history_items} }
                }
            }
        }
    }
}
