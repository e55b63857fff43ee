//! Floating chat widget.

use leptos::{ev, html, prelude::*, task};

use tracker_client::{ApiClient, ClientError, models::ChatReply};

use crate::timers::sleep_ms;

mod drag;

use drag::{CLICK_SUPPRESS_MS, DragTracker, LAUNCHER_SIZE, Point, Position, Viewport};

/// Longest message the input accepts.
pub const MAX_INPUT_CHARS: usize = 500;

const WELCOME: &str = "👋 Hello! How can I help you today?";

const CONNECTION_TROUBLE: &str = "Sorry, I'm having trouble connecting. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sender {
    User,
    Bot,
}

impl Sender {
    const fn class(self) -> &'static str {
        match self {
            Self::User => "message user",
            Self::Bot => "message bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ChatMessage {
    sender: Sender,
    text: String,
}

/// What the bot says for a relay outcome; every failure reads the same to the user.
fn reply_text(outcome: &Result<ChatReply, ClientError>) -> String {
    match outcome {
        Ok(reply) => reply.preferred_text().to_string(),
        Err(_) => CONNECTION_TROUBLE.to_string(),
    }
}

/// The message to send for the current input, or `None` when it is blank.
fn outgoing_text(input: &str) -> Option<String> {
    let text: String = input.trim().chars().take(MAX_INPUT_CHARS).collect();

    (!text.is_empty()).then_some(text)
}

/// Conversation signals; messages live only as long as the page.
#[derive(Debug, Clone, Copy)]
struct ChatState {
    messages: RwSignal<Vec<ChatMessage>>,
    input: RwSignal<String>,
    loading: RwSignal<bool>,
}

impl ChatState {
    fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            input: RwSignal::new(String::new()),
            loading: RwSignal::new(false),
        }
    }

    fn push(self, sender: Sender, text: String) {
        self.messages
            .update(|messages| messages.push(ChatMessage { sender, text }));
    }
}

fn send_message(client: ApiClient, chat: ChatState) {
    if chat.loading.get_untracked() {
        return;
    }

    let Some(text) = outgoing_text(&chat.input.get_untracked()) else {
        return;
    };

    chat.push(Sender::User, text.clone());
    chat.input.set(String::new());
    chat.loading.set(true);

    task::spawn_local(async move {
        let outcome = client.chatbot().send(&text).await;

        if let Err(error) = &outcome {
            leptos::logging::error!("Chatbot API error: {error}");
        }

        chat.push(Sender::Bot, reply_text(&outcome));
        chat.loading.set(false);
    });
}

/// Launcher drag signals.
#[derive(Debug, Clone, Copy)]
struct DragState {
    position: RwSignal<Position>,
    tracker: RwSignal<DragTracker>,
    suppress_click: RwSignal<bool>,
}

impl DragState {
    fn new() -> Self {
        Self {
            position: RwSignal::new(Position::default()),
            tracker: RwSignal::new(DragTracker::default()),
            suppress_click: RwSignal::new(false),
        }
    }

    fn press(self, grab: Point) {
        self.tracker.update(|tracker| tracker.press(grab));
    }

    /// Follow the pointer; returns `true` when a drag is in progress.
    fn move_to(self, pointer: Point) -> bool {
        if !self.tracker.with_untracked(DragTracker::is_pressed) {
            return false;
        }

        let viewport = current_viewport();
        let next = self
            .tracker
            .try_update(|tracker| tracker.drag_to(pointer, viewport))
            .flatten();

        if let Some(position) = next {
            self.position.set(position);
        }

        true
    }

    fn release(self) {
        if !self.tracker.with_untracked(DragTracker::is_pressed) {
            return;
        }

        let dragged = self
            .tracker
            .try_update(DragTracker::release)
            .unwrap_or(false);

        if dragged {
            self.suppress_click.set(true);

            task::spawn_local(async move {
                sleep_ms(CLICK_SUPPRESS_MS).await;
                self.suppress_click.set(false);
            });
        }
    }

    fn install_listeners(self) {
        // The widget lives in the app shell for the whole page, so the listeners do too.
        let _mouse_move = window_event_listener(ev::mousemove, move |event| {
            self.move_to(Point {
                x: f64::from(event.client_x()),
                y: f64::from(event.client_y()),
            });
        });

        let _mouse_up = window_event_listener(ev::mouseup, move |_| self.release());

        let _touch_move = window_event_listener(ev::touchmove, move |event| {
            let Some(touch) = event.touches().get(0) else {
                return;
            };

            let dragging = self.move_to(Point {
                x: f64::from(touch.client_x()),
                y: f64::from(touch.client_y()),
            });

            if dragging {
                event.prevent_default();
            }
        });

        let _touch_end = window_event_listener(ev::touchend, move |_| self.release());
    }
}

fn current_viewport() -> Viewport {
    let window = window();

    Viewport {
        width: window
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0),
        height: window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0),
    }
}

/// Offset of `pointer` from the launcher's top-left corner.
fn grab_offset(wrapper: NodeRef<html::Div>, pointer: Point) -> Point {
    wrapper.get_untracked().map_or(
        Point {
            x: LAUNCHER_SIZE / 2.0,
            y: LAUNCHER_SIZE / 2.0,
        },
        |element| {
            let rect = element.get_bounding_client_rect();

            Point {
                x: pointer.x - rect.left(),
                y: pointer.y - rect.top(),
            }
        },
    )
}

#[component]
fn MessageList(chat: ChatState, messages_end: NodeRef<html::Div>) -> impl IntoView {
    view! {
        <div class="messages" role="log" aria-live="polite">
            {move || {
                let messages = chat.messages.get();

                if messages.is_empty() {
                    view! { <div class="welcome-message">{WELCOME}</div> }.into_any()
                } else {
                    messages
                        .into_iter()
                        .map(|message| {
                            view! {
                                <div class=message.sender.class()>
                                    <div class="message-content">{message.text}</div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
            {move || {
                if chat.loading.get() {
                    view! {
                        <div class="message bot typing">
                            <div class="message-content">
                                <div class="typing-indicator">
                                    <span></span>
                                    <span></span>
                                    <span></span>
                                </div>
                            </div>
                        </div>
                    }
                        .into_any()
                } else {
                    ().into_any()
                }
            }}
            <div node_ref=messages_end></div>
        </div>
    }
}

#[component]
fn ChatWindow(client: ApiClient, chat: ChatState, open: RwSignal<bool>) -> impl IntoView {
    let messages_end = NodeRef::<html::Div>::new();
    let client_for_key = client.clone();

    Effect::new(move |_| {
        chat.messages.track();
        chat.loading.track();

        if let Some(end) = messages_end.get_untracked() {
            end.scroll_into_view();
        }
    });

    view! {
        <div class="chatbot" role="dialog" aria-label="Chatbot">
            <div class="chat-header">
                <span>"ChatBot"</span>
                <div class="header-actions">
                    {move || {
                        if chat.messages.with(Vec::is_empty) {
                            ().into_any()
                        } else {
                            view! {
                                <button
                                    type="button"
                                    class="clear-btn"
                                    title="Clear chat"
                                    aria-label="Clear chat history"
                                    on:click=move |_| chat.messages.set(Vec::new())
                                >
                                    "🗑️"
                                </button>
                            }
                                .into_any()
                        }
                    }}
                    <button
                        type="button"
                        class="close-btn"
                        aria-label="Close chatbot"
                        on:click=move |_| open.set(false)
                    >
                        "×"
                    </button>
                </div>
            </div>
            <div class="chat-body">
                <MessageList chat=chat messages_end=messages_end />
                <div class="chat-input">
                    <input
                        type="text"
                        placeholder="Type your message..."
                        maxlength={MAX_INPUT_CHARS.to_string()}
                        aria-label="Message input"
                        prop:value=move || chat.input.get()
                        disabled=move || chat.loading.get()
                        on:input=move |event| chat.input.set(event_target_value(&event))
                        on:keydown=move |event: ev::KeyboardEvent| {
                            if event.key() == "Enter" && !event.shift_key() {
                                event.prevent_default();
                                send_message(client_for_key.clone(), chat);
                            }
                        }
                    />
                    <button
                        type="button"
                        class="send-btn"
                        aria-label="Send message"
                        disabled=move || {
                            chat.loading.get() || chat.input.with(|input| input.trim().is_empty())
                        }
                        on:click=move |_| send_message(client.clone(), chat)
                    >
                        {move || if chat.loading.get() { "⏳" } else { "Send" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Draggable launcher plus the chat window it toggles.
#[component]
pub fn ChatWidget(
    /// Client used for relay calls.
    client: ApiClient,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let chat = ChatState::new();
    let drag = DragState::new();
    let wrapper = NodeRef::<html::Div>::new();

    drag.install_listeners();

    let toggle = move || {
        if !drag.suppress_click.get_untracked() {
            open.update(|open| *open = !*open);
        }
    };

    view! {
        <div
            class="chatbot-wrapper"
            node_ref=wrapper
            style:right=move || format!("{}px", drag.position.get().right)
            style:bottom=move || format!("{}px", drag.position.get().bottom)
        >
            <div
                class=move || {
                    if drag.tracker.with(DragTracker::is_pressed) {
                        "chatbot-logo dragging"
                    } else {
                        "chatbot-logo"
                    }
                }
                role="button"
                tabindex="0"
                aria-label="Open chatbot"
                on:mousedown=move |event: ev::MouseEvent| {
                    if open.get_untracked() {
                        return;
                    }

                    event.prevent_default();
                    drag.press(grab_offset(
                        wrapper,
                        Point {
                            x: f64::from(event.client_x()),
                            y: f64::from(event.client_y()),
                        },
                    ));
                }
                on:touchstart=move |event: ev::TouchEvent| {
                    if open.get_untracked() {
                        return;
                    }

                    let Some(touch) = event.touches().get(0) else {
                        return;
                    };

                    event.prevent_default();
                    drag.press(grab_offset(
                        wrapper,
                        Point {
                            x: f64::from(touch.client_x()),
                            y: f64::from(touch.client_y()),
                        },
                    ));
                }
                on:click=move |_| toggle()
                on:keydown=move |event: ev::KeyboardEvent| {
                    if event.key() == "Enter" {
                        toggle();
                    }
                }
            >
                <span class="chatbot-logo-icon" aria-hidden="true">"💬"</span>
            </div>
            {move || {
                if open.get() {
                    view! { <ChatWindow client={client.clone()} chat=chat open=open /> }.into_any()
                } else {
                    ().into_any()
                }
            }}
        </div>
    }
}
