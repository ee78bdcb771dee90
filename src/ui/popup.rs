/// Popup UI for YTC

use std::rc::Rc;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};
use patternfly_yew::prelude::*;
use crate::bridge::{ChromeExtension, HttpBackend};
use crate::chat_data::{Author, Message};
use crate::clock::current_time;
use crate::config::RelayConfig;
use crate::message_list::{MessageAction, MessageList};
use crate::relay::{ChatRelay, ChatView};
use crate::ui::components::MessageBubble;
use crate::ui::scroll_to_bottom;

type PopupRelay = ChatRelay<ChromeExtension, HttpBackend>;

/// Renders into the popup's message list
#[derive(Clone)]
struct PopupView {
    messages: UseReducerHandle<MessageList>,
}

impl ChatView for PopupView {
    fn render_message(&self, text: &str, author: Author) {
        self.messages
            .dispatch(MessageAction::Append(Message::new(text, author, current_time())));
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let messages = use_reducer(MessageList::new);
    let input_ref = use_node_ref();
    let messages_box_ref = use_node_ref();
    let relay: Rc<PopupRelay> = use_memo((), |_| {
        ChatRelay::new(ChromeExtension, HttpBackend, RelayConfig::default())
    });

    let view = PopupView {
        messages: messages.clone(),
    };

    // Greeting on mount
    {
        let relay = relay.clone();
        let view = view.clone();
        use_effect_with((), move |_| {
            relay.greet(&view);
            || ()
        });
    }

    // Keep the newest message in sight
    {
        let messages_box_ref = messages_box_ref.clone();
        use_effect_with(messages.len(), move |_| {
            if let Some(messages_box) = messages_box_ref.cast::<Element>() {
                scroll_to_bottom(&messages_box);
            }
            || ()
        });
    }

    let on_submit = {
        let input_ref = input_ref.clone();
        let relay = relay.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };

            let mut value = input.value();
            if PopupRelay::submit(&relay, &mut value, &view, |task| spawn_local(task)) {
                input.set_value(&value);
            }
        })
    };

    html! {
        <div class="chat-popup">
            <h1 class="popup-title">{"YTC"}</h1>

            <div class="messages_box" ref={messages_box_ref}>
                {for messages.iter().map(|message| html! {
                    <MessageBubble key={message.id.to_string()} message={message.clone()} />
                })}
            </div>

            <form id="messageForm" class="message-form" onsubmit={on_submit}>
                <input
                    id="messageInput"
                    class="pf-v5-c-form-control"
                    type="text"
                    placeholder="Ask about this video..."
                    autocomplete="off"
                    ref={input_ref}
                />
                <Button r#type={ButtonType::Submit} variant={ButtonVariant::Primary}>
                    {"Send"}
                </Button>
            </form>
        </div>
    }
}
