/// Reusable UI components

use crate::chat_data::Message;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MessageBubbleProps {
    pub message: Message,
}

/// One chat bubble: content above its timestamp
#[function_component(MessageBubble)]
pub fn message_bubble(props: &MessageBubbleProps) -> Html {
    let message = &props.message;

    html! {
        <div class={classes!("message-container", message.author.css_class())}>
            <div class="message-content">{&message.text}</div>
            <div class="timestamp">{&message.timestamp}</div>
        </div>
    }
}
