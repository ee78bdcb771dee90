/// Append-only list of rendered chat messages

use crate::chat_data::Message;
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageList {
    messages: Vec<Message>,
}

pub enum MessageAction {
    Append(Message),
}

impl MessageList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl Reducible for MessageList {
    type Action = MessageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            MessageAction::Append(message) => {
                let mut list = (*self).clone();
                list.append(message);
                Rc::new(list)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_data::Author;

    #[test]
    fn test_message_list_new() {
        let list = MessageList::new();
        assert!(list.is_empty());
        assert_eq!(list.last(), None);
    }

    #[test]
    fn test_append_keeps_order() {
        let mut list = MessageList::new();
        for i in 0..5 {
            list.append(Message::new(format!("message {}", i), Author::User, "12:00"));
        }

        let texts: Vec<&str> = list.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["message 0", "message 1", "message 2", "message 3", "message 4"]);
        assert_eq!(list.last().unwrap().text, "message 4");
    }

    #[test]
    fn test_reduce_appends_without_touching_previous_state() {
        let before = Rc::new(MessageList::new());
        let after = before
            .clone()
            .reduce(MessageAction::Append(Message::new("hi", Author::Ai, "08:30")));

        assert_eq!(before.len(), 0);
        assert_eq!(after.len(), 1);
        assert_eq!(after.last().unwrap().author, Author::Ai);
    }
}
