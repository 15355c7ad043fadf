use serde::Serialize;

use crate::users::repo_types::{MessageRow, UserProfileRow};

/// A user together with every message they own.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UserWithMessages {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub messages: Vec<MessageRow>,
}

impl UserWithMessages {
    pub fn new(user: UserProfileRow, messages: Vec<MessageRow>) -> Self {
        Self {
            name: user.name,
            kind: user.kind,
            messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_messages_serialize_as_empty_array() {
        let user = UserWithMessages::new(
            UserProfileRow {
                name: "Bo".into(),
                kind: "staff".into(),
            },
            vec![],
        );
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value, json!({ "name": "Bo", "type": "staff", "messages": [] }));
    }
}
