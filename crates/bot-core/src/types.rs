use serde::{Deserialize, Serialize};

/// One completed exchange: what the user said and what the bot answered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Turn {
    pub user: String,
    pub bot: String,
}

impl Turn {
    pub fn new(user: impl Into<String>, bot: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            bot: bot.into(),
        }
    }
}

/// Chronological list of turns carried by the caller between requests.
///
/// Turns are only ever appended at the back or popped off the back by
/// undo/retry; an existing turn is never edited.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ChatHistory {
    turns: Vec<Turn>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The most recent `limit` turns, oldest first.
    pub fn recent(&self, limit: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(limit);
        &self.turns[start..]
    }

    /// Remove the last turn and return it.
    pub fn undo(&mut self) -> Option<Turn> {
        self.turns.pop()
    }

    /// Remove the last turn and hand back its user message so it can be
    /// generated again.
    pub fn take_for_retry(&mut self) -> Option<String> {
        self.turns.pop().map(|turn| turn.user)
    }
}

impl From<Vec<Turn>> for ChatHistory {
    fn from(turns: Vec<Turn>) -> Self {
        Self { turns }
    }
}

impl FromIterator<Turn> for ChatHistory {
    fn from_iter<I: IntoIterator<Item = Turn>>(iter: I) -> Self {
        Self {
            turns: iter.into_iter().collect(),
        }
    }
}

/// Conversation payload of the Hugging Face conversational task.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conversation {
    #[serde(default)]
    pub past_user_inputs: Vec<String>,
    #[serde(default)]
    pub generated_responses: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
}

impl Conversation {
    /// Build a conversation from prior turns plus the pending user message.
    pub fn from_turns(turns: &[Turn], message: impl Into<String>) -> Self {
        let mut conversation = Self::default();
        for turn in turns {
            conversation.add_user_input(turn.user.clone());
            conversation.append_response(turn.bot.clone());
        }
        conversation.text = message.into();
        conversation
    }

    pub fn add_user_input(&mut self, text: impl Into<String>) {
        self.past_user_inputs.push(text.into());
    }

    pub fn append_response(&mut self, text: impl Into<String>) {
        self.generated_responses.push(text.into());
    }

    pub fn latest_response(&self) -> Option<&str> {
        self.generated_responses.last().map(String::as_str)
    }
}
