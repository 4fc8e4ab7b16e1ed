// Scripted chat assistant: panel state machine, append-only message log,
// and a delayed canned reply per user message.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration};

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

const GREETING: &str = "Hello! I'm your virtual assistant. How can I help you today?";

/// The fixed reply set. This is a scripted stand-in, not a real
/// conversational agent.
pub const BOT_RESPONSES: [&str; 5] = [
    "Thanks for your message! A sales representative will reach out to you shortly.",
    "I'd be happy to help you find the perfect vehicle. Would you prefer to buy or rent?",
    "Great question! Our inventory is updated daily. Would you like me to check for specific models?",
    "We offer financing options with competitive rates. Would you like more information?",
    "We have a wide range of luxury and economy vehicles available. What's your budget range?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatPanel {
    Closed,
    Open,
    Minimized,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// Pure widget state: panel flags plus the append-only log with a
/// monotonic message counter.
#[derive(Debug)]
pub struct ChatState {
    panel: ChatPanel,
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatState {
    pub fn new() -> Self {
        let mut state = ChatState {
            panel: ChatPanel::Closed,
            messages: Vec::new(),
            next_id: 1,
        };
        state.append(GREETING.to_string(), Sender::Bot);
        state
    }

    pub fn panel(&self) -> ChatPanel {
        self.panel
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Closed -> Open; either open state -> Closed. Closing always resets
    /// the minimized flag, so the next open shows the expanded panel.
    pub fn toggle_open(&mut self) -> ChatPanel {
        self.panel = match self.panel {
            ChatPanel::Closed => ChatPanel::Open,
            ChatPanel::Open | ChatPanel::Minimized => ChatPanel::Closed,
        };
        self.panel
    }

    /// Open <-> Minimized; a no-op while closed.
    pub fn toggle_minimize(&mut self) -> ChatPanel {
        self.panel = match self.panel {
            ChatPanel::Open => ChatPanel::Minimized,
            ChatPanel::Minimized => ChatPanel::Open,
            ChatPanel::Closed => ChatPanel::Closed,
        };
        self.panel
    }

    /// Appends a user message, ignoring blank input.
    pub fn push_user(&mut self, text: &str) -> Option<ChatMessage> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(self.append(trimmed.to_string(), Sender::User))
    }

    pub fn push_bot(&mut self, text: String) -> ChatMessage {
        self.append(text, Sender::Bot)
    }

    fn append(&mut self, text: String, sender: Sender) -> ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            text,
            sender,
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }
}

impl Default for ChatState {
    fn default() -> Self {
        ChatState::new()
    }
}

/// Picks which canned reply to send. Injectable so tests can pin the
/// selection; the default draws uniformly at random.
pub trait ResponseSelector: Send + Sync {
    fn pick(&self, count: usize) -> usize;
}

pub struct RandomSelector;

impl ResponseSelector for RandomSelector {
    fn pick(&self, count: usize) -> usize {
        rand::thread_rng().gen_range(0..count)
    }
}

struct ChatShared {
    state: Mutex<ChatState>,
    pending: Mutex<Vec<JoinHandle<()>>>,
    selector: Box<dyn ResponseSelector>,
    reply_delay: Duration,
}

/// Shared chat handle. Sending a message appends it immediately and
/// schedules one bot reply after `reply_delay`; closing the widget
/// cancels every pending reply so nothing lands after teardown.
#[derive(Clone)]
pub struct Chat {
    shared: Arc<ChatShared>,
}

impl Chat {
    pub fn new(reply_delay: Duration) -> Self {
        Chat::with_selector(reply_delay, Box::new(RandomSelector))
    }

    pub fn with_selector(reply_delay: Duration, selector: Box<dyn ResponseSelector>) -> Self {
        Chat {
            shared: Arc::new(ChatShared {
                state: Mutex::new(ChatState::new()),
                pending: Mutex::new(Vec::new()),
                selector,
                reply_delay,
            }),
        }
    }

    pub async fn panel(&self) -> ChatPanel {
        self.shared.state.lock().await.panel()
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.shared.state.lock().await.messages().to_vec()
    }

    pub async fn toggle_open(&self) -> ChatPanel {
        let panel = self.shared.state.lock().await.toggle_open();
        if panel == ChatPanel::Closed {
            self.cancel_pending().await;
        }
        panel
    }

    pub async fn toggle_minimize(&self) -> ChatPanel {
        self.shared.state.lock().await.toggle_minimize()
    }

    /// Appends the user message and schedules the canned reply. Returns
    /// `None` for blank input, which is dropped without side effects.
    pub async fn send(&self, text: &str) -> Option<ChatMessage> {
        let message = self.shared.state.lock().await.push_user(text)?;
        tracing::debug!(id = message.id, "chat message received");

        let mut pending = self.shared.pending.lock().await;
        pending.retain(|task| !task.is_finished());
        let chat = self.clone();
        pending.push(tokio::spawn(async move {
            time::sleep(chat.shared.reply_delay).await;
            let choice = chat.shared.selector.pick(BOT_RESPONSES.len());
            let text = BOT_RESPONSES[choice.min(BOT_RESPONSES.len() - 1)];
            let reply = chat.shared.state.lock().await.push_bot(text.to_string());
            tracing::debug!(id = reply.id, "chat reply sent");
        }));
        Some(message)
    }

    async fn cancel_pending(&self) {
        for task in self.shared.pending.lock().await.drain(..) {
            task.abort();
        }
    }

    /// Teardown hook: cancels any reply still in flight.
    pub async fn shutdown(&self) {
        self.cancel_pending().await;
    }
}
