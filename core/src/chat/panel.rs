use crate::chat::exchange::{interpret_response, ExchangePhase, PanelKind};
use crate::chat::transport::ChatTransport;
use crate::markup::serialize::escape_text;
use crate::markup::SanitizedMarkup;
use serde::Serialize;
use ulid::Ulid;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    /// Typed by the user; escaped when rendered.
    Plain(String),
    Markup(SanitizedMarkup),
}

impl MessageBody {
    pub fn to_html(&self) -> String {
        match self {
            MessageBody::Plain(t) => escape_text(t),
            MessageBody::Markup(m) => m.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub body: MessageBody,
    pub sent_at: String,
}

impl ChatMessage {
    fn new(sender: Sender, body: MessageBody) -> Self {
        ChatMessage {
            id: Ulid::new().to_string(),
            sender,
            body,
            sent_at: now_rfc3339_utc(),
        }
    }
}

/// One chat panel on the page: input → endpoint → sanitized reply.
pub struct ChatPanel<T: ChatTransport> {
    kind: PanelKind,
    transport: T,
    init_message: String,
    transcript: Vec<ChatMessage>,
    initialized: bool,
    open: bool,
}

impl<T: ChatTransport> ChatPanel<T> {
    pub fn new(kind: PanelKind, transport: T, init_message: &str) -> Self {
        Self {
            kind,
            transport,
            init_message: init_message.to_string(),
            transcript: Vec::new(),
            initialized: false,
            open: kind == PanelKind::Inline,
        }
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send the trimmed input. Blank input sends nothing.
    pub fn submit(&mut self, input: &str) -> Option<&ChatMessage> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        self.transcript
            .push(ChatMessage::new(Sender::User, MessageBody::Plain(text.to_string())));
        log::info!("[chat] {:?} sending message", self.kind);
        let result = self.transport.post_message(text);
        let markup = interpret_response(self.kind, ExchangePhase::Message, result);
        self.push_bot(markup)
    }

    /// Show the panel. The first open of an empty popup fetches the greeting;
    /// inline panels have no greeting.
    pub fn open(&mut self) -> Option<&ChatMessage> {
        self.open = true;
        if self.kind == PanelKind::Popup && !self.initialized && self.transcript.is_empty() {
            self.initialized = true;
            return self.initialize();
        }
        None
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Clicks on the popup's own backdrop close it; clicks inside do not.
    pub fn backdrop_click(&mut self, on_backdrop: bool) {
        if on_backdrop {
            self.close();
        }
    }

    /// Clear the transcript, reset the server conversation, fetch a new greeting.
    pub fn reset(&mut self) -> Option<&ChatMessage> {
        self.transcript.clear();
        self.initialized = false;
        self.reset_remote();
        self.initialize()
    }

    // A failed reset here aborts the greeting and shows the network warning.
    fn initialize(&mut self) -> Option<&ChatMessage> {
        let result = match self.transport.reset() {
            Ok(()) => self.transport.post_message(&self.init_message),
            Err(e) => Err(e),
        };
        let markup = interpret_response(self.kind, ExchangePhase::Init, result);
        self.push_bot(markup)
    }

    fn reset_remote(&self) {
        if let Err(e) = self.transport.reset() {
            log::warn!("[chat] reset endpoint error: {}", e);
        }
    }

    fn push_bot(&mut self, markup: SanitizedMarkup) -> Option<&ChatMessage> {
        self.transcript
            .push(ChatMessage::new(Sender::Bot, MessageBody::Markup(markup)));
        self.transcript.last()
    }

    pub fn render_html(&self) -> String {
        let mut out = String::new();
        for m in &self.transcript {
            out.push_str(&render_entry(self.kind, m));
        }
        out
    }
}

fn render_entry(kind: PanelKind, m: &ChatMessage) -> String {
    let sender = match m.sender {
        Sender::User => "user",
        Sender::Bot => "bot",
    };
    match kind {
        PanelKind::Inline => format!("<div class=\"message {}\">{}</div>", sender, m.body.to_html()),
        PanelKind::Popup => format!(
            "<div class=\"chatbot-message {}-message\"><p>{}</p></div>",
            sender,
            m.body.to_html()
        ),
    }
}

fn now_rfc3339_utc() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default()
}
