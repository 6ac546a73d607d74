use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::error;

use crate::client::{ActivitiesClient, ApiOutcome};
use crate::models::Activities;

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// How long a feedback message stays visible. Expiry is checked when the
/// message is read, not on a timer.
const MESSAGE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// Single transient feedback slot. A new message replaces the old one
/// immediately; there is never more than one.
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
    shown_at: Instant,
}

impl Message {
    fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= MESSAGE_TTL
    }
}

/// One rendered activity card.
#[derive(Debug, Clone)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// "Participants (N)" header text, kept as rendered state so an
    /// optimistic patch can bump it without recomputing the whole card.
    pub header: String,
    pub participants: Vec<String>,
}

/// One entry of the activity select, placeholder included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Rendered board state. Rebuilt wholesale on every load.
#[derive(Debug, Clone, Default)]
pub struct BoardView {
    pub cards: Vec<ActivityCard>,
    /// Options for the sign-up select; index 0 is the placeholder.
    pub options: Vec<SelectOption>,
    pub load_failed: bool,
}

/// Cached position of an activity's card and select option, used only to
/// patch the view right after a local action. Invalidated by every reload.
struct UiRef {
    card: usize,
    option: usize,
}

/// The sign-up board: loads activity state from the server, keeps a rendered
/// view of it, applies optimistic patches on user actions, and reconciles via
/// full reload. The server stays authoritative — between a patch and the next
/// reload the view may be ahead by at most the one action just taken.
pub struct ActivityBoard {
    client: ActivitiesClient,
    view: BoardView,
    ui: HashMap<String, UiRef>,
    message: Option<Message>,
}

impl ActivityBoard {
    pub fn new(client: ActivitiesClient) -> Self {
        Self {
            client,
            view: BoardView::default(),
            ui: HashMap::new(),
            message: None,
        }
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Current feedback message, if one is set and still within its TTL.
    pub fn visible_message(&self) -> Option<&Message> {
        self.message.as_ref().filter(|m| !m.is_expired())
    }

    fn show_message(&mut self, text: impl Into<String>, kind: MessageKind) {
        self.message = Some(Message::new(text, kind));
    }

    /// Fetch the full activity set and rebuild the view from it. The
    /// authoritative resync point: every cached UI reference is overwritten.
    /// On failure the prior view is cleared and the board flags the error.
    pub async fn load_activities(&mut self) {
        match self.client.get_activities().await {
            Ok(activities) => self.rebuild(&activities),
            Err(e) => {
                error!("Failed to load activities: {:#}", e);
                self.view = BoardView {
                    load_failed: true,
                    ..BoardView::default()
                };
                self.ui.clear();
            }
        }
    }

    /// Validate, register, patch the view optimistically, then reload to
    /// reconcile with the server.
    pub async fn sign_up(&mut self, activity: &str, email: &str) {
        let activity = activity.trim();
        let email = email.trim();

        if activity.is_empty() {
            self.show_message("Please select an activity.", MessageKind::Error);
            return;
        }
        if email.is_empty() {
            self.show_message("Please enter an email.", MessageKind::Error);
            return;
        }

        match self.client.sign_up(activity, email).await {
            Ok(ApiOutcome::Accepted { message }) => {
                self.show_message(
                    message.as_deref().unwrap_or("Signed up successfully!"),
                    MessageKind::Success,
                );
                self.apply_signup_patch(activity, email);
                self.load_activities().await;
            }
            Ok(ApiOutcome::Rejected { detail }) => {
                self.show_message(
                    detail.as_deref().unwrap_or("Failed to sign up."),
                    MessageKind::Error,
                );
            }
            Err(e) => {
                error!("Sign-up request failed: {:#}", e);
                self.show_message("An error occurred while signing up.", MessageKind::Error);
            }
        }
    }

    /// Remove an email from an activity. No optimistic patch here — the view
    /// only changes through the reload after a confirmed removal.
    pub async fn remove_participant(&mut self, activity: &str, email: &str) {
        match self.client.remove_participant(activity, email).await {
            Ok(ApiOutcome::Accepted { message }) => {
                self.show_message(
                    message.as_deref().unwrap_or("Participant removed"),
                    MessageKind::Success,
                );
                self.load_activities().await;
            }
            Ok(ApiOutcome::Rejected { detail }) => {
                self.show_message(
                    detail.as_deref().unwrap_or("Failed to remove participant."),
                    MessageKind::Error,
                );
            }
            Err(e) => {
                error!("Removal request failed: {:#}", e);
                self.show_message(
                    "An error occurred while removing participant.",
                    MessageKind::Error,
                );
            }
        }
    }

    fn rebuild(&mut self, activities: &Activities) {
        let mut view = BoardView::default();
        let mut ui = HashMap::new();

        view.options.push(SelectOption {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
        });

        for (name, info) in activities {
            let count = info.participants.len();

            view.cards.push(ActivityCard {
                name: name.clone(),
                description: info.description.clone(),
                schedule: info.schedule.clone(),
                max_participants: info.max_participants,
                header: participants_header(count),
                participants: info.participants.clone(),
            });

            view.options.push(SelectOption {
                value: name.clone(),
                label: option_label(name, count),
            });

            ui.insert(
                name.clone(),
                UiRef {
                    card: view.cards.len() - 1,
                    option: view.options.len() - 1,
                },
            );
        }

        self.view = view;
        self.ui = ui;
    }

    /// Insert the new participant into the cached card and bump both count
    /// labels, without re-rendering anything else. A stale or missing cache
    /// entry is fine — the reload that follows rebuilds everything anyway.
    fn apply_signup_patch(&mut self, activity: &str, email: &str) {
        let Some(r) = self.ui.get(activity) else {
            return;
        };

        let card = &mut self.view.cards[r.card];
        card.participants.push(email.to_string());
        let count = card.participants.len();
        card.header = participants_header(count);
        self.view.options[r.option].label = option_label(activity, count);
    }
}

fn participants_header(count: usize) -> String {
    format!("Participants ({count})")
}

fn option_label(name: &str, count: usize) -> String {
    format!("{name} ({count})")
}
