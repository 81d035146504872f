//! Chat assistant module
//!
//! An LLM-backed assistant constrained to Islamic topics. Each question is
//! independent; no conversation memory crosses turns.

mod gate;
mod service;

pub use gate::is_islamic_question;
pub use service::{ChatAnswer, ChatError, ChatService};

/// Starter questions surfaced on the chat page
pub const QUESTION_SUGGESTIONS: &[&str] = &[
    "Que dit le Coran sur la patience (sabr) ?",
    "Quels sont les piliers de l'Islam ?",
    "Comment faire les ablutions selon la Sunna ?",
    "Que dit le Prophète (ﷺ) sur la charité ?",
    "Quelle est l'importance de la prière en Islam ?",
    "Comment se comporter avec ses parents selon l'Islam ?",
    "Que dit le Coran sur la justice ?",
    "Quelles sont les invocations du matin et du soir ?",
    "Comment demander pardon à Allah ?",
    "Que dit l'Islam sur l'acquisition de la connaissance ?",
    "Quels sont les droits du voisin en Islam ?",
    "Comment purifier son cœur selon la Sunna ?",
];
