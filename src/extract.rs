//! Vue « infos de base »: les cinq champs d'enveloppe à valeur unique.

use crate::message::RawMessage;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicInfo {
    pub from: Option<String>,
    pub to: Option<String>,
    pub subject: Option<String>,
    pub date: Option<String>,
    pub message_id: Option<String>,
}

/// Première occurrence de chaque champ; champ absent -> `None`, jamais une
/// erreur.
pub fn extract_basic_info(msg: &RawMessage) -> BasicInfo {
    BasicInfo {
        from: first_owned(msg, "From"),
        to: first_owned(msg, "To"),
        subject: first_owned(msg, "Subject"),
        date: first_owned(msg, "Date"),
        message_id: first_owned(msg, "Message-ID"),
    }
}

fn first_owned(msg: &RawMessage, name: &str) -> Option<String> {
    msg.get_first(name).map(str::to_string)
}
