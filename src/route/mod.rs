mod types;

pub use types::{Hop, IP_NOT_FOUND};

use lazy_static::lazy_static;
use regex::Regex;

use crate::message::RawMessage;

lazy_static! {
    // Dotted quad on word boundaries. Octets are not range-checked:
    // `999.999.999.999` matches.
    static ref IPV4: Regex =
        Regex::new(r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b").expect("valid IPv4 pattern");
}

/// Reconstruit le chemin origine -> destination. Chaque relais empile sa
/// ligne `Received` en tête du message, on inverse donc l'ordre du fichier.
pub fn reconstruct_route(msg: &RawMessage) -> Vec<Hop> {
    let hops: Vec<Hop> = msg
        .get_all("Received")
        .iter()
        .rev()
        .enumerate()
        .map(|(position, value)| hop_from_header(position + 1, value))
        .collect();

    #[cfg(feature = "with-tracing")]
    tracing::debug!(hops = hops.len(), "route reconstructed");

    hops
}

fn hop_from_header(index: usize, value: &str) -> Hop {
    let ips = IPV4
        .find_iter(value)
        .map(|found| found.as_str().to_string())
        .collect();
    Hop {
        index,
        server_info: server_info(value),
        ips,
    }
}

/// Tout ce qui précède le premier `;` (la valeur entière sinon), sauts de
/// ligne remplacés par des espaces, bornes blanches retirées.
fn server_info(value: &str) -> String {
    let head = match value.split_once(';') {
        Some((head, _)) => head,
        None => value,
    };
    head.replace('\n', " ").trim().to_string()
}
