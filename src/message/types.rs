/// Message décodé: en-têtes ordonnés (doublons conservés) + corps opaque.
///
/// Le stockage est une liste d'association, pas une map: plusieurs
/// `Received` doivent rester distincts et dans l'ordre du fichier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    headers: Vec<(String, String)>,
    body: String,
}

impl RawMessage {
    pub(crate) fn new(headers: Vec<(String, String)>, body: String) -> Self {
        Self { headers, body }
    }

    /// Première valeur du header `name` (insensible à la casse).
    pub fn get_first(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Toutes les valeurs du header `name`, dans l'ordre du fichier.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
            .collect()
    }

    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    /// Corps du message, conservé mais jamais inspecté.
    pub fn body(&self) -> &str {
        &self.body
    }
}
