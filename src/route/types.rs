/// Sentinelle affichée quand un en-tête `Received` ne contient aucune IPv4.
pub const IP_NOT_FOUND: &str = "IP Not Found";

/// Un relais reconstruit du chemin de livraison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    /// Position 1-based; 1 = présumé le plus proche de l'origine.
    pub index: usize,
    /// Préfixe de la valeur avant le premier `;`, sauts de ligne aplatis.
    pub server_info: String,
    /// Toutes les IPv4 syntaxiques trouvées, dans l'ordre du texte.
    pub ips: Vec<String>,
}

impl Hop {
    pub fn label(&self) -> String {
        format!("Hop {}", self.index)
    }

    /// IPs jointes par `", "`, ou la sentinelle si aucune.
    pub fn ip_summary(&self) -> String {
        if self.ips.is_empty() {
            IP_NOT_FOUND.to_string()
        } else {
            self.ips.join(", ")
        }
    }
}
