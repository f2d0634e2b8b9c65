mod types;

pub use types::{AuthReport, AuthVerdict, Mechanism};

use crate::message::RawMessage;

/// Texte cherché quand l'en-tête est absent; aucun jeton positif n'y
/// figure, tout classe donc en `NotFound` par élimination.
const MISSING_HEADER: &str = "Not Found";

// Table ordonnée (mécanisme, jeton, verdict): pour un mécanisme donné, le
// premier jeton contenu gagne. Jetons sensibles à la casse, émis en
// minuscules par les MTA.
const RULES: &[(Mechanism, &str, AuthVerdict)] = &[
    (Mechanism::Spf, "spf=pass", AuthVerdict::Pass),
    (Mechanism::Spf, "spf=fail", AuthVerdict::Fail),
    (Mechanism::Spf, "spf=softfail", AuthVerdict::Softfail),
    (Mechanism::Spf, "spf=neutral", AuthVerdict::Neutral),
    (Mechanism::Dkim, "dkim=pass", AuthVerdict::Pass),
    (Mechanism::Dkim, "dkim=fail", AuthVerdict::Fail),
    (Mechanism::Dmarc, "dmarc=pass", AuthVerdict::Pass),
    (Mechanism::Dmarc, "dmarc=fail", AuthVerdict::Fail),
];

/// Classe SPF/DKIM/DMARC par recherche de sous-chaîne ordonnée sur la
/// valeur `Authentication-Results`. Heuristique textuelle assumée, pas un
/// parseur RFC 8601: commentaires imbriqués et resinfo multiples ne sont
/// pas traités.
pub fn classify_auth(msg: &RawMessage) -> AuthReport {
    let searched = msg
        .get_first("Authentication-Results")
        .unwrap_or(MISSING_HEADER);

    let report = AuthReport {
        spf: classify(searched, Mechanism::Spf),
        dkim: classify(searched, Mechanism::Dkim),
        dmarc: classify(searched, Mechanism::Dmarc),
    };

    #[cfg(feature = "with-tracing")]
    tracing::debug!(
        spf = report.spf.label(),
        dkim = report.dkim.label(),
        dmarc = report.dmarc.label(),
        "auth classified"
    );

    report
}

fn classify(searched: &str, mechanism: Mechanism) -> AuthVerdict {
    RULES
        .iter()
        .filter(|(candidate, _, _)| *candidate == mechanism)
        .find(|(_, token, _)| searched.contains(token))
        .map_or(AuthVerdict::NotFound, |(_, _, verdict)| *verdict)
}
