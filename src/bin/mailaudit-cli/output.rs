use comfy_table::presets::ASCII_FULL;
use comfy_table::{ColumnConstraint, ContentArrangement, Table, Width};
use mailaudit_lib::{AuthReport, BasicInfo, Hop, Mechanism};

const BANNER: &str = "==================================================";
// largeur fixe: la sortie ne dépend pas du terminal
const REPORT_WIDTH: u16 = 120;
const SERVER_COLUMN_MAX: u16 = 70;

/// Rapport complet: trois sections dans un ordre fixe.
pub fn render_report(basic: &BasicInfo, hops: &[Hop], auth: &AuthReport) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(BANNER);
    out.push_str("\nHEADERS ANALYSIS\n");
    out.push_str(BANNER);
    out.push('\n');

    out.push_str("\nBASIC INFO\n");
    out.push_str(&basic_table(basic).to_string());
    out.push('\n');

    out.push_str("\nEMAIL ROUTE (origin to destination)\n");
    if hops.is_empty() {
        out.push_str("'Received' Headers not found\n");
    } else {
        out.push_str(&route_table(hops).to_string());
        out.push('\n');
    }

    out.push_str("\nAUTH RESULTS\n");
    out.push_str(&auth_table(auth).to_string());
    out.push('\n');

    out.push('\n');
    out.push_str(BANNER);
    out.push('\n');

    out
}

fn grid_table() -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(REPORT_WIDTH);
    table
}

fn basic_table(basic: &BasicInfo) -> Table {
    let mut table = grid_table();
    for (name, value) in [
        ("From", &basic.from),
        ("To", &basic.to),
        ("Subject", &basic.subject),
        ("Date", &basic.date),
        ("Message-ID", &basic.message_id),
    ] {
        table.add_row(vec![name.to_string(), cell(value)]);
    }
    table
}

// champ absent -> cellule littérale `None`
fn cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "None".to_string())
}

fn route_table(hops: &[Hop]) -> Table {
    let mut table = grid_table();
    table.set_header(vec!["Hop", "Server", "IPs"]);
    for hop in hops {
        table.add_row(vec![hop.label(), hop.server_info.clone(), hop.ip_summary()]);
    }
    if let Some(server) = table.column_mut(1) {
        server.set_constraint(ColumnConstraint::UpperBoundary(Width::Fixed(
            SERVER_COLUMN_MAX,
        )));
    }
    table
}

fn auth_table(auth: &AuthReport) -> Table {
    let mut table = grid_table();
    table.set_header(vec!["Check", "Result"]);
    for mechanism in [Mechanism::Spf, Mechanism::Dkim, Mechanism::Dmarc] {
        table.add_row(vec![
            describe_mechanism(mechanism).to_string(),
            auth.verdict(mechanism).label().to_string(),
        ]);
    }
    table
}

fn describe_mechanism(mechanism: Mechanism) -> &'static str {
    match mechanism {
        Mechanism::Spf => "SPF (Sender Policy Framework)",
        Mechanism::Dkim => "DKIM (DomainKeys Identified Mail)",
        Mechanism::Dmarc => "DMARC (Domain-based Message Auth)",
    }
}

#[cfg(test)]
mod tests {
    use mailaudit_lib::{classify_auth, extract_basic_info, parse_message, reconstruct_route};

    use super::*;

    const SAMPLE: &str = "From: alice@example.com\n\
        To: bob@example.com\n\
        Subject: quarterly report\n\
        Received: from mail.example.com (mail.example.com [192.168.1.1]) by mx.example.com ; Mon, 1 Jan 2024\n\
        Authentication-Results: spf=pass; dkim=fail; dmarc=pass\n\
        \n\
        body\n";

    fn render(text: &str) -> String {
        let msg = parse_message(text).expect("parseable");
        render_report(
            &extract_basic_info(&msg),
            &reconstruct_route(&msg),
            &classify_auth(&msg),
        )
    }

    #[test]
    fn report_has_all_sections_in_order() {
        let report = render(SAMPLE);
        let basic = report.find("BASIC INFO").expect("basic section");
        let route = report.find("EMAIL ROUTE").expect("route section");
        let auth = report.find("AUTH RESULTS").expect("auth section");
        assert!(basic < route && route < auth);
    }

    #[test]
    fn report_shows_hop_and_ip() {
        let report = render(SAMPLE);
        assert!(report.contains("Hop 1"));
        assert!(report.contains("192.168.1.1"));
    }

    #[test]
    fn report_shows_verdict_labels() {
        let report = render(SAMPLE);
        assert!(report.contains("SPF (Sender Policy Framework)"));
        assert!(report.contains("Pass"));
        assert!(report.contains("Fail"));
    }

    #[test]
    fn absent_basic_fields_render_none() {
        let report = render("Subject: only a subject\n");
        assert!(report.contains("None"));
    }

    #[test]
    fn zero_hops_render_notice_not_table() {
        let report = render("Subject: no received headers\n");
        assert!(report.contains("'Received' Headers not found"));
        assert!(!report.contains("Hop 1"));
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(render(SAMPLE), render(SAMPLE));
    }
}
