use colored::Colorize;

use crate::application::services::analysis::AlertResponse;
use crate::domain::entities::Alert;
use crate::domain::value_objects::severity::Severity;

/// Strips ANSI/OSC escape sequences from a string to prevent terminal injection.
#[must_use]
pub fn sanitize_terminal(input: &str) -> String {
    input.chars().filter(|c| *c != '\x1b').collect()
}

#[must_use]
pub fn severity_badge(severity: Severity) -> String {
    let label = format!(" {severity} ");
    match severity {
        Severity::High => format!("{}", label.on_red().white().bold()),
        Severity::Medium => format!("{}", label.on_yellow().black().bold()),
        Severity::Low => format!("{}", label.on_blue().white()),
        Severity::Info => format!("{}", label.on_green().black()),
    }
}

pub fn print_section_header(title: &str) {
    println!("{}", title.bold().cyan());
    let display_width = title.chars().count();
    println!("{}", "─".repeat(display_width).cyan());
}

/// Prints the result of one analysis run.
pub fn print_response(patient_id: &str, response: &[AlertResponse]) {
    print_section_header(&format!("Analysis for patient {}", sanitize_terminal(patient_id)));
    for item in response {
        println!();
        println!(
            "{} {}",
            severity_badge(item.severity),
            sanitize_terminal(&item.message)
        );
    }
    println!();
}

/// Prints a patient's alert history, newest first.
pub fn print_alert_history(patient_id: &str, alerts: &[Alert]) {
    print_section_header(&format!("Alerts for patient {}", sanitize_terminal(patient_id)));
    if alerts.is_empty() {
        println!();
        println!("{}", "No alerts recorded.".green());
        println!();
        return;
    }

    for alert in alerts {
        println!();
        println!(
            "{} {}",
            severity_badge(alert.severity),
            alert
                .created_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
                .dimmed()
        );
        println!("  {}", sanitize_terminal(&alert.message));
    }
    println!();
}
