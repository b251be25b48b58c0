//! Line-oriented triage driver: every stdin line is one patient turn.
//!
//! Prints the extracted entities, the category context and the running
//! symptom summary after each turn, then the full session as JSON at EOF.

use std::io::{self, BufRead, Write};

use jeevancare_nlp::nlp::detect_symptom_context;
use jeevancare_nlp::{config, init_tracing, SessionRegistry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let language_hint = std::env::var(config::LANGUAGE_HINT_ENV)
        .unwrap_or_else(|_| config::DEFAULT_LANGUAGE_HINT.to_string());

    let registry = SessionRegistry::new();
    let session_id = registry.open_session()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in io::stdin().lock().lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let entities = registry.process_turn(session_id, text, Some(&language_hint))?;
        let analysis = detect_symptom_context(text);
        let summary = registry.with_session(session_id, |ctx| ctx.symptoms_summary())?;

        writeln!(out, "entities: {}", serde_json::to_string(&entities)?)?;
        if !analysis.detected.is_empty() {
            let categories: Vec<&str> = analysis
                .detected
                .iter()
                .map(|m| m.category.as_str())
                .collect();
            writeln!(
                out,
                "context: {} ({} severity, confidence {}%)",
                categories.join(", "),
                analysis.severity,
                analysis.confidence
            )?;
        }
        if analysis.emergency_flag {
            writeln!(out, "EMERGENCY: seek immediate medical attention")?;
        }
        writeln!(out, "symptoms: {summary}")?;
        out.flush()?;
    }

    let ctx = registry.close_session(session_id)?;
    writeln!(out, "{}", ctx.export_json()?)?;
    Ok(())
}
