//! Load the bundled parsers and run them over a few payloads
//!
//! Run with: cargo run --package logwright-plugin-api --example load_and_run

use logwright_parser_core::LogRecord;
use logwright_plugin_api::{dispatch, DispatchOutcome, HostConfig, ParserManager};
use logwright_runtime::{InitSignature, Namespace, RuntimeResult, Symbol};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> RuntimeResult<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .init();

    // Declare the bundled parsers as a namespace, the way a host exposes its
    // built-in plugin module.
    let mut namespace = Namespace::new("builtin");
    namespace
        .define(Symbol::parser("DummyParser", || {
            Box::new(parser_dummy::DummyParser::new())
        }))
        .define(Symbol::parser_with_init(
            "GreedyParser",
            || Box::new(parser_greedy::GreedyParser::new()),
            InitSignature::conforming(),
        ));

    // Configure the greedy parser to capture the request line of an access
    // log payload.
    let config: HostConfig = toml::from_str(
        r#"
[parsers.GreedyParser.options]
field = "request"
until = " HTTP"
"#,
    )?;

    let mut manager = ParserManager::with_config(config);
    let report = manager.load_namespace(&namespace);
    info!(
        "Registered {} parser(s), rejected {}",
        report.registered.len(),
        report.rejected.len()
    );

    let mut spawned = manager.spawn_enabled();
    for (name, error) in &spawned.failed {
        info!("Parser {name} failed to start: {error}");
    }

    let payloads = [
        "GET /status HTTP/1.1",
        "POST /api/records HTTP/1.0",
        "malformed payload without a request line",
    ];

    for payload in payloads {
        let mut record = LogRecord::new();
        let outcomes = dispatch(&mut spawned.instances, &mut record, payload);

        println!("payload: {payload}");
        for outcome in &outcomes {
            let verdict = match &outcome.outcome {
                DispatchOutcome::Matched => "matched".to_string(),
                DispatchOutcome::NoMatch => "no match".to_string(),
                DispatchOutcome::Failed(error) => format!("failed: {error}"),
            };
            println!("  {} -> {}", outcome.parser, verdict);
        }
        for (key, value) in record.iter() {
            println!("  record[{key}] = {value}");
        }
        println!();
    }

    for instance in &mut spawned.instances {
        instance.dispose();
    }

    Ok(())
}
