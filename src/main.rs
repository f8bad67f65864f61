//! Interactive terminal form session for the heart disease classifier.
//!
//! Runs the thirteen-field form as a single-threaded cooperative event loop:
//! stdin commands and classifier resolutions are multiplexed over one
//! `select!`, so field edits stay responsive while a call is in flight and a
//! superseded call's late resolution is dropped by the session's epoch
//! check.
//!
//! # Environment Variables
//! - `CLASSIFIER_URL`: classifier endpoint (default: "http://localhost:8000/predict")

use heartguard_client::{classifier_url_from_env_value, ClassifierClient, ClassifierConfig, Dispatcher};
use heartguard_core::{FieldKind, FormSession, LifecycleState, Preset, FIELDS};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("heartguard_run=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let url = classifier_url_from_env_value(std::env::var("CLASSIFIER_URL").ok())?;
    tracing::info!("++ HeartGuard form session, classifier at {}", url);

    let client = ClassifierClient::new(ClassifierConfig::new(url));
    let (dispatcher, mut resolutions) = Dispatcher::new(client);
    let mut session = FormSession::new();

    print_help();
    render_state(session.state());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_command(line.trim(), &mut session, &dispatcher) {
                    break;
                }
            }
            Some(resolution) = resolutions.recv() => {
                if session.resolve(resolution.epoch, resolution.outcome) {
                    render_state(session.state());
                }
            }
        }
    }

    Ok(())
}

/// Handles one command line; returns `false` to quit.
fn handle_command(line: &str, session: &mut FormSession, dispatcher: &Dispatcher) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => {}
        ["help"] => print_help(),
        ["fields"] => print_fields(),
        ["show"] => print_record(session),
        ["set", name, raw] => {
            if let Err(error) = session.set_field(name, raw) {
                println!("error: {error}");
            }
        }
        ["set", ..] => println!("usage: set <field> <value>"),
        ["preset", name] => match name.parse::<Preset>() {
            Ok(preset) => {
                session.load_preset(preset);
                println!("loaded preset '{preset}'");
                render_state(session.state());
            }
            Err(error) => println!("error: {error}"),
        },
        ["preset", ..] => println!("usage: preset <healthy|at-risk>"),
        ["submit"] => {
            let (epoch, record) = session.begin_submission();
            dispatcher.dispatch(epoch, record);
            render_state(session.state());
        }
        ["quit"] | ["exit"] => return false,
        [other, ..] => println!("unknown command '{other}' (try 'help')"),
    }
    true
}

fn print_help() {
    println!("commands:");
    println!("  fields                 list the clinical fields");
    println!("  show                   print the current record");
    println!("  set <field> <value>    edit one field");
    println!("  preset <name>          load 'healthy' or 'at-risk'");
    println!("  submit                 send the record to the classifier");
    println!("  quit                   leave the session");
}

fn print_fields() {
    for field in FIELDS.iter() {
        match field.kind {
            FieldKind::Choice(choices) => {
                let options: Vec<String> = choices
                    .iter()
                    .map(|c| format!("{}={}", c.label, c.value))
                    .collect();
                println!("  {:10} {} [{}]", field.name, field.label, options.join(", "));
            }
            _ if field.hint.is_empty() => println!("  {:10} {}", field.name, field.label),
            _ => println!("  {:10} {} ({})", field.name, field.label, field.hint),
        }
    }
}

fn print_record(session: &FormSession) {
    let record = session.record();
    for field in FIELDS.iter() {
        // Every schema name resolves; get() only misses on foreign names.
        if let Some(value) = record.get(field.name) {
            println!("  {:10} {}", field.name, value);
        }
    }
}

fn render_state(state: &LifecycleState) {
    match state {
        LifecycleState::Idle => println!("-- awaiting diagnostics data"),
        LifecycleState::Pending => println!("-- analyzing..."),
        LifecycleState::Succeeded(prediction) => {
            println!("== {}", prediction.status);
            if let Some(probabilities) = &prediction.probabilities {
                println!("   Healthy:       {:.1}%", probabilities.healthy);
                println!("   Heart Disease: {:.1}%", probabilities.heart_disease);
            }
        }
        LifecycleState::Failed(message) => println!("!! {message}"),
    }
}
