use clap::{Parser, Subcommand};
use heartguard_client::{classifier_url_from_env_value, ClassifierClient, ClassifierConfig};
use heartguard_core::{
    FieldKind, FormSession, LifecycleState, Preset, SubmissionOutcome, FIELDS,
};

#[derive(Parser)]
#[command(name = "heartguard")]
#[command(about = "Heart disease classifier client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the thirteen clinical fields
    Fields,
    /// Submit a patient record and print the diagnosis
    Predict {
        /// Start from a preset profile ("healthy" or "at-risk")
        #[arg(long)]
        preset: Option<String>,
        /// Override a field, e.g. --set age=61 (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,
        /// Classifier endpoint (defaults to $CLASSIFIER_URL, then the
        /// built-in local endpoint)
        #[arg(long)]
        endpoint: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Fields) => {
            for field in FIELDS.iter() {
                match field.kind {
                    FieldKind::Choice(choices) => {
                        let options: Vec<String> = choices
                            .iter()
                            .map(|c| format!("{}={}", c.label, c.value))
                            .collect();
                        println!("{:10} {} [{}]", field.name, field.label, options.join(", "));
                    }
                    _ => {
                        if field.hint.is_empty() {
                            println!("{:10} {}", field.name, field.label);
                        } else {
                            println!("{:10} {} ({})", field.name, field.label, field.hint);
                        }
                    }
                }
            }
        }
        Some(Commands::Predict {
            preset,
            set,
            endpoint,
        }) => {
            let mut session = FormSession::new();

            if let Some(name) = preset {
                session.load_preset(name.parse::<Preset>()?);
            }

            for assignment in &set {
                let (name, raw) = assignment.split_once('=').ok_or_else(|| {
                    anyhow::anyhow!("--set expects FIELD=VALUE, got '{assignment}'")
                })?;
                session.set_field(name.trim(), raw.trim())?;
            }

            let url =
                classifier_url_from_env_value(endpoint.or_else(|| std::env::var("CLASSIFIER_URL").ok()))?;
            let client = ClassifierClient::new(ClassifierConfig::new(url));

            let (epoch, record) = session.begin_submission();
            let outcome = match client.predict(&record).await {
                Ok(prediction) => SubmissionOutcome::Success(prediction),
                Err(error) => SubmissionOutcome::Failure(error.to_string()),
            };
            session.resolve(epoch, outcome);

            match session.state() {
                LifecycleState::Succeeded(prediction) => {
                    println!("{}", prediction.status);
                    if let Some(probabilities) = &prediction.probabilities {
                        println!("  Healthy:       {:.1}%", probabilities.healthy);
                        println!("  Heart Disease: {:.1}%", probabilities.heart_disease);
                    }
                }
                LifecycleState::Failed(message) => {
                    eprintln!("{}", message);
                    std::process::exit(1);
                }
                // resolve() with the epoch just issued always settles
                LifecycleState::Idle | LifecycleState::Pending => {}
            }
        }
        None => {
            println!("Use 'heartguard --help' for commands");
        }
    }

    Ok(())
}
