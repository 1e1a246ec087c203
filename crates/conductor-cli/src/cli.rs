use clap::{Parser, ValueEnum};
use conductor_config::ConductorConfig;

/// Output mode for the save receipt.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Save a spec document as linked project, spec, and artifact rows.
#[derive(Debug, Parser)]
#[command(name = "save-spec", version, about)]
pub struct Cli {
    /// Spec file to read (default: pasted.txt)
    #[arg(long)]
    pub file: Option<String>,

    /// Local database file
    #[arg(long)]
    pub db_path: Option<String>,

    /// Remote libSQL server URL (takes precedence over --db-path)
    #[arg(long)]
    pub db_url: Option<String>,

    /// Name of the project row
    #[arg(long)]
    pub project_name: Option<String>,

    /// Version label of the spec row
    #[arg(long)]
    pub spec_version: Option<String>,

    /// Label of the model that produced the spec
    #[arg(long)]
    pub source_model: Option<String>,

    /// Output format: text, json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut ConductorConfig) {
        let overrides = [
            (&self.file, &mut config.spec.file),
            (&self.project_name, &mut config.spec.project_name),
            (&self.spec_version, &mut config.spec.version),
            (&self.source_model, &mut config.spec.source_model),
            (&self.db_path, &mut config.database.path),
            (&self.db_url, &mut config.database.url),
        ];
        for (flag, field) in overrides {
            if let Some(value) = flag {
                field.clone_from(value);
            }
        }

        // An explicit local path beats a URL that came from config or env.
        if self.db_path.is_some() && self.db_url.is_none() {
            config.database.url.clear();
        }
    }
}
