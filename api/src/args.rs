use clap::Parser;
use dietwise_core::domain::common::{
    DEFAULT_DATASET_PATH, DEFAULT_FUZZY_CUTOFF, DEFAULT_MODEL_PATH, DietwiseConfig,
    ReferenceDataConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "dietwise-api", version, about = "Food suitability API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub reference_data: ReferenceDataArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix added to every route, e.g. `/api`.
    #[arg(long, env = "ROOT_PATH", default_value_t = String::new())]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ReferenceDataArgs {
    #[arg(long, env = "DATASET_PATH", default_value = DEFAULT_DATASET_PATH)]
    pub dataset_path: String,

    #[arg(long, env = "MODEL_PATH", default_value = DEFAULT_MODEL_PATH)]
    pub model_path: String,

    /// Minimum similarity (0-1) for fuzzy dataset matches.
    #[arg(long, env = "FUZZY_CUTOFF", default_value_t = DEFAULT_FUZZY_CUTOFF)]
    pub fuzzy_cutoff: f64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for DietwiseConfig {
    fn from(args: Args) -> Self {
        DietwiseConfig {
            reference_data: ReferenceDataConfig {
                dataset_path: args.reference_data.dataset_path,
                model_path: args.reference_data.model_path,
                fuzzy_cutoff: args.reference_data.fuzzy_cutoff,
            },
        }
    }
}
