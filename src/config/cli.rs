use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_non_empty_list, validate_path, Validate};
use clap::{Args, Parser};

pub const DEFAULT_OUTPUT: &str = "filtered_users.json";

#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact, help = "Diagnostic output format")]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "filter-users")]
#[command(about = "Filter users by age and generate JSON artifact")]
pub struct CliConfig {
    /// Path to the JSON file containing user data
    pub json_file: String,

    /// Minimum age threshold (users >= this age will be included)
    #[arg(allow_negative_numbers = true)]
    pub min_age: i64,

    /// Output JSON artifact file name
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    #[command(flatten)]
    pub log: LogArgs,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.json_file
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn min_age(&self) -> i64 {
        self.min_age
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("json_file", &self.json_file)?;
        validate_path("output", &self.output)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "validate-files")]
#[command(about = "Check that prerequisite files exist")]
pub struct ValidateFilesArgs {
    /// Files that must exist
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<String>,

    /// Also require each file to contain well-formed JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub log: LogArgs,
}

impl Validate for ValidateFilesArgs {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("files", &self.files)?;
        self.files
            .iter()
            .try_for_each(|file| validate_path("files", file))
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "read-config")]
#[command(about = "Print the minimum age from a JSON configuration file")]
pub struct ReadConfigArgs {
    /// Path to the JSON configuration file
    #[arg(value_name = "CONFIG")]
    pub config: String,

    #[command(flatten)]
    pub log: LogArgs,
}

impl Validate for ReadConfigArgs {
    fn validate(&self) -> Result<()> {
        validate_path("config", &self.config)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "count-entries")]
#[command(about = "Print the number of entries in a JSON result file")]
pub struct CountEntriesArgs {
    /// Path to the JSON result file
    #[arg(value_name = "FILE")]
    pub file: String,

    #[command(flatten)]
    pub log: LogArgs,
}

impl Validate for CountEntriesArgs {
    fn validate(&self) -> Result<()> {
        validate_path("file", &self.file)
    }
}
