use std::error::Error;
use std::fmt;
use tokio_cron_scheduler::JobSchedulerError;

/// Custom Error and Result types to unify errors from all sources.
pub type TableResult<T> = Result<T, TableError>;

#[derive(Debug)]
pub enum TableError {
    /// A "runs/overs" composite could not be read.
    MalformedInput(String),
    /// The fetched markup carries no embedded standings data.
    PayloadNotFound,
    /// The embedded data does not have the shape of a points table.
    Schema {
        context: String,
        cause: Option<Box<TableError>>,
    },
    Transport(String),
    Config(String),
    Scheduler(String),
    Template(String),
    Server(String),
}

impl TableError {
    pub fn schema(context: impl Into<String>) -> Self {
        TableError::Schema {
            context: context.into(),
            cause: None,
        }
    }

    pub fn schema_caused_by(context: impl Into<String>, cause: TableError) -> Self {
        TableError::Schema {
            context: context.into(),
            cause: Some(Box::new(cause)),
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TableError::MalformedInput(s) => write!(f, "Malformed Input: {}", s),
            TableError::PayloadNotFound => write!(f, "Embedded payload not found"),
            TableError::Schema {
                context,
                cause: Some(cause),
            } => write!(f, "Schema Error: {}. {}", context, cause),
            TableError::Schema { context, cause: None } => write!(f, "Schema Error: {}", context),
            TableError::Transport(s) => write!(f, "HTTP Error: {}", s),
            TableError::Config(s) => write!(f, "Config Error: {}", s),
            TableError::Scheduler(s) => write!(f, "Scheduler Error: {}", s),
            TableError::Template(s) => write!(f, "Template Error: {}", s),
            TableError::Server(s) => write!(f, "Server Error: {}", s),
        }
    }
}

impl Error for TableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TableError::Schema {
                cause: Some(cause), ..
            } => Some(cause.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TableError {
    fn from(error: reqwest::Error) -> Self {
        TableError::Transport(error.to_string())
    }
}

impl From<JobSchedulerError> for TableError {
    fn from(error: JobSchedulerError) -> Self {
        TableError::Scheduler(error.to_string())
    }
}

impl From<figment::Error> for TableError {
    fn from(error: figment::Error) -> Self {
        TableError::Config(error.to_string())
    }
}

impl From<minijinja::Error> for TableError {
    fn from(error: minijinja::Error) -> Self {
        TableError::Template(error.to_string())
    }
}

impl From<hyper::Error> for TableError {
    fn from(error: hyper::Error) -> Self {
        TableError::Server(error.to_string())
    }
}
