use std::env;
use std::str::FromStr;

pub enum EnvKey {
    SourceBucket,
    OutputBucket,
    RoleArn,
    Region,
    RunTimeoutSecs,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::SourceBucket => "MEDIAJOB_SOURCE_BUCKET",
            EnvKey::OutputBucket => "MEDIAJOB_OUTPUT_BUCKET",
            EnvKey::RoleArn => "MEDIAJOB_ROLE_ARN",
            EnvKey::Region => "AWS_REGION",
            EnvKey::RunTimeoutSecs => "MEDIAJOB_RUN_TIMEOUT_SECS",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
