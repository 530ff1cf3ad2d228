//! Run configuration sources of the command line.

use std::path::Path;

use tokio::io::AsyncReadExt;

use osdu_core::{CoreResult, RunConf};

/// Reads a run configuration document from a file, or stdin for `-`.
///
/// # Errors
///
/// Returns `CoreError::IoError` if the file or stdin cannot be read.
pub async fn read_conf_file(path: &Path) -> CoreResult<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        Ok(buf)
    } else {
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

/// Parses the run configuration given inline or read from `conf_file`.
///
/// # Errors
///
/// `CoreError::MissingKey` when neither source is given, otherwise the
/// errors of [`read_conf_file`] and [`RunConf::from_json_str`].
pub async fn load_run_conf(inline: Option<&str>, conf_file: Option<&Path>) -> CoreResult<RunConf> {
    match (inline, conf_file) {
        (Some(inline), _) => RunConf::from_json_str(inline),
        (None, Some(path)) => RunConf::from_json_str(&read_conf_file(path).await?),
        (None, None) => Err(osdu_core::CoreError::missing_key("conf")),
    }
}
