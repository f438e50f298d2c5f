/// `--dry-run`: print the request document without connecting.
use std::io::Write;

use crate::cli::output::write_request;
use crate::cli::{Cli, OutputCtx};
use crate::errors::ClientError;
use crate::request::build_batch;

/// Run a dry run.
///
/// # Errors
///
/// Returns `ClientError::Request` for an empty command name, `ClientError::Output`
/// if stdout cannot be written.
pub fn run(cli: &Cli, ctx: &OutputCtx) -> Result<(), ClientError> {
    let batch = build_batch(&cli.tokens)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_request(&mut out, &batch, ctx).map_err(ClientError::Output)?;
    out.flush().map_err(ClientError::Output)
}
