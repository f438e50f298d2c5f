/// Run dispatch: preview the request or perform the exchange.
pub mod exchange;
pub mod preview;

use crate::cli::{Cli, OutputCtx};
use crate::errors::ClientError;

/// Dispatch a parsed `Cli` to its handler.
///
/// # Errors
///
/// Returns `ClientError` on any failure.
pub fn dispatch(cli: &Cli, ctx: &OutputCtx) -> Result<(), ClientError> {
    if cli.dry_run {
        preview::run(cli, ctx)
    } else {
        exchange::run(cli, ctx)
    }
}
