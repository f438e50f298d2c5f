/// The one request/response round trip with the game.
use std::io::Write;
use std::num::NonZeroUsize;
use std::time::Duration;

use tracing::debug;

use crate::cli::output::write_replies;
use crate::cli::{Cli, OutputCtx};
use crate::conn::{Connection, Endpoint};
use crate::errors::ClientError;
use crate::reply::ReplyBatch;
use crate::request::build_batch;

/// Send `tokens` as one batch and decode the single reply.
///
/// Tokens are validated before connecting, so a bad token never opens a
/// stream. The connection is closed on every path out of this function.
///
/// # Errors
///
/// Returns `ClientError::Request` for an empty command name and
/// `ClientError::Conn` on connect, send or receive failure.
pub fn exchange<S: AsRef<str>>(
    tokens: &[S],
    endpoint: Endpoint,
    timeout: Duration,
    max_reply_bytes: NonZeroUsize,
    ctx: &OutputCtx,
) -> Result<ReplyBatch, ClientError> {
    let request = build_batch(tokens)?.encode()?;

    let t_connect = ctx.timer("connect");
    let mut conn = Connection::open(endpoint, timeout)?;
    drop(t_connect);

    conn.send(&request)?;

    let t_receive = ctx.timer("receive");
    let reply = conn.receive(max_reply_bytes)?;
    drop(t_receive);
    drop(conn);

    Ok(ReplyBatch::decode(&reply))
}

/// Run the exchange and print the replies.
///
/// # Errors
///
/// Returns any `exchange` error, or `ClientError::Output` if stdout cannot be written.
pub fn run(cli: &Cli, ctx: &OutputCtx) -> Result<(), ClientError> {
    let batch = exchange(
        &cli.tokens,
        cli.endpoint(),
        cli.timeout(),
        cli.max_reply_bytes,
        ctx,
    )?;

    let _t_render = ctx.timer("render");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_replies(&mut out, &batch, ctx).map_err(ClientError::Output)?;
    out.flush().map_err(ClientError::Output)?;
    debug!("replies written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::conn::{ConnError, DEFAULT_MAX_REPLY_BYTES};
    use crate::request::RequestError;
    use serde_json::{Value, json};
    use std::io::Read;
    use std::net::{IpAddr, Ipv4Addr, TcpListener};
    use std::thread;

    fn ctx() -> OutputCtx {
        OutputCtx::new(OutputFormat::Text, false)
    }

    /// A fake game that records the request and answers with `reply`.
    fn fake_game(reply: &'static [u8]) -> (Endpoint, thread::JoinHandle<Value>) {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        let endpoint = Endpoint {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: listener.local_addr().unwrap().port(),
        };
        let handle = thread::spawn(move || {
            let (mut sock, _) = listener.accept().unwrap();
            let mut buf = vec![0u8; 4096];
            let n = sock.read(&mut buf).unwrap();
            sock.write_all(reply).unwrap();
            serde_json::from_slice(&buf[..n]).unwrap()
        });
        (endpoint, handle)
    }

    #[test]
    fn test_exchange_sends_batch_and_decodes_reply() {
        let (endpoint, game) = fake_game(br#"[{"error": "unknown"}, {"options": {"elements": 4}}]"#);

        let batch = exchange(
            &["bogus", "inventory=\"items\""],
            endpoint,
            Duration::from_secs(2),
            DEFAULT_MAX_REPLY_BYTES,
            &ctx(),
        )
        .unwrap();

        assert_eq!(
            game.join().unwrap(),
            json!([
                {"command": "bogus", "value": null},
                {"command": "inventory", "value": "items"}
            ])
        );
        assert_eq!(
            batch,
            ReplyBatch::Replies(vec![
                json!({"error": "unknown"}),
                json!({"options": {"elements": 4}})
            ])
        );
    }

    #[test]
    fn test_bad_token_fails_before_connecting() {
        let endpoint = Endpoint {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 9,
        };
        let result = exchange(
            &["=oops"],
            endpoint,
            Duration::from_millis(100),
            DEFAULT_MAX_REPLY_BYTES,
            &ctx(),
        );
        assert!(matches!(
            result,
            Err(ClientError::Request(RequestError::EmptyName { .. }))
        ));
    }

    #[test]
    fn test_no_game_listening() {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        let endpoint = Endpoint {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: listener.local_addr().unwrap().port(),
        };
        drop(listener);

        let result = exchange(
            &["fps"],
            endpoint,
            Duration::from_millis(200),
            DEFAULT_MAX_REPLY_BYTES,
            &ctx(),
        );
        let err = result.unwrap_err();
        assert!(matches!(err, ClientError::Conn(ConnError::ConnectFailed(_))));
        assert_eq!(err.to_string(), "Cannot connect to the game");
    }
}
