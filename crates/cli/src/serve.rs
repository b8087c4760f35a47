//! Line-oriented stdio transport.
//!
//! Each stdin line holds one JSON [`Op`]; each is answered by one JSON
//! [`Event`] line on stdout.

use anyhow::{Context, Result};
use ar_core::Runtime;
use ar_protocol::{Event, Op};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

/// Serve operations from `input` until EOF or a `shutdown` operation.
///
/// The runtime is shut down in both cases.
pub async fn run<R, W>(runtime: &Runtime, input: R, mut output: W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(input).lines();
    info!("Serving operations on stdio");

    while let Some(line) = lines.next_line().await.context("failed to read operation")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (event, stop) = match serde_json::from_str::<Op>(line) {
            Ok(op) => {
                debug!(?op, "Received operation");
                let stop = op == Op::Shutdown;
                (runtime.handle(op).await, stop)
            }
            Err(e) => (
                Event::Error {
                    message: format!("Invalid operation: {e}"),
                },
                false,
            ),
        };

        write_event(&mut output, &event).await?;
        if stop {
            return Ok(());
        }
    }

    runtime.shutdown().await;
    Ok(())
}

async fn write_event<W: AsyncWrite + Unpin>(output: &mut W, event: &Event) -> Result<()> {
    let mut json = serde_json::to_vec(event).context("failed to encode event")?;
    json.push(b'\n');
    output.write_all(&json).await.context("failed to write event")?;
    output.flush().await.context("failed to flush event")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ar_core::agents::AgentFactory;

    async fn serve(input: &str) -> Vec<Event> {
        let dir = tempfile::tempdir().unwrap();
        let runtime = Runtime::new(AgentFactory::new(dir.path()));
        let mut output = Vec::new();

        run(&runtime, input.as_bytes(), &mut output).await.unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_serve_answers_each_line() {
        let input = concat!(
            r#"{"type":"createAgent","payload":{"agent_type":"rule_based","id":"g","config":{"rules":[{"pattern":"hi","response":"Hello!"}]}}}"#,
            "\n\n",
            r#"{"type":"sendMessage","payload":{"id":"g","message":"hi there"}}"#,
            "\n",
            r#"{"type":"listAgents"}"#,
            "\n",
        );

        let events = serve(input).await;
        assert_eq!(
            events,
            vec![
                Event::AgentCreated { id: "g".to_string(), success: true },
                Event::MessageResponse { id: "g".to_string(), response: "Hello!".to_string() },
                Event::AgentList { ids: vec!["g".to_string()] },
            ]
        );
    }

    #[tokio::test]
    async fn test_serve_reports_malformed_lines() {
        let events = serve("not json\n{\"type\":\"listAgents\"}\n").await;

        assert!(matches!(&events[0], Event::Error { message } if message.starts_with("Invalid operation")));
        assert_eq!(events[1], Event::AgentList { ids: vec![] });
    }

    #[tokio::test]
    async fn test_serve_stops_at_shutdown() {
        let events = serve("{\"type\":\"shutdown\"}\n{\"type\":\"listAgents\"}\n").await;
        assert_eq!(events, vec![Event::ShutdownComplete]);
    }
}
