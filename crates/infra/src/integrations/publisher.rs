//! Publisher writing posts to an `io::Write` sink

use std::io::{self, Write};

use parking_lot::Mutex;
use rewatch_core::{PublishReceipt, Publisher};
use rewatch_domain::constants::CODE_PUBLISH_FAILED;
use rewatch_domain::{DigestIssue, SourceSystem};
use tracing::{info, warn};
use uuid::Uuid;

/// Writes each post followed by a newline and flushes
///
/// Every successful publish gets a fresh UUIDv7 message id.
#[derive(Debug)]
pub struct WriterPublisher<W> {
    sink: Mutex<W>,
}

impl<W: Write + Send> WriterPublisher<W> {
    pub fn new(sink: W) -> Self {
        Self { sink: Mutex::new(sink) }
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }

    fn write_post(&self, text: &str) -> io::Result<()> {
        let mut sink = self.sink.lock();
        sink.write_all(text.as_bytes())?;
        sink.write_all(b"\n")?;
        sink.flush()
    }
}

impl WriterPublisher<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Publisher for WriterPublisher<W> {
    fn publish(&self, text: &str) -> PublishReceipt {
        match self.write_post(text) {
            Ok(()) => {
                let message_id = Uuid::now_v7().to_string();
                info!(%message_id, bytes = text.len(), "Post published");
                PublishReceipt { message_id: Some(message_id), issues: Vec::new() }
            }
            Err(err) => {
                warn!(error = %err, "Failed to publish post");
                PublishReceipt {
                    message_id: None,
                    issues: vec![DigestIssue::error(
                        CODE_PUBLISH_FAILED,
                        SourceSystem::PublishingChannel,
                        "Post could not be written to the channel.",
                    )
                    .with_detail("reason", err.to_string())],
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_text_and_returns_v7_id() {
        let publisher = WriterPublisher::new(Vec::new());

        let receipt = publisher.publish("BOS vs NYR");

        assert!(receipt.issues.is_empty());
        let id = Uuid::parse_str(receipt.message_id.as_deref().unwrap()).unwrap();
        assert_eq!(id.get_version_num(), 7);
        assert_eq!(publisher.into_inner(), b"BOS vs NYR\n");
    }

    #[test]
    fn test_message_ids_are_unique() {
        let publisher = WriterPublisher::new(Vec::new());
        let first = publisher.publish("a").message_id;
        let second = publisher.publish("b").message_id;
        assert_ne!(first, second);
    }

    #[test]
    fn test_write_failure_becomes_publish_failed_issue() {
        let receipt = WriterPublisher::new(BrokenSink).publish("text");

        assert!(receipt.message_id.is_none());
        assert!(!receipt.succeeded());
        assert_eq!(receipt.issues[0].code, CODE_PUBLISH_FAILED);
        assert!(receipt.issues[0].details["reason"].contains("pipe closed"));
    }
}
