//! Common test utilities: a recording mail transport and a log capture
#![allow(dead_code)]

use async_trait::async_trait;
use authmail_core::{MailError, MailTransport};
use lettre::Message;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Mail transport that records sent messages and can be told to fail
#[derive(Default)]
pub struct MockTransport {
    sent: Mutex<Vec<String>>,
    fail_with: Option<String>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Some(reason.to_string()),
        }
    }

    /// Formatted messages handed to the transport, in order
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for MockTransport {
    async fn send_raw(&self, message: Message) -> Result<(), MailError> {
        self.sent
            .lock()
            .unwrap()
            .push(String::from_utf8_lossy(&message.formatted()).to_string());

        match &self.fail_with {
            Some(reason) => Err(MailError::Transport(reason.clone())),
            None => Ok(()),
        }
    }
}

/// Captures formatted `tracing` output for assertions
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Installs a subscriber for the current thread; logs are captured until
    /// the returned guard is dropped
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).to_string()
    }
}

pub struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}
