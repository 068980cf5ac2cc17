//! Tests for `Callable::instrument`.

#![cfg(feature = "tracing")]

use callable::Callable;
use rstest::rstest;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn contents(&self) -> String {
        let buffer = self.0.lock().unwrap();
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[rstest]
fn test_instrument_emits_trace_event_with_name() {
    let captured = CapturedOutput::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("trace"))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let double = Callable::new(|value: i32| value * 2).instrument("double");
    let result = tracing::subscriber::with_default(subscriber, || double.invoke(21));

    assert_eq!(result, 42);
    let output = captured.contents();
    assert!(output.contains("invocation finished"));
    assert!(output.contains("double"));
}

#[rstest]
fn test_instrument_is_silent_above_trace_level() {
    let captured = CapturedOutput::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || writer.clone())
        .finish();

    let greet = Callable::new(|name: String| format!("hi {name}")).instrument("greet");
    let result = tracing::subscriber::with_default(subscriber, || greet.invoke("Dean".to_string()));

    assert_eq!(result, "hi Dean");
    assert!(captured.contents().is_empty());
}

#[rstest]
fn test_instrument_without_subscriber_is_transparent() {
    let length = Callable::new(|text: String| text.len()).instrument("length");
    assert_eq!(length.invoke("four".to_string()), 4);
}
