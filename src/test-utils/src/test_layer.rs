// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{Subscriber, field, span};
use tracing_subscriber::{Layer, layer::Context, prelude::*};

/// Represents a captured tracing span with its attributes.
#[derive(Debug, Clone)]
pub struct CapturedSpan {
    /// The unique ID of the span.
    pub id: span::Id,
    /// The name of the span.
    pub name: String,
    /// A map of attribute keys to their string representations.
    pub attributes: HashMap<String, String>,
}

/// Converts field values into their string representation.
struct TestVisitor<'a>(&'a mut HashMap<String, String>);

impl field::Visit for TestVisitor<'_> {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        self.0
            .insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_i64(&mut self, field: &field::Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &field::Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

type SpanLog = Arc<Mutex<Vec<CapturedSpan>>>;

fn lock(log: &SpanLog) -> MutexGuard<'_, Vec<CapturedSpan>> {
    // A test that panicked while holding the lock cannot corrupt a `Vec`.
    log.lock().unwrap_or_else(|e| e.into_inner())
}

/// A tracing layer for capturing and inspecting spans within tests.
///
/// The layer is installed as the default subscriber for the current thread,
/// so tests running in parallel do not see each other's spans. Use it with
/// `#[test]` or the (single-threaded) default `#[tokio::test]` runtime.
///
/// # Example
///
/// ```
/// use google_api_test_utils::test_layer::TestLayer;
///
/// let guard = TestLayer::initialize();
/// tracing::info_span!("my_operation", foo = "bar").in_scope(|| {
///     tracing::info!("Doing something important");
/// });
///
/// let captured = guard.captured();
/// assert_eq!(captured.len(), 1);
/// assert_eq!(captured[0].name, "my_operation");
/// assert_eq!(captured[0].attributes.get("foo").map(String::as_str), Some("bar"));
/// ```
#[derive(Clone, Default)]
pub struct TestLayer {
    log: SpanLog,
}

/// Keeps the [TestLayer] installed, see [TestLayer::initialize].
pub struct CaptureGuard {
    log: SpanLog,
    _default: tracing::subscriber::DefaultGuard,
}

impl TestLayer {
    /// Installs a new layer as the default subscriber for this thread.
    ///
    /// The layer captures spans until the returned guard is dropped.
    pub fn initialize() -> CaptureGuard {
        let layer = TestLayer::default();
        let log = layer.log.clone();
        let subscriber = tracing_subscriber::registry().with(layer);
        CaptureGuard {
            log,
            _default: tracing::subscriber::set_default(subscriber),
        }
    }
}

impl CaptureGuard {
    /// Returns the spans captured so far, in creation order.
    pub fn captured(&self) -> Vec<CapturedSpan> {
        lock(&self.log).clone()
    }
}

impl<S> Layer<S> for TestLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, _ctx: Context<'_, S>) {
        let mut attributes = HashMap::new();
        attrs.record(&mut TestVisitor(&mut attributes));
        lock(&self.log).push(CapturedSpan {
            id: id.clone(),
            name: attrs.metadata().name().to_string(),
            attributes,
        });
    }

    fn on_record(&self, id: &span::Id, values: &span::Record<'_>, _ctx: Context<'_, S>) {
        let mut spans = lock(&self.log);
        // Ids are reused after a span closes, update the most recent one.
        if let Some(captured) = spans.iter_mut().rev().find(|s| s.id == *id) {
            values.record(&mut TestVisitor(&mut captured.attributes));
        }
    }
}
