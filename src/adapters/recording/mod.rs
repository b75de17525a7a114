//! Recording adapters that capture interactions to tapes.

pub mod clock;
pub mod filesystem;

pub use clock::RecordingClock;
pub use filesystem::RecordingFileSystem;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::tape::recorder::TapeRecorder;

/// Record an interaction with a plain (non-Result) return value.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<TapeRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let input_json = serde_json::to_value(input).expect("failed to serialize recording input");
    let output_json = serde_json::to_value(output).expect("failed to serialize recording output");

    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, input_json, output_json);
}

/// Record a `Result<T, E>` interaction using the Ok/Err JSON convention.
///
/// Convention:
/// - `Ok(v)` is serialized as `{"Ok": v}`
/// - `Err(e)` is serialized as `{"Err": e}` with the error's full structure,
///   so replay can reconstruct the classified error rather than a bare
///   message string.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<TapeRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: Serialize,
    I: Serialize,
{
    let input_json = serde_json::to_value(input).expect("failed to serialize recording input");

    let output_json = match result {
        Ok(v) => {
            let inner = serde_json::to_value(v).expect("failed to serialize Ok value");
            serde_json::json!({ "Ok": inner })
        }
        Err(e) => {
            let inner = serde_json::to_value(e).expect("failed to serialize Err value");
            serde_json::json!({ "Err": inner })
        }
    };

    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, input_json, output_json);
}
