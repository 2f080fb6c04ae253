// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution primitive used by the engine's Spinner.
//!
//! Kept deliberately low-level: building argv into a [`tokio::process::Command`],
//! streaming stdout/stderr line-by-line into an [`OutputSink`], and waiting
//! with a timeout that kills the child on expiry. The Spinner (in
//! `spindle-engine`) is the layer that turns these primitives into the
//! fixed lifecycle event sequence spec section 4.3 describes.

use crate::writer::OutputSink;
use spindle_core::CancelToken;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};

#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("empty argv")]
    EmptyArgv,
    #[error("failed to start process: {0}")]
    Start(#[source] std::io::Error),
}

/// Builds a [`Command`] for `argv`, inheriting the parent environment and
/// appending `extra_env` (`KEY=VALUE` pairs), per spec section 6:
/// "child processes inherit the parent's environment, augmented (not
/// replaced) by the step's env list".
pub fn build_command(
    argv: &[String],
    workdir: Option<&Path>,
    extra_env: &[String],
) -> Result<Command, SpawnError> {
    let (program, args) = argv.split_first().ok_or(SpawnError::EmptyArgv)?;
    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = workdir {
        cmd.current_dir(dir);
    }
    for kv in extra_env {
        if let Some((key, value)) = kv.split_once('=') {
            cmd.env(key, value);
        }
    }
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    Ok(cmd)
}

/// Spawns `cmd`, wiring its stdout/stderr to line-buffered sinks.
///
/// Returns the running [`Child`] plus join handles for the two streaming
/// tasks; callers must await those handles after `wait` returns to make
/// sure every line has been flushed to its sink before a terminal event
/// is emitted.
pub fn spawn(
    mut cmd: Command,
    stdout_sink: Arc<dyn OutputSink>,
    stderr_sink: Arc<dyn OutputSink>,
) -> Result<(Child, StreamHandles), SpawnError> {
    let mut child = cmd.spawn().map_err(SpawnError::Start)?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let stdout_task = tokio::spawn(stream_lines(stdout, stdout_sink));
    let stderr_task = tokio::spawn(stream_lines(stderr, stderr_sink));

    Ok((
        child,
        StreamHandles {
            stdout_task,
            stderr_task,
        },
    ))
}

async fn stream_lines<R>(reader: Option<R>, sink: Arc<dyn OutputSink>)
where
    R: tokio::io::AsyncRead + Unpin,
{
    let Some(reader) = reader else { return };
    let mut lines = BufReader::new(reader).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => sink.on_line(&line),
            Ok(None) => break,
            Err(_) => break,
        }
    }
}

pub struct StreamHandles {
    stdout_task: tokio::task::JoinHandle<()>,
    stderr_task: tokio::task::JoinHandle<()>,
}

impl StreamHandles {
    /// Waits for both streaming tasks to drain, guaranteeing every
    /// produced line has reached its sink.
    pub async fn join(self) {
        let _ = tokio::join!(self.stdout_task, self.stderr_task);
    }
}

/// The outcome of waiting on a spawned child with a timeout.
#[derive(Debug)]
pub enum WaitOutcome {
    Success,
    NonZero(ExitStatus),
    TimedOut,
    Cancelled,
}

/// Waits on `child`, killing it if `timeout` elapses first or `cancel` fires
/// first (global cancellation propagating to every in-flight child, per
/// spec section 5). The per-step timeout is the dedicated child context
/// described there; `cancel` is the outer, workflow-wide one.
pub async fn wait_with_timeout(
    child: &mut Child,
    timeout: Duration,
    cancel: &CancelToken,
) -> std::io::Result<WaitOutcome> {
    tokio::select! {
        res = tokio::time::timeout(timeout, child.wait()) => match res {
            Ok(Ok(status)) if status.success() => Ok(WaitOutcome::Success),
            Ok(Ok(status)) => Ok(WaitOutcome::NonZero(status)),
            Ok(Err(e)) => Err(e),
            Err(_elapsed) => {
                let _ = child.start_kill();
                let _ = child.wait().await;
                Ok(WaitOutcome::TimedOut)
            }
        },
        _ = cancel.cancelled() => {
            let _ = child.start_kill();
            let _ = child.wait().await;
            Ok(WaitOutcome::Cancelled)
        }
    }
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
