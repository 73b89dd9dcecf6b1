use anyhow::Context;
use std::ffi::OsString;
use std::io::{Read, Write};
use std::process::{Child, Command, ExitStatus, Output, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Clone, Copy)]
pub enum StdinSource<'a> {
    /// Hand our own stdin to the child (the message being signed).
    Inherit,
    Bytes(&'a [u8]),
}

pub enum Completion {
    Finished(Output),
    /// The child was killed after running past the limit.
    TimedOut(Duration),
}

/// Run `program` to completion with stdout and stderr captured.
///
/// Spawn failures are errors; how the child exited is left to the caller.
/// On timeout the child is killed and the stdin feeder joined. The output
/// readers are left to finish on their own, since a grandchild may still
/// hold the pipes open.
pub fn run(
    program: &str,
    args: &[OsString],
    stdin: StdinSource<'_>,
    timeout: Option<Duration>,
) -> anyhow::Result<Completion> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .stdin(match stdin {
            StdinSource::Inherit => Stdio::inherit(),
            StdinSource::Bytes(_) => Stdio::piped(),
        });
    let mut child = cmd
        .spawn()
        .with_context(|| format!("failed to spawn {program}"))?;

    let feeder = match (child.stdin.take(), stdin) {
        (Some(mut pipe), StdinSource::Bytes(bytes)) => {
            let bytes = bytes.to_vec();
            // the child may exit without reading; a broken pipe is its answer
            Some(thread::spawn(move || {
                let _ = pipe.write_all(&bytes);
            }))
        }
        _ => None,
    };
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = match timeout {
        Some(limit) => wait_until(&mut child, limit)?,
        None => Some(
            child
                .wait()
                .with_context(|| format!("failed to wait for {program}"))?,
        ),
    };

    if let Some(feeder) = feeder {
        let _ = feeder.join();
    }
    let Some(status) = status else {
        return Ok(Completion::TimedOut(timeout.unwrap_or_default()));
    };
    Ok(Completion::Finished(Output {
        status,
        stdout: collect(stdout)?,
        stderr: collect(stderr)?,
    }))
}

/// `None` once `limit` has passed; the child is killed and reaped by then.
fn wait_until(child: &mut Child, limit: Duration) -> anyhow::Result<Option<ExitStatus>> {
    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<std::io::Result<Vec<u8>>>> {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            pipe.read_to_end(&mut buf)?;
            Ok(buf)
        })
    })
}

fn collect(reader: Option<JoinHandle<std::io::Result<Vec<u8>>>>) -> anyhow::Result<Vec<u8>> {
    match reader {
        Some(handle) => match handle.join() {
            Ok(result) => Ok(result.context("failed to read child output")?),
            Err(_) => anyhow::bail!("child output reader panicked"),
        },
        None => Ok(Vec::new()),
    }
}
