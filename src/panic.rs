use std::io::{self, Write};
use std::process;

/// Writes `msg` to `stream` with a guaranteed trailing newline, then
/// flushes the stream so the message is visible before returning.
///
/// Write and flush errors are swallowed: diagnostic output is best-effort
/// and never produces a recoverable error.
pub fn sync_write(
  stream: &mut impl Write,
  msg: &str,
) {
  let _ = stream.write_all(msg.as_bytes());

  if !msg.ends_with('\n') {
    let _ = stream.write_all(b"\n");
  }

  let _ = stream.flush();
}

/// Flushes stdout, emits `msg` to stderr with a trailing newline, and
/// terminates the process with exit status 1. Never returns.
///
/// This is the crate's only error path — nothing here returns a
/// recoverable error. Prefer the [`fatal!`] macro for formatted messages.
///
/// [`fatal!`]: crate::fatal
pub fn panic_exit(msg: &str) -> ! {
  let _ = io::stdout().flush();

  sync_write(&mut io::stderr(), msg);

  process::exit(1);
}

/// `format!`-style front end for [`panic_exit`].
///
/// ```rust,ignore
/// hotbox::fatal!("cannot map {} bytes at {:#x}", len, addr);
/// ```
#[macro_export]
macro_rules! fatal {
  ($($arg:tt)*) => {
    $crate::panic_exit(&::std::format!($($arg)*))
  };
}
