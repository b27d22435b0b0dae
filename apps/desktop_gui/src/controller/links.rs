//! Best-effort hand-off of URLs to the system browser.

use std::io;
#[cfg(unix)]
use std::{
    ffi::OsString,
    process::{Command, Stdio},
    thread,
};

pub trait LinkOpener {
    fn open(&mut self, url: &str) -> io::Result<()>;
}

/// Hands URLs to the platform's default handler without waiting on it.
///
/// On Unix the handler is spawned with the URL as its single argument and a
/// detached thread reaps it. On Windows the URL goes through `ShellExecuteW`
/// via `opener`, so `cmd.exe` never re-parses it.
#[derive(Debug, Clone)]
pub struct SystemBrowser {
    #[cfg(unix)]
    program: OsString,
}

impl Default for SystemBrowser {
    fn default() -> Self {
        Self {
            #[cfg(target_os = "macos")]
            program: OsString::from("open"),
            #[cfg(all(unix, not(target_os = "macos")))]
            program: OsString::from("xdg-open"),
        }
    }
}

#[cfg(unix)]
impl SystemBrowser {
    /// Uses `program` instead of `xdg-open` / `open`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl LinkOpener for SystemBrowser {
    #[cfg(unix)]
    fn open(&mut self, url: &str) -> io::Result<()> {
        let mut child = Command::new(&self.program)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        thread::Builder::new()
            .name("url-handler-reaper".into())
            .spawn(move || match child.wait() {
                Ok(status) if !status.success() => {
                    tracing::warn!(%status, "url handler exited unsuccessfully")
                }
                Ok(_) => {}
                Err(err) => tracing::warn!(error = %err, "failed to reap url handler"),
            })?;
        Ok(())
    }

    #[cfg(windows)]
    fn open(&mut self, url: &str) -> io::Result<()> {
        opener::open(url).map_err(io::Error::other)
    }
}

pub struct LinkDispatcher {
    opener: Box<dyn LinkOpener>,
}

impl LinkDispatcher {
    pub fn new(opener: impl LinkOpener + 'static) -> Self {
        Self {
            opener: Box::new(opener),
        }
    }

    pub fn system() -> Self {
        Self::new(SystemBrowser::default())
    }

    /// Fire-and-forget: failures are logged and dropped.
    pub fn open_link(&mut self, url: &str) {
        tracing::debug!(url, "opening link");
        if let Err(err) = self.opener.open(url) {
            tracing::warn!(url, error = %err, "failed to open link in browser");
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{
        cell::RefCell,
        io,
        rc::Rc,
    };

    use super::LinkOpener;

    /// Records every request; optionally fails each one.
    #[derive(Clone, Default)]
    pub struct RecordingOpener {
        pub requests: Rc<RefCell<Vec<String>>>,
        pub fail: bool,
    }

    impl RecordingOpener {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl LinkOpener for RecordingOpener {
        fn open(&mut self, url: &str) -> io::Result<()> {
            self.requests.borrow_mut().push(url.to_string());
            if self.fail {
                Err(io::Error::new(io::ErrorKind::NotFound, "no url handler"))
            } else {
                Ok(())
            }
        }
    }
}
