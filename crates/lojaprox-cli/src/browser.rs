//! Opening a URL in the platform default browser.

use std::io;
use std::process::Command;

/// Opens `url` in the default browser by spawning the platform opener.
///
/// Returns as soon as the opener process is spawned; the caller decides
/// whether a failure matters.
///
/// # Errors
///
/// Returns the spawn error when the opener binary cannot be started.
pub fn open_in_browser(url: &str) -> io::Result<()> {
    opener_command(url).spawn()?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

#[cfg(test)]
mod tests {
    use super::opener_command;

    #[test]
    fn opener_receives_url_as_argument() {
        let command = opener_command("https://www.google.com/maps/dir/?api=1");
        let args: Vec<String> = command
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert!(
            args.iter().any(|a| a == "https://www.google.com/maps/dir/?api=1"),
            "{args:?}"
        );
    }
}
