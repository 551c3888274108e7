use std::io::BufRead;
use std::os::unix::net::UnixListener;
use std::path::PathBuf;

use futures::channel::mpsc;

use crate::app::Message;
use crate::clock::secret::Key;
use crate::host::TimerSpec;

pub(crate) fn socket_path() -> PathBuf {
    let runtime_dir = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(runtime_dir).join("neon-clock.sock")
}

/// Map one control-socket line to a message.
pub(crate) fn parse_command(line: &str) -> Option<Message> {
    match line.trim() {
        "toggle" => Some(Message::ToggleVisibility),
        "focus" => Some(Message::ToggleFocus),
        "remount" => Some(Message::Remount),
        cmd if cmd.starts_with("key ") => {
            let name = cmd[4..].trim();
            if name.is_empty() {
                None
            } else {
                Some(Message::KeyPressed(Key::from_name(name)))
            }
        }
        _ => None,
    }
}

pub(crate) fn socket_listener() -> impl futures::Stream<Item = Message> {
    let (tx, rx) = mpsc::unbounded();
    std::thread::spawn(move || {
        let path = socket_path();
        let _ = std::fs::remove_file(&path);
        let listener = match UnixListener::bind(&path) {
            Ok(l) => l,
            Err(e) => {
                log::error!("failed to bind socket {path:?}: {e}");
                return;
            }
        };
        log::info!("listening on {path:?}");
        for stream in listener.incoming().flatten() {
            let mut buf = String::new();
            if std::io::BufReader::new(stream).read_line(&mut buf).is_ok() {
                match parse_command(&buf) {
                    Some(msg) => {
                        if tx.unbounded_send(msg).is_err() {
                            break;
                        }
                    }
                    None => log::warn!("unknown command: {:?}", buf.trim()),
                }
            }
        }
    });
    rx
}

/// Stream for one registered timer. One-shots send once and end; intervals
/// run until the subscription is dropped and the next send fails.
pub(crate) fn timer_stream(spec: &TimerSpec) -> mpsc::UnboundedReceiver<Message> {
    let spec = *spec;
    let (tx, rx) = mpsc::unbounded();
    std::thread::spawn(move || loop {
        std::thread::sleep(spec.period);
        if tx.unbounded_send(Message::Timer(spec.id)).is_err() || !spec.repeat {
            break;
        }
    });
    rx
}
