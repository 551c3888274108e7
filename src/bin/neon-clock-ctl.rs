use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::PathBuf;
use std::process;

const KEY_NAMES: &[&str] = &["ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight"];

fn socket_path() -> PathBuf {
    let runtime_dir = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(runtime_dir).join("neon-clock.sock")
}

fn is_valid(args: &[String]) -> bool {
    match args {
        [cmd] => matches!(cmd.as_str(), "toggle" | "focus" | "remount"),
        [cmd, name] if cmd == "key" => {
            KEY_NAMES.contains(&name.as_str()) || name.chars().count() == 1
        }
        _ => false,
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        usage();
        process::exit(1);
    }

    let cmd = args.join(" ");
    if !is_valid(&args) {
        eprintln!("unknown command: {cmd}");
        usage();
        process::exit(1);
    }

    let path = socket_path();
    let mut stream = match UnixStream::connect(&path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("neon-clock not running ({path:?}): {e}");
            process::exit(1);
        }
    };

    if let Err(e) = writeln!(stream, "{cmd}") {
        eprintln!("failed to send command: {e}");
        process::exit(1);
    }
}

fn usage() {
    eprintln!("usage: neon-clock-ctl <command>");
    eprintln!();
    eprintln!("commands:");
    eprintln!("  toggle      show/hide the clock (hiding unmounts it)");
    eprintln!("  focus       toggle keyboard focus on the clock surface");
    eprintln!("  remount     replace the clock with a fresh instance");
    eprintln!("  key <name>  inject a key press (ArrowUp, ArrowDown, ArrowLeft, ArrowRight, or a single character)");
}
