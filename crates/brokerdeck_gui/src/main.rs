//! Console binary entry point.

fn main() {
    if let Err(err) = brokerdeck_gui::run() {
        eprintln!("brokerdeck error: {err}");
        std::process::exit(1);
    }
}
