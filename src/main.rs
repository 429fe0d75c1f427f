fn main() {
    if let Err(e) = bassmaster::run() {
        tracing::error!(error = %e, "Planner failed");
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
