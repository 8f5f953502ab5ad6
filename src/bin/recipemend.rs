fn main() {
    let code = recipemend::cli::run();
    std::process::exit(code);
}
