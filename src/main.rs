fn main() {
    if let Err(err) = catalog_insights::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
