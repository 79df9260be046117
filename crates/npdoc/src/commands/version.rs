pub(crate) fn version() {
    println!("npdoc {}", env!("CARGO_PKG_VERSION"));
}
