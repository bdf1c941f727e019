//! pipfreezeloc binary: requirements installed locally but not globally.
fn main() {
    if let Err(e) = pythonloc::run_pipfreezeloc() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}
