//! pythonloc binary: Python with __pypackages__ on PYTHONPATH.
fn main() {
    if let Err(e) = pythonloc::run_pythonloc() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}
