//! piploc binary: pip with --target __pypackages__/<M.m>/lib for installs.
fn main() {
    if let Err(e) = pythonloc::run_piploc() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}
