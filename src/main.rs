//! jobhunter main entrypoint.

use jobhunter::run;
use jobhunter::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
