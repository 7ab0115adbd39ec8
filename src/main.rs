//! workmanager main entrypoint.

use workmanager::run;
use workmanager::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
