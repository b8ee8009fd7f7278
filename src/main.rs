//! rBikeshare main entrypoint.

use rbikeshare::run;
use rbikeshare::ui::messages::error;

fn main() {
    env_logger::init();

    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
