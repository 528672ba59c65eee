use driftfield::prelude::*;

fn main() {
    let result = Viewer::new()
        .with_title("driftfield - ambient particle field")
        .run();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
