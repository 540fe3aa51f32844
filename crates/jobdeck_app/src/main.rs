mod app;
mod catalog;
mod effects;
mod render;

fn main() {
    if let Err(err) = app::run() {
        eprintln!("jobdeck: {err}");
        std::process::exit(1);
    }
}
