use tracing::Level;

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger init failed: {e}");
    }
    dioxus::launch(dx_task_list::App);
}
