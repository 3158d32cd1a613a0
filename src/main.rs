use hangman::ui::terminal;

fn init_logging() {
    env_logger::init();
}

fn main() {
    init_logging();
    terminal::run();
}
