fn main() {
    pretty_env_logger::init();

    std::process::exit(subcon::run());
}
