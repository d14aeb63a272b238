fn main() -> Result<(), example::DemoError> {
    example::init_tracing();
    let style_path = std::env::args().nth(1);
    example::run(style_path.as_deref())
}
