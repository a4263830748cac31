fn main() -> Result<(), Box<dyn std::error::Error>> {
    musicboard::runtime::run()
}
