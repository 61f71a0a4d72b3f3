fn main() -> Result<(), Box<dyn std::error::Error>> {
    equivgen::driver::main()
}
