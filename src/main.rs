fn main() -> anyhow::Result<()> {
    wellmind_lib::run()
}
