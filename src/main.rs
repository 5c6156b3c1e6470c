fn main() -> anyhow::Result<()> {
    nbu_explorer::cli::run()
}
