fn main() -> anyhow::Result<()> {
    shapetap::run()?;
    Ok(())
}
