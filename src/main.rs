fn main() -> anyhow::Result<()> {
    mood_lamp_lib::run()
}
