use slipstream_runner::prelude::*;

fn main() -> anyhow::Result<()> {
    let cli = init();

    let report = run(cli)?;

    println!("{}", report.message);
    println!("{}", serde_json::to_string_pretty(&report.data)?);

    Ok(())
}
