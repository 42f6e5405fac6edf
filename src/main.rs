use std::io;

use anyhow::Result;
use figures::console::{demo_shapes, Console, ConsoleConfig};
use figures::IdGenerator;

fn main() -> Result<()> {
    figures::logging::init();

    let mut ids = IdGenerator::new();
    let shapes = demo_shapes(&mut ids);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), ConsoleConfig::default(), ids, shapes);
    console.run()?;

    Ok(())
}
