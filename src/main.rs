use anyhow::Context;
use tracing::{info, Instrument};
use drink_dispenser::{setup_tracing, DispenserSystem, MachineConfig};

/// Loads a machine file, pours every beverage on its menu once, and prints
/// one line per outcome.
///
/// ```bash
/// drink_dispenser data/machine.json
/// DISPENSER_MACHINE_FILE=data/machine.json RUST_LOG=debug drink_dispenser
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let path = MachineConfig::locate(std::env::args().nth(1))?;
    let machine = MachineConfig::from_path(&path)
        .with_context(|| format!("loading machine from {}", path.display()))?;
    info!(path = %path.display(), outlets = machine.outlets(), "Machine loaded");

    let system = DispenserSystem::from_machine(&machine).await?;

    let span = tracing::info_span!("pour_menu");
    let mut outcomes = async {
        info!("Pouring every beverage on the menu");
        system.dispenser.pour_drinks(machine.beverages()).await
    }
    .instrument(span)
    .await;

    while let Some(outcome) = outcomes.recv().await {
        println!("{outcome}");
    }

    let levels = system.dispenser.inventory().stock_levels().await?;
    info!(?levels, "Remaining stock");

    system.shutdown().await?;
    Ok(())
}
