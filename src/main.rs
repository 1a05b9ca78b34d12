use eyre::{Context, Result};
use taskbook::app::services::EventService;
use taskbook::config::{Configuration, init_logger, verbose};
use taskbook::storage::new_storage;
use taskbook::{
    app::{App, destruct_terminal_for_panic},
    cli::Command,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = Command::new();
    if cmd.version() {
        cmd.print_version();
        return Ok(());
    }

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let config = cmd.get_config()?;
    Configuration::init(config.clone())?;
    init_logger(&config.log)?;
    verbose!("[+] Logger initialized");

    verbose!("[+] Initializing storage...");
    let storage = new_storage(&config.storage)
        .await
        .wrap_err("initializing storage")?;
    verbose!("[+] Storage initialized");

    let mut app = App::new(storage);
    app.refresh().await.wrap_err("loading tasks")?;
    log::info!("Starting {}", taskbook::config::version());

    let mut events = EventService::new();
    app.run(&mut events).await?;

    log::info!("Bye");
    Ok(())
}
