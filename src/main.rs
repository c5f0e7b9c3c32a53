fn main() {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()
        .expect("failed to build logger instance");

    let channels = campus_bridge::BridgeChannels::default();
    campus_backend::run(channels.backend_rx, channels.backend_tx);
    campus_shell::run(channels.shell_rx, channels.shell_tx).expect("failed to run shell");
}
