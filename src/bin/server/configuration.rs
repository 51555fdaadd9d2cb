use tokenpair::server;

#[derive(clap::Parser)]
#[command(version, about, long_about = None)]
pub struct Configuration {
    #[clap(flatten)]
    pub server_configuration: server::Configuration,
}
